//! Benchmarks for adding entries to a selection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use share_selection::SelectionController;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

/// Create a benchmark directory with the given number of files spread over subdirectories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let files_per_dir = file_count / dir_count.max(1);

    for d in 0..dir_count {
        let subdir = dir.path().join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let mut file = File::create(subdir.join(format!("file{}.txt", f))).unwrap();
            file.write_all(&[b'x'; 1024]).unwrap();
        }
    }

    dir
}

fn benchmark_add_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_directory");

    for size in [100, 500, 1000].iter() {
        let dir = create_benchmark_dir(*size, 10);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut controller = SelectionController::default();
                controller.add_entry(black_box(dir.path())).unwrap();
                controller.view_state()
            })
        });
    }

    group.finish();
}

fn benchmark_add_many_files(c: &mut Criterion) {
    let dir = create_benchmark_dir(500, 1);
    let paths: Vec<_> = fs::read_dir(dir.path().join("dir0"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();

    c.bench_function("add_500_files", |b| {
        b.iter(|| {
            let mut controller = SelectionController::default();
            let report = controller.add_entries(black_box(&paths));
            assert!(report.is_clean());
            controller.len()
        })
    });
}

criterion_group!(benches, benchmark_add_directory, benchmark_add_many_files);
criterion_main!(benches);
