use anyhow::Result;
use clap::{CommandFactory, Parser};

use share_selection::cli::{Cli, Command};
use share_selection::commands;
use share_selection::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Command::List(args) => {
            tracing::info!(?args, "Listing selection");
            commands::list::run(args, &config)?;
        }
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            share_selection::tui::run(args.paths, args.follow_symlinks, &config)?;
        }
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "share-selection",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("share_selection={}", level)));

    // stderr keeps stdout clean for listings and the TUI screen
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
