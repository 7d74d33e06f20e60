use humansize::BINARY;

/// Format size in human-readable binary units ("1.50 KiB")
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, BINARY)
}
