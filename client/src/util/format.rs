//! Display formatting for file sizes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Bytes as KiB with two decimals, e.g. `12.35`.
pub fn format_kib(bytes: f64) -> String {
    format!("{:.2}", bytes / 1024.0)
}

/// Parenthesized size label shown next to each file name.
pub fn file_size_label(bytes: Option<f64>) -> String {
    match bytes {
        Some(bytes) => format!("({} KB)", format_kib(bytes)),
        None => "(size unknown)".to_owned(),
    }
}
