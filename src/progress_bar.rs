use indicatif::{ProgressBar, ProgressStyle};

/// Get a standardized spinner style for the directory walk
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}: {pos} entries [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Spinner drawn on stderr, or a hidden one when progress is disabled.
///
/// No steady tick: the spinner only advances when the walk calls `inc`.
pub fn walk_spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    ProgressBar::new_spinner()
        .with_style(spinner_style())
        .with_message("Scanning")
}
