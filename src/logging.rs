use std::io::IsTerminal;
use tracing::Level;

/// Install the global fmt subscriber. Logs go to stderr; stdout is reserved for status lines.
pub fn init_logger(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}
