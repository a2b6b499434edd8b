//! Logger setup

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Level used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global logger
///
/// Honours `RUST_LOG`. With `log_file` set, records are appended to that file
/// instead of stderr so they do not tear through the terminal UI.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests, embedding); keep the first one
    let _ = builder.try_init();
    Ok(())
}
