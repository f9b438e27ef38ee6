//! CLI command handlers for `algaenet`.
//!
//! Each command is implemented in its own submodule. Handlers print their
//! own success and failure lines and report failure through their return value.

pub mod config;
pub mod render;
pub mod summary;

use algae_network::core::Dataset;
use algae_network::logger::file_logging_active;
use log::error;
use std::path::Path;

/// Load `input`, or the bundled findings when no file is given
fn load_dataset(input: Option<&Path>) -> Result<Dataset, String> {
    let loaded = input.map_or_else(Dataset::builtin, Dataset::load);
    loaded.map_err(|e| {
        let source = input.map_or_else(|| "bundled dataset".to_string(), |p| p.display().to_string());
        log_failure(&format!("Failed to load {source}: {e}"));
        format!("✗ Failed to load {source}: {e}")
    })
}

/// Record a failure in the log file
///
/// Without a file sink the handler's `✗` line is the only terminal output.
fn log_failure(message: &str) {
    if file_logging_active() {
        error!("{message}");
    }
}
