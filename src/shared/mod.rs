//! Shared module for configuration, logging and version info

pub mod config;
pub mod logger;

/// Returns the current version of the `algae-network` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
