//! Shared library for `algae-network`
//! Builds the microalgae / heavy-metal interaction network and renders it.

pub mod core;
pub mod shared;

pub use shared::*;
