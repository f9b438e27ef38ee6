//! Core module: records, the interaction network and its renderers

pub mod builder;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;

pub use builder::{build_network, NetworkBuilder};
pub use dataset::Dataset;
pub use error::{NetworkError, Result};
