//! Visualization generation for interaction networks
//!
//! Provides generators for Mermaid diagrams (for Markdown) and data structures
//! for the vis-network based HTML page.

pub mod mermaid;
pub mod vis;

pub use mermaid::MermaidGenerator;
pub use vis::{script_json, PageSettings, VisGraph, VisOptions};
