//! Data models for `algae-network`

pub mod network;
pub mod record;

pub use network::{Edge, Network, NodeAttrs, NodeCategory, Relation};
pub use record::{Entries, FieldValue, Record, ADSORPTION_MODEL_KEY};
