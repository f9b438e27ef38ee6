//! Bioremediation records
//!
//! A [`Record`] describes one studied organism: the metals it was tested
//! against, the conditions it was tested under and the reported outcomes.
//! Condition and outcome values are either a single value or a per-key
//! breakdown, modeled by [`FieldValue`].

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// Key under `results` that names the fitted adsorption isotherm
pub const ADSORPTION_MODEL_KEY: &str = "adsorption_model";

/// A key/value mapping that keeps its insertion order
///
/// Deserializes from any map and preserves the order keys appear in the
/// source document, which drives node and edge ordering downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<V>(Vec<(String, V)>);

impl<V> Entries<V> {
    /// Create an empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value, replacing the value of an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Entries::new();
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.insert(key, value);
        }
        Ok(entries)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// A measured condition or reported outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single value such as `"87.69 %"`
    Scalar(String),
    /// A per-key breakdown such as `{ cadmium = "0.40 µg/g biomass" }`
    Nested(Entries<String>),
}

impl FieldValue {
    /// Scalar value helper
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Nested value helper
    #[must_use]
    pub fn nested<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Nested(pairs.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// The scalar text, if this is a scalar
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    /// Flatten into `(key, value)` leaves
    ///
    /// A scalar yields one leaf under `key`; a nested value yields one leaf
    /// per inner pair and ignores `key`.
    #[must_use]
    pub fn leaves<'a>(&'a self, key: &'a str) -> Vec<(&'a str, &'a str)> {
        match self {
            Self::Scalar(value) => vec![(key, value.as_str())],
            Self::Nested(inner) => inner.iter().map(|(k, v)| (k, v.as_str())).collect(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::scalar(value)
    }
}

/// Accepts strings, numbers and booleans as text
struct ScalarText(String);

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = ScalarText;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ScalarText(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ScalarText(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarTextVisitor)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar value or a map of scalar values")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::scalar(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Scalar(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut inner = Entries::new();
        while let Some((key, ScalarText(value))) = map.next_entry::<String, ScalarText>()? {
            inner.insert(key, value);
        }
        Ok(FieldValue::Nested(inner))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// One studied organism and its findings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Organism name
    pub subject: String,
    /// Heavy metals studied with this organism
    pub agents: Vec<String>,
    /// Test conditions (concentration ranges and the like)
    pub measurements: Entries<FieldValue>,
    /// Reported outcomes
    pub results: Entries<FieldValue>,
}

impl Record {
    /// Create a record with no agents, measurements or results
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            agents: Vec::new(),
            measurements: Entries::new(),
            results: Entries::new(),
        }
    }

    /// Add a studied metal
    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agents.push(agent.into());
        self
    }

    /// Add a test condition
    #[must_use]
    pub fn with_measurement(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.measurements.insert(key, value.into());
        self
    }

    /// Add an outcome
    #[must_use]
    pub fn with_result(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.results.insert(key, value.into());
        self
    }

    /// The fitted adsorption model, when reported as a single value
    #[must_use]
    pub fn adsorption_model(&self) -> Option<&str> {
        self.results
            .get(ADSORPTION_MODEL_KEY)
            .and_then(FieldValue::as_scalar)
    }
}
