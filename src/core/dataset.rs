//! Record datasets: the bundled findings and user-supplied files
//!
//! Both TOML and JSON datasets hold a top-level `record` array. Every record
//! must carry `subject`, `agents`, `measurements` and `results`; a record
//! lacking any of them is rejected with [`NetworkError::MissingField`].

use crate::core::error::{NetworkError, Result};
use crate::core::models::{Entries, FieldValue, Record};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Embedded microalgae findings
const BUILTIN_DATASET: &str = include_str!("../../assets/microalgae.toml");

/// Record as written in a dataset file, before validation
#[derive(Debug, Deserialize)]
struct RawRecord {
    subject: Option<String>,
    agents: Option<Vec<String>>,
    measurements: Option<Entries<FieldValue>>,
    results: Option<Entries<FieldValue>>,
}

impl RawRecord {
    fn validate(self, index: usize) -> Result<Record> {
        let missing = |field| NetworkError::MissingField { index, field };
        Ok(Record {
            subject: self.subject.ok_or_else(|| missing("subject"))?,
            agents: self.agents.ok_or_else(|| missing("agents"))?,
            measurements: self.measurements.ok_or_else(|| missing("measurements"))?,
            results: self.results.ok_or_else(|| missing("results"))?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    record: Vec<RawRecord>,
}

impl RawDataset {
    fn validate(self) -> Result<Dataset> {
        let records = self
            .record
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.validate(index))
            .collect::<Result<Vec<_>>>()?;
        debug!("Validated {} records", records.len());
        Ok(Dataset { records })
    }
}

/// An ordered list of validated records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap already-built records
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The bundled microalgae findings
    ///
    /// # Errors
    /// Returns an error if the embedded dataset fails to parse or validate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DATASET)
    }

    /// Parse a TOML dataset (`[[record]]` tables)
    ///
    /// # Errors
    /// Returns [`NetworkError::Parse`] for malformed TOML and
    /// [`NetworkError::MissingField`] for incomplete records.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let raw: RawDataset = toml::from_str(toml_str)?;
        raw.validate()
    }

    /// Parse a JSON dataset (`{"record": [...]}`)
    ///
    /// # Errors
    /// Returns [`NetworkError::Parse`] for malformed JSON and
    /// [`NetworkError::MissingField`] for incomplete records.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let raw: RawDataset =
            serde_json::from_str(json_str).map_err(|e| NetworkError::Parse(e.to_string()))?;
        raw.validate()
    }

    /// Load a dataset file, picking the format from its extension
    ///
    /// # Errors
    /// Returns an error for unknown extensions, unreadable files and invalid content.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(NetworkError::UnsupportedInput(path.to_path_buf())),
        };

        let content = fs::read_to_string(path)?;
        let dataset = parse(&content)?;
        info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Records in dataset order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads_seven_records() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.records()[0].subject, "Spirulina sp.");
        assert_eq!(dataset.records()[6].subject, "Scenedesmus obliquus");
    }

    #[test]
    fn test_builtin_keeps_document_order() {
        let dataset = Dataset::builtin().unwrap();
        let spirulina = &dataset.records()[0];
        let keys: Vec<_> = spirulina.results.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["metal_factor_concentration", "bioconcentration_capacity"]
        );
        assert!(matches!(
            spirulina.results.get("bioconcentration_capacity"),
            Some(FieldValue::Nested(_))
        ));
    }

    const COMPLETE_RECORD: [&str; 4] = [
        "subject = \"Spirogyra sp.\"",
        "agents = [\"lead\"]",
        "[record.measurements]\nrange = \"105 - 204 mg/L\"",
        "[record.results]\ntime_frame = \"1.867 hours\"",
    ];

    #[test]
    fn test_missing_field_is_reported() {
        let fields = ["subject", "agents", "measurements", "results"];
        for (skip, expected) in fields.into_iter().enumerate() {
            let body: Vec<_> = COMPLETE_RECORD
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, part)| *part)
                .collect();
            let toml_str = format!("[[record]]\n{}\n", body.join("\n"));

            let err = Dataset::from_toml_str(&toml_str).unwrap_err();
            assert!(
                matches!(err, NetworkError::MissingField { index: 0, field } if field == expected),
                "expected missing `{expected}`, got {err}"
            );
        }
    }

    #[test]
    fn test_missing_field_names_record_index() {
        let json = r#"{"record": [
            {"subject": "A", "agents": [], "measurements": {}, "results": {}},
            {"subject": "B", "measurements": {}, "results": {}}
        ]}"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::MissingField {
                index: 1,
                field: "agents"
            }
        ));
        assert_eq!(
            err.to_string(),
            "record #1 is missing required field `agents`"
        );
    }

    #[test]
    fn test_json_dataset() {
        let json = r#"{"record": [{
            "subject": "Ulothrix zonata",
            "agents": ["copper"],
            "measurements": {"range": "5 - 52 mg/L"},
            "results": {"adsorption_model": "langmuir", "removal_time": "1200s"}
        }]}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].adsorption_model(), Some("langmuir"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Dataset::load(Path::new("records.csv")).unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedInput(_)));
    }
}
