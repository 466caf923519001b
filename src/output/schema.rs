//! Variables document schema
//!
//! The document written at the end of a run. It is a flat list of variables
//! in case-insensitive name order plus the version of the scanned tree.
//! A separate formatting step downstream canonicalizes it for storage, so the
//! field names here are the contract with that step.

use crate::scan::{Variable, VariableIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablesDocument {
    pub variables: Vec<Variable>,
    /// `git describe --tags` of the scanned tree, empty if unknown
    #[serde(default)]
    pub version: String,
}

impl VariablesDocument {
    pub fn new(index: VariableIndex, version: impl Into<String>) -> Self {
        Self {
            variables: index.into_sorted(),
            version: version.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl fmt::Display for VariablesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = if self.version.is_empty() {
            "unknown"
        } else {
            self.version.as_str()
        };
        writeln!(f, "Variables ({}), version {}:", self.len(), version)?;
        for var in &self.variables {
            writeln!(f, "  {} ({} references)", var.name, var.sources.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Source;

    fn sample_index() -> VariableIndex {
        let mut index = VariableIndex::new();
        index.insert("sip_to_user", Source::new("src/mod/endpoints/mod_sofia", "sofia.c", 42));
        index.insert("Bridge_To", Source::new("src", "switch_ivr_bridge.c", 7));
        index.insert("answer_epoch", Source::new("src", "switch_channel.c", 3));
        index
    }

    #[test]
    fn test_new_sorts_variables() {
        let doc = VariablesDocument::new(sample_index(), "v1.10.11");
        let names: Vec<&str> = doc.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["answer_epoch", "Bridge_To", "sip_to_user"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let mut index = VariableIndex::new();
        index.insert("hangup_cause", Source::new("src", "switch_channel.c", 10));
        let doc = VariablesDocument::new(index, "v1.10.11");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "variables": [{
                    "name": "hangup_cause",
                    "sources": [{"path": "src", "filename": "switch_channel.c", "line": 10}]
                }],
                "version": "v1.10.11"
            })
        );
    }

    #[test]
    fn test_deserialize_without_version() {
        let doc: VariablesDocument = serde_json::from_str(r#"{"variables": []}"#).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.version, "");
    }

    #[test]
    fn test_display() {
        let doc = VariablesDocument::new(sample_index(), "");
        let display = format!("{}", doc);
        assert!(display.contains("Variables (3), version unknown:"));
        assert!(display.contains("answer_epoch (1 references)"));
    }
}
