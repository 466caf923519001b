use super::VariablesDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize variables: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Serializes the document as JSON; compact unless `pretty`
pub fn to_json(doc: &VariablesDocument, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

/// Writes the document to `path` in one go, replacing any existing file
pub fn write_document(
    doc: &VariablesDocument,
    path: &Path,
    pretty: bool,
) -> Result<(), OutputError> {
    let json = to_json(doc, pretty)?;

    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), variables = doc.len(), "Wrote variables document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{Source, VariableIndex};
    use tempfile::TempDir;

    fn doc() -> VariablesDocument {
        let mut index = VariableIndex::new();
        index.insert("park_timeout", Source::new("src", "switch_ivr.c", 88));
        VariablesDocument::new(index, "v1.10.0")
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = to_json(&doc(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"{"variables":[{"name":"park_timeout""#));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = to_json(&doc(), true).unwrap();
        assert!(json.contains("\n  \"variables\""));
    }

    #[test]
    fn test_write_and_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("variables.json");

        write_document(&doc(), &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: VariablesDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, doc());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no/such/dir/variables.json");

        let err = write_document(&doc(), &path, false).unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert!(err.to_string().contains("variables.json"));
    }
}
