//! JSON-backed knowledge document with a built-in fallback.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Context paragraph used when no knowledge document is available.
pub const DEFAULT_FAQS_CONTEXT: &str =
    "Renewable energy includes solar, wind, and hydro power.";

/// FAQ context paragraph plus an ordered list of energy tips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub faqs_context: String,
    #[serde(default)]
    pub energy_tips: Vec<String>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            faqs_context: DEFAULT_FAQS_CONTEXT.to_string(),
            energy_tips: Vec::new(),
        }
    }
}

impl KnowledgeBase {
    /// Reads and parses the knowledge document at `path`. Any read or parse
    /// failure substitutes the built-in default; startup never fails here.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<KnowledgeBase>(&raw) {
                Ok(kb) => kb,
                Err(e) => {
                    tracing::warn!(
                        "knowledge document {} is not valid JSON ({}); using built-in default",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "knowledge document {} unreadable ({}); using built-in default",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_path_parses_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"faqs_context": "Solar basics.", "energy_tips": ["Use LED bulbs."]}}"#
        )
        .unwrap();

        let kb = KnowledgeBase::load_path(file.path());
        assert_eq!(kb.faqs_context, "Solar basics.");
        assert_eq!(kb.energy_tips, vec!["Use LED bulbs.".to_string()]);
    }

    #[test]
    fn load_path_missing_tips_field_defaults_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"faqs_context": "Solar basics."}}"#).unwrap();

        let kb = KnowledgeBase::load_path(file.path());
        assert_eq!(kb.faqs_context, "Solar basics.");
        assert!(kb.energy_tips.is_empty());
    }

    #[test]
    fn load_path_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let kb = KnowledgeBase::load_path(dir.path().join("nope.json"));
        assert_eq!(kb.faqs_context, DEFAULT_FAQS_CONTEXT);
        assert!(kb.energy_tips.is_empty());
    }

    #[test]
    fn load_path_corrupt_file_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let kb = KnowledgeBase::load_path(file.path());
        assert_eq!(kb.faqs_context, DEFAULT_FAQS_CONTEXT);
    }
}
