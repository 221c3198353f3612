//! Content file - ordered label/description records loaded once at startup.
//!
//! Format: a JSON array of objects
//! ```json
//! [
//!   { "label": "First", "description": "Shown when First is expanded" }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default content file name, looked up next to the executable
pub const DEFAULT_CONTENT_FILE: &str = "buttons.json";

/// One button label and the description shown in its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub label: String,
    pub description: String,
}

impl ContentEntry {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Parse content from a JSON string.
pub fn parse_content(json: &str) -> Result<Vec<ContentEntry>> {
    let entries: Vec<ContentEntry> =
        serde_json::from_str(json).context("Expected a JSON array of {label, description} objects")?;
    Ok(entries)
}

/// Read and parse the content file.
pub fn load_content(path: &Path) -> Result<Vec<ContentEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    let entries = parse_content(&json)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))?;

    log::info!("Loaded {} entries from {}", entries.len(), path.display());
    if entries.is_empty() {
        log::warn!("Content file {} has no entries", path.display());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("accordion_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_in_order() {
        let entries = parse_content(
            r#"[{"label":"A","description":"desc A"},{"label":"B","description":"desc B"}]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![ContentEntry::new("A", "desc A"), ContentEntry::new("B", "desc B")]
        );
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_content("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(parse_content(r#"[{"label":"A"}]"#).is_err());
    }

    #[test]
    fn test_parse_rejects_object_root() {
        assert!(parse_content(r#"{"label":"A","description":"x"}"#).is_err());
    }

    #[test]
    fn test_load_file() {
        let path = temp_file("ok.json", r#"[{"label":"Only","description":"Line 1\nLine 2"}]"#);
        let entries = load_content(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "Line 1\nLine 2");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let path = std::env::temp_dir().join("accordion_definitely_missing.json");
        let err = load_content(&path).unwrap_err();
        assert!(format!("{err:#}").contains("accordion_definitely_missing.json"));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = temp_file("bad.json", "[{\"label\": ");
        let err = load_content(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse content file"));
        std::fs::remove_file(path).ok();
    }
}
