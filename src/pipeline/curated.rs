//! Hand-curated composite keys resolving ambiguous alternative-name matches
//!
//! Keys are the concatenation of a borrowed IUPHAR family id and the
//! zero-based expanded-row index. They come from manual review of known
//! false positives and known-correct duplicates; no further semantics should
//! be read into them. The built-in sets match the current curation state and
//! can be overridden from a JSON file so curation updates do not require a
//! rebuild.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Result;

/// Stage C false-positive keys: matches excluded outright.
const EXCLUDED_KEYS: &[&str] = &["521825", "3271956"];

/// Stage D known-correct keys: the only multi-match rows kept.
const WHITELISTED_KEYS: &[&str] = &[
    "176838", "3231184", "49639", "5721806", "7381101", "765326", "8401880",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedKeys {
    pub excluded: Vec<String>,
    pub whitelisted: Vec<String>,
}

impl Default for CuratedKeys {
    fn default() -> Self {
        CuratedKeys {
            excluded: EXCLUDED_KEYS.iter().map(|s| s.to_string()).collect(),
            whitelisted: WHITELISTED_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CuratedKeys {
    /// Load an override set from a JSON file of the shape
    /// `{"excluded": [...], "whitelisted": [...]}`.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let keys: CuratedKeys = serde_json::from_str(&raw)
            .map_err(|e| crate::GtopError::Parse(format!("curated key file: {}", e)))?;
        info!(
            "loaded curated keys: {} excluded, {} whitelisted",
            keys.excluded.len(),
            keys.whitelisted.len()
        );
        Ok(keys)
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.iter().any(|k| k == key)
    }

    pub fn is_whitelisted(&self, key: &str) -> bool {
        self.whitelisted.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys() {
        let keys = CuratedKeys::default();
        assert!(keys.is_excluded("521825"));
        assert!(!keys.is_excluded("176838"));
        assert!(keys.is_whitelisted("176838"));
        assert!(!keys.is_whitelisted("521825"));
    }

    #[test]
    fn test_json_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");
        std::fs::write(&path, r#"{"excluded": ["11"], "whitelisted": ["22", "33"]}"#).unwrap();
        let keys = CuratedKeys::from_json_path(&path).unwrap();
        assert!(keys.is_excluded("11"));
        assert!(keys.is_whitelisted("33"));
        assert!(!keys.is_excluded("521825"));
    }
}
