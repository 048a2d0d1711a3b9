//! Local cache of the venue-category taxonomy
//!
//! The fetched `response` object is written verbatim to a JSON file
//! (`categories.json` by default) so later runs can walk the tree without
//! touching the API.

use crate::error::{CliError, Result};
use fsq_common::{CategoriesDocument, Category};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Indentation of the cache file
const INDENT: &[u8] = b"    ";

/// File-backed taxonomy cache
#[derive(Debug, Clone)]
pub struct TaxonomyCache {
    path: PathBuf,
}

impl TaxonomyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the raw taxonomy document, replacing any previous cache
    pub fn save(&self, taxonomy: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        taxonomy.serialize(&mut serializer)?;

        // Replace via a sibling temp file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &buf)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = buf.len(), "Saved taxonomy cache");
        Ok(())
    }

    /// Load the cached document
    pub fn load_document(&self) -> Result<CategoriesDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CliError::TaxonomyNotCached(self.path.display().to_string()));
            },
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&content)?;
        Ok(CategoriesDocument::from_json_value(value)?)
    }

    /// Load the top-level categories
    pub fn load(&self) -> Result<Vec<Category>> {
        Ok(self.load_document()?.categories)
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> Value {
        json!({
            "categories": [{
                "id": "4d4b7105d754a06374d81259",
                "name": "Food",
                "primary": true,
                "icon": {
                    "prefix": "https://ss3.4sqi.net/img/categories_v2/food/default_",
                    "suffix": ".png"
                },
                "categories": []
            }]
        })
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let cache = TaxonomyCache::new(dir.path().join("categories.json"));
        assert!(!cache.exists());

        cache.save(&sample()).unwrap();
        assert!(cache.exists());

        let categories = cache.load().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Food");
    }

    #[test]
    fn test_save_keeps_unmodelled_fields_and_indent() {
        let dir = TempDir::new().unwrap();
        let cache = TaxonomyCache::new(dir.path().join("categories.json"));
        cache.save(&sample()).unwrap();

        let content = fs::read_to_string(cache.path()).unwrap();
        assert!(content.contains("\"primary\": true"));
        assert!(content.starts_with("{\n    \"categories\""));
        assert!(!dir.path().join("categories.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let cache = TaxonomyCache::new(dir.path().join("nested/cache/categories.json"));
        cache.save(&sample()).unwrap();
        assert!(cache.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let cache = TaxonomyCache::new(dir.path().join("missing.json"));
        assert!(matches!(cache.load(), Err(CliError::TaxonomyNotCached(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, "{ \"categories\": [").unwrap();

        let cache = TaxonomyCache::new(&path);
        assert!(matches!(cache.load(), Err(CliError::JsonParse(_))));
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, "{\"meta\": {}}").unwrap();

        let cache = TaxonomyCache::new(&path);
        assert!(matches!(cache.load(), Err(CliError::Taxonomy(_))));
    }
}
