//! Venue-category taxonomy types
//!
//! Mirrors the `response` object of the Foursquare `venues/categories`
//! endpoint. Fields the tool does not use are ignored when parsing; the
//! on-disk cache keeps the raw document so nothing is lost.

use crate::error::{FsqError, Result};
use serde::{Deserialize, Serialize};

/// Icon location of a category, split the way the API returns it.
///
/// The full image URL is `prefix + <size> + suffix`, e.g.
/// `https://ss3.4sqi.net/img/categories_v2/food/default_` + `88` + `.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    pub prefix: String,
    pub suffix: String,
}

/// A node of the venue-category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    pub icon: Icon,

    /// Sub-categories; leaves carry an empty list or omit the field.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Category {
    /// Whether this category has sub-categories
    pub fn has_children(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn walk_count(&self) -> usize {
        1 + self.categories.iter().map(Category::walk_count).sum::<usize>()
    }
}

/// The document stored in `categories.json`: `{ "categories": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesDocument {
    pub categories: Vec<Category>,
}

impl CategoriesDocument {
    /// Parse a document from a JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if value.get("categories").map_or(true, |c| !c.is_array()) {
            return Err(FsqError::InvalidTaxonomy(
                "expected an object with a 'categories' list".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Total number of categories at every level
    pub fn total_count(&self) -> usize {
        self.categories.iter().map(Category::walk_count).sum()
    }
}
