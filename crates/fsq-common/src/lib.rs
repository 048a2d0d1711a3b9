//! fsq-icons Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging and error handling for the fsq-icons workspace.
//!
//! # Overview
//!
//! - **Types**: the venue-category taxonomy as returned by the Foursquare API
//! - **Error Handling**: common error and result types
//! - **Logging**: tracing subscriber setup shared by every binary
//!
//! # Example
//!
//! ```no_run
//! use fsq_common::types::CategoriesDocument;
//!
//! fn count(json: &str) -> fsq_common::Result<usize> {
//!     let doc = CategoriesDocument::from_json_str(json)?;
//!     Ok(doc.total_count())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{FsqError, Result};
pub use types::{CategoriesDocument, Category, Icon};
