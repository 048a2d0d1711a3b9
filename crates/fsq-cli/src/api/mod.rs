//! API client module
//!
//! HTTP client for the Foursquare v2 venues API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::*;
