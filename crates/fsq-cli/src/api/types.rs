//! API response types
//!
//! Every v2 response is wrapped in a `meta` / `response` envelope.

use serde::{Deserialize, Serialize};

/// Standard v2 response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub meta: Meta,
    #[serde(default)]
    pub response: Option<T>,
}

/// Status block of a v2 response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl Meta {
    pub fn is_success(&self) -> bool {
        self.code == 200
    }

    /// Human readable description of a failed request
    pub fn describe_error(&self) -> String {
        match (&self.error_type, &self.error_detail) {
            (Some(kind), Some(detail)) => format!("{} ({}): {}", kind, self.code, detail),
            (Some(kind), None) => format!("{} ({})", kind, self.code),
            (None, Some(detail)) => format!("{} ({})", detail, self.code),
            (None, None) => format!("request failed with code {}", self.code),
        }
    }
}
