//! Types shared by every task request and response.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Options`] | Per-request service options (`use_cache`, `wait_for_model`) |
//! | [`ErrorResponse`] | Error payload the service returns alongside a non-success status |

use serde::{Deserialize, Serialize};

/// Service options accepted by every inference task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// (Default: true). The service caches identical requests; set to false to force a fresh run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,

    /// (Default: false). Wait for a cold model to load instead of receiving a 503.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_model: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = Some(use_cache);
        self
    }

    pub fn with_wait_for_model(mut self, wait: bool) -> Self {
        self.wait_for_model = Some(wait);
        self
    }

    /// True when no option is set; such an object is left out of the request body.
    pub fn is_empty(&self) -> bool {
        self.use_cache.is_none() && self.wait_for_model.is_none()
    }
}

/// Error payload returned by the service.
///
/// The `error` field is usually a string but some pipelines report a list of messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn into_message(self) -> String {
        match self {
            ErrorMessage::Single(s) => s,
            ErrorMessage::Many(v) => v.join("; "),
        }
    }
}
