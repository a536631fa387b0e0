//! Frontend link configuration.

use serde::{Deserialize, Serialize};

/// Where the student-facing frontend lives, used to build the URL encoded
/// into each lecture's QR code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Base URL of the frontend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the attendance page on the frontend.
    #[serde(default = "default_attend_path")]
    pub attend_path: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            attend_path: default_attend_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_attend_path() -> String {
    "/attend".to_string()
}
