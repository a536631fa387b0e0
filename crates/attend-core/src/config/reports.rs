//! Reporting configuration.

use serde::{Deserialize, Serialize};

/// Settings for the attendance reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// A student whose attendance percentage is strictly below this value
    /// is listed as a defaulter.
    #[serde(default = "default_threshold")]
    pub defaulter_threshold_percent: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            defaulter_threshold_percent: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    75.0
}
