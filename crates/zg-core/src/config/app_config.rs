//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only the configuration the application layer needs; loading and file
/// handling live in the outer layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Registration API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Registration API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the registration server
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}
