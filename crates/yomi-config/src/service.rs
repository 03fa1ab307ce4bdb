use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://ichi.moe/cl/qr/".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("yomi/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Where and how the analysis service is queried
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout, enforced by the HTTP client only
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ServiceConfig {
    pub fn new() -> Self {
        let base_url = env::var("YOMI_SERVICE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("YOMI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
