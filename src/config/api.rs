use serde::Deserialize;
use std::time::Duration;

fn default_timeout_seconds() -> u64 {
    10
}

/// Where the fantasy REST backend lives
#[derive(Deserialize, Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
