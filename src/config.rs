use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PACE_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,

    /// Pause between consecutive batch commands.
    pub pace_ms: u64,

    /// Script file extensions accepted for batch execution (without the dot).
    pub script_extensions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pace_ms: DEFAULT_PACE_MS,
            script_extensions: vec!["txt".to_string(), "mia".to_string()],
        }
    }
}

impl ClientConfig {
    /// Defaults, optionally overlaid by a JSON file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn with_overrides(mut self, base_url: Option<String>, pace_ms: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(ms) = pace_ms {
            self.pace_ms = ms;
        }
        self
    }

    pub fn validate(mut self) -> Result<Self> {
        let url = self.base_url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            anyhow::bail!("base url must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("base url must start with http:// or https:// (got {})", url);
        }
        self.base_url = url;

        self.script_extensions = self
            .script_extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        if self.script_extensions.is_empty() {
            anyhow::bail!("at least one script extension is required");
        }
        Ok(self)
    }

    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
