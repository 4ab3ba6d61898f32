//! Console settings

use std::fs;
use std::path::Path;

use anyhow::Context;
use dc_device::DeviceConfig;
use serde::{Deserialize, Serialize};

/// Console configuration, loadable from a JSON file via `--config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Device to simulate
    #[serde(default)]
    pub device: DeviceConfig,
    /// Fallback log filter; the RUST_LOG environment variable wins
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl ConsoleConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}
