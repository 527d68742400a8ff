//! TOML configuration with a default for every key

use anyhow::{Context, Result};
use aptos_health_chain::{ModuleId, NodeConfig, DEFAULT_MODULE_ADDRESS, DEFAULT_MODULE_NAME};
use aptos_health_chat::DEFAULT_CHAT_URL;
use aptos_health_wallet::LocalKeyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "aptos-health.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used when the connected wallet does not report a network
    pub network: String,
    pub node: NodeConfig,
    pub module: ModuleConfig,
    pub chat: ChatConfig,
    /// Local signing key; without it no wallet is registered
    pub wallet: Option<LocalKeyConfig>,
    pub preferences_path: PathBuf,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub address: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: "testnet".to_string(),
            node: NodeConfig::default(),
            module: ModuleConfig::default(),
            chat: ChatConfig::default(),
            wallet: None,
            preferences_path: PathBuf::from(".aptos-health/preferences.json"),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_MODULE_ADDRESS.to_string(),
            name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CHAT_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `path`, or the default file if present, or fall back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.module.address.clone(), self.module.name.clone())
    }
}
