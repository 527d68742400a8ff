//! Auto-connect preference persisted between runs

use crate::error::WalletError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Reconnect the last wallet on start
    pub auto_connect: bool,
    /// Name of the wallet connected most recently
    pub last_wallet: Option<String>,
}

/// JSON file holding [`Preferences`]
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file yields the defaults
    pub fn load(&self) -> Preferences {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Preferences::default(),
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt preferences");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), WalletError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| WalletError::Preferences(e.to_string()))?;
            }
        }
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| WalletError::Preferences(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| WalletError::Preferences(e.to_string()))
    }
}
