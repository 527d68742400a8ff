//! Connection state shared by the dashboard and the chat client

use crate::adapter::{AccountInfo, NetworkInfo, WalletAdapter, WalletInfo};
use crate::error::WalletError;
use crate::preferences::{PreferenceStore, Preferences};
use crate::registry::WalletRegistry;
use std::sync::Arc;
use tracing::{debug, info};

pub struct WalletSession {
    registry: WalletRegistry,
    store: PreferenceStore,
    prefs: Preferences,
    current: Option<Arc<dyn WalletAdapter>>,
    account: Option<AccountInfo>,
}

impl WalletSession {
    pub fn new(registry: WalletRegistry, store: PreferenceStore) -> Self {
        let prefs = store.load();
        Self {
            registry,
            store,
            prefs,
            current: None,
            account: None,
        }
    }

    /// Reconnect the last wallet when auto-connect is on.
    ///
    /// Returns whether a connection was made.
    pub async fn restore(&mut self) -> Result<bool, WalletError> {
        if !self.prefs.auto_connect {
            return Ok(false);
        }
        let Some(name) = self.prefs.last_wallet.clone() else {
            return Ok(false);
        };
        debug!(wallet = %name, "auto-connecting");
        self.connect(&name).await?;
        Ok(true)
    }

    pub async fn connect(&mut self, wallet_name: &str) -> Result<AccountInfo, WalletError> {
        let adapter = self
            .registry
            .get(wallet_name)
            .ok_or_else(|| WalletError::UnknownWallet(wallet_name.to_string()))?;
        let account = adapter.connect().await?;
        info!(wallet = %wallet_name, address = %account.address, "wallet connected");

        self.current = Some(adapter);
        self.account = Some(account.clone());
        self.prefs.last_wallet = Some(wallet_name.to_string());
        self.store.save(&self.prefs)?;
        Ok(account)
    }

    pub async fn disconnect(&mut self) -> Result<(), WalletError> {
        if let Some(adapter) = self.current.take() {
            adapter.disconnect().await?;
        }
        self.account = None;
        self.prefs.last_wallet = None;
        self.store.save(&self.prefs)
    }

    pub fn connected(&self) -> bool {
        self.current.is_some() && self.account.is_some()
    }

    pub fn account(&self) -> Option<&AccountInfo> {
        self.account.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.address.as_str())
    }

    pub fn network(&self) -> Option<NetworkInfo> {
        self.current.as_ref().and_then(|w| w.network())
    }

    pub fn wallet(&self) -> Option<WalletInfo> {
        self.current.as_ref().map(|w| w.info())
    }

    /// Signer for the connected account
    pub fn adapter(&self) -> Option<Arc<dyn WalletAdapter>> {
        self.current.clone()
    }

    pub fn registry(&self) -> &WalletRegistry {
        &self.registry
    }

    pub fn auto_connect(&self) -> bool {
        self.prefs.auto_connect
    }

    /// Persists immediately so the next start sees the new value
    pub fn set_auto_connect(&mut self, enabled: bool) -> Result<(), WalletError> {
        self.prefs.auto_connect = enabled;
        self.store.save(&self.prefs)
    }
}
