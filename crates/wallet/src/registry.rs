use crate::adapter::{WalletAdapter, WalletInfo};
use crate::error::WalletError;
use std::sync::Arc;
use tracing::info;

/// Wallets available to the session, in registration order
#[derive(Default, Clone)]
pub struct WalletRegistry {
    wallets: Vec<Arc<dyn WalletAdapter>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time registration performed by the entry point
    pub fn register_wallet(&mut self, adapter: Arc<dyn WalletAdapter>) -> Result<(), WalletError> {
        let name = adapter.info().name;
        if self.get(&name).is_some() {
            return Err(WalletError::AlreadyRegistered(name));
        }
        info!(wallet = %name, "wallet registered");
        self.wallets.push(adapter);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn WalletAdapter>> {
        self.wallets
            .iter()
            .find(|w| w.info().name == name)
            .cloned()
    }

    pub fn wallets(&self) -> Vec<WalletInfo> {
        self.wallets.iter().map(|w| w.info()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

impl std::fmt::Debug for WalletRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.wallets.iter().map(|w| w.info().name))
            .finish()
    }
}
