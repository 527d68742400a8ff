//! Wiring between configuration, the wallet session and the controllers

use crate::config::AppConfig;
use anyhow::{bail, Context, Result};
use aptos_health_chain::{ChainClient, Network, RestClient};
use aptos_health_chat::{ChatWidget, HttpChatBackend};
use aptos_health_dashboard::{Dashboard, Phase};
use aptos_health_wallet::{LocalKeyWallet, PreferenceStore, WalletRegistry, WalletSession};
use std::sync::Arc;
use tracing::{debug, info};

/// A new client is due when the account or the active network changed
fn needs_attach(dashboard: &Dashboard, address: &str, network: Network) -> bool {
    dashboard.account() != Some(address) || dashboard.network() != Some(network)
}

pub struct App {
    config: AppConfig,
    session: WalletSession,
    dashboard: Dashboard,
}

impl App {
    /// Register every configured wallet adapter and load preferences
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut registry = WalletRegistry::new();
        if let Some(key) = &config.wallet {
            let wallet = LocalKeyWallet::new(key.clone(), &config.node)
                .context("loading the local key wallet")?;
            registry.register_wallet(Arc::new(wallet))?;
        }
        debug!(wallets = registry.wallets().len(), "wallets registered");

        let session = WalletSession::new(registry, PreferenceStore::new(&config.preferences_path));
        let dashboard = Dashboard::new(config.module_id());
        Ok(Self {
            config,
            session,
            dashboard,
        })
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut WalletSession {
        &mut self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Connect `wallet` if named, otherwise reconnect per the auto-connect preference
    pub async fn connect(&mut self, wallet: Option<&str>) -> Result<bool> {
        if self.session.connected() {
            return Ok(true);
        }
        match wallet {
            Some(name) => {
                self.session.connect(name).await?;
                Ok(true)
            }
            None => Ok(self.session.restore().await?),
        }
    }

    /// Network the chain client should target: the wallet's, else the configured one
    pub fn network_name(&self) -> String {
        self.session
            .network()
            .map(|n| n.name)
            .unwrap_or_else(|| self.config.network.clone())
    }

    /// Connected dashboard, loaded for the wallet's account
    pub async fn dashboard(&mut self, wallet: Option<&str>) -> Result<&mut Dashboard> {
        if !self.connect(wallet).await? {
            bail!(
                "Wallet not connected. Pass --wallet <NAME> or run `aptos-health wallet connect` \
                 and `aptos-health wallet auto-connect on`."
            );
        }

        let (Some(adapter), Some(address)) = (
            self.session.adapter(),
            self.session.address().map(str::to_string),
        ) else {
            bail!("Wallet not connected");
        };

        let network = Network::from_name(&self.network_name());
        if needs_attach(&self.dashboard, &address, network) {
            let client = RestClient::new(network, &self.config.node)?;
            info!(network = %client.network(), node = %client.base_url(), "chain client ready");
            self.dashboard.attach(Arc::new(client), adapter, address).await;
        }
        Ok(&mut self.dashboard)
    }

    /// Dashboard that has a provider registry to work with
    pub async fn initialized_dashboard(&mut self, wallet: Option<&str>) -> Result<&mut Dashboard> {
        let dashboard = self.dashboard(wallet).await?;
        if dashboard.phase() != Phase::Initialized {
            bail!("Healthcare provider is not initialized. Run `aptos-health init` first.");
        }
        Ok(dashboard)
    }

    pub fn chat_widget(&self) -> ChatWidget {
        ChatWidget::new(Arc::new(HttpChatBackend::new(&self.config.chat.url)))
    }
}
