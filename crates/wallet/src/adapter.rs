//! The seam between the dashboard and a concrete wallet

use crate::error::WalletError;
use aptos_health_chain::{EntryFunctionPayload, PendingTransaction};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Display identity of a wallet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub name: String,
    /// URL or data URI of the wallet's icon
    pub icon: Option<String>,
}

/// The account a connected wallet signs for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    pub public_key: Option<String>,
}

/// Shorten long addresses to `0x12345678...abcde` for display
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 20 {
        return address.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Network the wallet is pointed at, as the wallet names it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub name: String,
    pub chain_id: Option<u8>,
    pub url: Option<String>,
}

#[async_trait]
pub trait WalletAdapter: Send + Sync {
    fn info(&self) -> WalletInfo;

    async fn connect(&self) -> Result<AccountInfo, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// `None` until connected
    fn network(&self) -> Option<NetworkInfo>;

    /// Sign the payload for the connected account and hand it to the network
    async fn sign_and_submit_transaction(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletError>;
}
