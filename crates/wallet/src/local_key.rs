//! Ed25519 key wallet for terminal use
//!
//! Signing goes through the node's `encode_submission` endpoint, so no
//! BCS encoding happens client side:
//! 1. read the account sequence number
//! 2. estimate the gas unit price (unless fixed in config)
//! 3. have the node encode the signing message
//! 4. sign it and submit with an `ed25519_signature` authenticator

use crate::adapter::{AccountInfo, NetworkInfo, WalletAdapter, WalletInfo};
use crate::error::WalletError;
use aptos_health_chain::{
    Ed25519Signature, EntryFunctionPayload, Network, NodeConfig, PendingTransaction, RestClient,
    SignedTransactionRequest, UserTransactionRequest,
};
use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Name the wallet registers under
pub const LOCAL_KEY_WALLET: &str = "Local Key";

/// Prefix used by the Aptos CLI when exporting private keys
const AIP80_PREFIX: &str = "ed25519-priv-";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalKeyConfig {
    /// Account address the key signs for
    pub address: String,
    /// 32-byte private key, hex with optional `0x`/`ed25519-priv-` prefix
    pub private_key: String,
    /// Network name reported to the dashboard
    pub network: String,
    pub max_gas_amount: u64,
    /// Fixed gas price; estimated from the node when unset
    pub gas_unit_price: Option<u64>,
    /// Seconds until a submitted transaction expires
    pub expiration_secs: u64,
}

impl Default for LocalKeyConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            private_key: String::new(),
            network: "testnet".to_string(),
            max_gas_amount: 200_000,
            gas_unit_price: None,
            expiration_secs: 60,
        }
    }
}

pub struct LocalKeyWallet {
    signing_key: SigningKey,
    config: LocalKeyConfig,
    client: RestClient,
    connected: AtomicBool,
}

/// Decode a private key in any of the accepted spellings
pub fn parse_private_key(input: &str) -> Result<SigningKey, WalletError> {
    let trimmed = input.trim();
    let hex_part = trimmed
        .strip_prefix(AIP80_PREFIX)
        .unwrap_or(trimmed)
        .trim_start_matches("0x");
    let bytes = hex::decode(hex_part).map_err(|e| WalletError::InvalidKey(e.to_string()))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|b: Vec<u8>| WalletError::InvalidKey(format!("expected 32 bytes, got {}", b.len())))?;
    Ok(SigningKey::from_bytes(&bytes))
}

impl LocalKeyWallet {
    pub fn new(config: LocalKeyConfig, node: &NodeConfig) -> Result<Self, WalletError> {
        if config.address.trim().is_empty() {
            return Err(WalletError::InvalidKey("account address is not set".to_string()));
        }
        let signing_key = parse_private_key(&config.private_key)?;
        let client = RestClient::for_network_name(&config.network, node)?;
        Ok(Self {
            signing_key,
            config,
            client,
            connected: AtomicBool::new(false),
        })
    }

    fn public_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signing_key.verifying_key().to_bytes()))
    }

    async fn build_request(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<UserTransactionRequest, WalletError> {
        let sequence_number = self.client.account_sequence_number(&self.config.address).await?;
        let gas_unit_price = match self.config.gas_unit_price {
            Some(price) => price,
            None => self.client.estimate_gas_price().await?,
        };
        let now = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();
        let expiration_timestamp_secs = expires_at(now, self.config.expiration_secs);

        Ok(UserTransactionRequest {
            sender: self.config.address.clone(),
            sequence_number,
            max_gas_amount: self.config.max_gas_amount,
            gas_unit_price,
            expiration_timestamp_secs,
            payload: payload.clone(),
        })
    }
}

/// Expiry for a transaction built at `now`, clamped at `u64::MAX`
fn expires_at(now: u64, ttl_secs: u64) -> u64 {
    now.saturating_add(ttl_secs)
}

#[async_trait]
impl WalletAdapter for LocalKeyWallet {
    fn info(&self) -> WalletInfo {
        WalletInfo {
            name: LOCAL_KEY_WALLET.to_string(),
            icon: None,
        }
    }

    async fn connect(&self) -> Result<AccountInfo, WalletError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(AccountInfo {
            address: self.config.address.clone(),
            public_key: Some(self.public_key_hex()),
        })
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn network(&self) -> Option<NetworkInfo> {
        if !self.connected.load(Ordering::SeqCst) {
            return None;
        }
        let target = Network::from_name(&self.config.network);
        Some(NetworkInfo {
            name: self.config.network.clone(),
            chain_id: Some(target.chain_id()),
            url: Some(self.client.base_url().to_string()),
        })
    }

    async fn sign_and_submit_transaction(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(WalletError::NotConnected);
        }

        let request = self.build_request(payload).await?;
        let message = self.client.encode_submission(&request).await?;
        let signature = self.signing_key.sign(&message);
        debug!(
            function = %payload.function,
            sequence_number = request.sequence_number,
            "signed transaction"
        );

        let signed = SignedTransactionRequest {
            request,
            signature: Ed25519Signature {
                public_key: self.public_key_hex(),
                signature: format!("0x{}", hex::encode(signature.to_bytes())),
            },
        };
        let pending = self.client.submit_transaction(&signed).await?;
        info!(hash = %pending.hash, function = %payload.function_name(), "transaction submitted");
        Ok(pending)
    }
}
