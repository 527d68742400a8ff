//! Chain client trait and its REST implementation

use crate::error::ChainError;
use crate::network::{Network, NodeConfig};
use crate::transaction::{
    CommittedTransaction, PendingTransaction, SignedTransactionRequest, TransactionState,
    UserTransactionRequest,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Reads and commitment tracking the dashboard needs from a node
#[async_trait]
pub trait ChainClient: Send + Sync {
    fn network(&self) -> Network;

    /// Fetch one Move resource stored under `address`.
    ///
    /// Returns `ChainError::NotFound` when the account holds no such resource.
    async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<serde_json::Value, ChainError>;

    /// Block until the transaction is committed; an aborted transaction is an error
    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction, ChainError>;
}

#[derive(Deserialize)]
struct AccountData {
    #[serde(with = "aptos_health_types::wire::u64_flexible")]
    sequence_number: u64,
}

#[derive(Deserialize)]
struct GasEstimate {
    gas_estimate: u64,
}

/// Client for an Aptos fullnode REST API
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    network: Network,
    wait_timeout: Duration,
    poll_interval: Duration,
}

impl RestClient {
    pub fn new(network: Network, config: &NodeConfig) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("aptos-health/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.node_url(network),
            network,
            wait_timeout: config.wait_timeout(),
            poll_interval: config.poll_interval(),
        })
    }

    /// Client for whatever network the wallet reports
    pub fn for_network_name(name: &str, config: &NodeConfig) -> Result<Self, ChainError> {
        RestClient::new(Network::from_name(name), config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ChainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChainError::from_response(status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ChainError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ChainError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        Self::read_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ChainError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Self::read_response(response).await
    }

    pub async fn account_sequence_number(&self, address: &str) -> Result<u64, ChainError> {
        let account: AccountData = self.get_json(&format!("accounts/{}", address)).await?;
        Ok(account.sequence_number)
    }

    pub async fn estimate_gas_price(&self) -> Result<u64, ChainError> {
        let estimate: GasEstimate = self.get_json("estimate_gas_price").await?;
        Ok(estimate.gas_estimate)
    }

    /// Ask the node for the exact bytes the sender must sign
    pub async fn encode_submission(
        &self,
        request: &UserTransactionRequest,
    ) -> Result<Vec<u8>, ChainError> {
        let encoded: String = self.post_json("transactions/encode_submission", request).await?;
        hex::decode(encoded.trim_start_matches("0x"))
            .map_err(|e| ChainError::Decode(format!("signing message: {}", e)))
    }

    pub async fn submit_transaction(
        &self,
        signed: &SignedTransactionRequest,
    ) -> Result<PendingTransaction, ChainError> {
        let pending: PendingTransaction = self.post_json("transactions", signed).await?;
        debug!(hash = %pending.hash, function = %signed.request.payload.function, "submitted");
        Ok(pending)
    }

    async fn transaction_state(&self, hash: &str) -> Result<TransactionState, ChainError> {
        let value: serde_json::Value = self
            .get_json(&format!("transactions/by_hash/{}", hash))
            .await?;
        TransactionState::from_json(&value).map_err(ChainError::Decode)
    }
}

#[async_trait]
impl ChainClient for RestClient {
    fn network(&self) -> Network {
        self.network
    }

    async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<serde_json::Value, ChainError> {
        self.get_json(&format!("accounts/{}/resource/{}", address, resource_type))
            .await
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction, ChainError> {
        let started = Instant::now();
        loop {
            match self.transaction_state(hash).await {
                Ok(TransactionState::Committed {
                    version,
                    success,
                    vm_status,
                }) => {
                    if !success {
                        warn!(%hash, %vm_status, "transaction aborted");
                        return Err(ChainError::TransactionFailed {
                            hash: hash.to_string(),
                            vm_status,
                        });
                    }
                    debug!(%hash, version, "transaction committed");
                    return Ok(CommittedTransaction {
                        hash: hash.to_string(),
                        version,
                        vm_status,
                    });
                }
                Ok(TransactionState::Pending) => {}
                Err(e) if e.is_unknown_transaction() => {}
                Err(e) => return Err(e),
            }

            if started.elapsed() >= self.wait_timeout {
                return Err(ChainError::Timeout {
                    hash: hash.to_string(),
                    timeout_secs: self.wait_timeout.as_secs(),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
