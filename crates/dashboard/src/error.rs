use aptos_health_chain::ChainError;
use aptos_health_wallet::WalletError;
use thiserror::Error;

/// Anything that can stop a dashboard write once its draft is valid
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Chain(#[from] ChainError),
}
