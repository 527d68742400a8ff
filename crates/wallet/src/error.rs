use aptos_health_chain::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Wallet not connected")]
    NotConnected,
    #[error("No wallet named '{0}' is registered")]
    UnknownWallet(String),
    #[error("A wallet named '{0}' is already registered")]
    AlreadyRegistered(String),
    /// The user or the wallet declined to sign
    #[error("User rejected the request: {0}")]
    Rejected(String),
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),
    #[error("Could not persist wallet preferences: {0}")]
    Preferences(String),
    #[error(transparent)]
    Chain(#[from] ChainError),
}
