//! Aptos Chain Client
//!
//! Thin client over the Aptos node REST API used by the healthcare
//! dashboard:
//! - Network selection from the wallet's reported network name
//! - Account resource reads (the provider's `ProviderRegistry`)
//! - Transaction submission and commitment polling
//! - Entry function payloads for the `healthcare` Move module

pub mod client;
pub mod error;
pub mod network;
pub mod payload;
pub mod transaction;

pub use client::{ChainClient, RestClient};
pub use error::ChainError;
pub use network::{Network, NodeConfig};
pub use payload::{EntryFunctionPayload, ModuleId, MoveValue};
pub use transaction::{
    CommittedTransaction, Ed25519Signature, PendingTransaction, SignedTransactionRequest,
    UserTransactionRequest,
};

/// Address the `healthcare` module is published under
pub const DEFAULT_MODULE_ADDRESS: &str =
    "0x8e46115deae69c3ffc41c50f29c94501935467de0212a666d2f0f0b83f1574ac";

/// Name of the Move module holding the registry and its entry functions
pub const DEFAULT_MODULE_NAME: &str = "healthcare";
