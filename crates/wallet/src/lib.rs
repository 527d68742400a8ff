//! Wallet Session
//!
//! Tracks which wallet is connected, for which account and network, and
//! whether the session should reconnect on the next start.
//!
//! Wallet adapters are registered explicitly by the entry point through
//! [`WalletRegistry::register_wallet`]; nothing registers itself.

pub mod adapter;
pub mod error;
pub mod local_key;
pub mod preferences;
pub mod registry;
pub mod session;

pub use adapter::{format_address, AccountInfo, NetworkInfo, WalletAdapter, WalletInfo};
pub use error::WalletError;
pub use local_key::{LocalKeyConfig, LocalKeyWallet, LOCAL_KEY_WALLET};
pub use preferences::{PreferenceStore, Preferences};
pub use registry::WalletRegistry;
pub use session::WalletSession;
