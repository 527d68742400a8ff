//! Wallet Session Tests
//!
//! Registration, connection, the auto-connect preference and the network
//! the chain client targets.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ledger, PROVIDER};
    use aptos_health_chain::{Network, NodeConfig, RestClient};
    use aptos_health_wallet::{format_address, PreferenceStore, WalletRegistry, WalletSession};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn prefs_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join("aptos-health-tests")
            .join(format!("{}-{}.json", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn session(path: &PathBuf) -> WalletSession {
        let mut registry = WalletRegistry::new();
        registry.register_wallet(ledger()).unwrap();
        WalletSession::new(registry, PreferenceStore::new(path))
    }

    #[tokio::test]
    async fn test_connect_reports_account_and_network() {
        let path = prefs_path("connect");
        let mut session = session(&path);
        session.connect("Mock Ledger").await.unwrap();

        assert!(session.connected());
        assert_eq!(session.address(), Some(PROVIDER));
        assert_eq!(session.network().unwrap().name, "testnet");
        assert_eq!(format_address(session.address().unwrap()), "0x8e46115d...574ac");
    }

    #[tokio::test]
    async fn test_auto_connect_restores_on_next_load() {
        let path = prefs_path("restore");
        {
            let mut first = session(&path);
            first.connect("Mock Ledger").await.unwrap();
            first.set_auto_connect(true).unwrap();
        }

        let mut second = session(&path);
        assert!(second.auto_connect());
        assert!(second.restore().await.unwrap());
        assert!(second.connected());
    }

    #[tokio::test]
    async fn test_disconnect_forgets_last_wallet() {
        let path = prefs_path("disconnect");
        {
            let mut first = session(&path);
            first.set_auto_connect(true).unwrap();
            first.connect("Mock Ledger").await.unwrap();
            first.disconnect().await.unwrap();
            assert!(!first.connected());
        }

        let mut second = session(&path);
        assert!(!second.restore().await.unwrap());
    }

    #[test]
    fn test_duplicate_wallet_rejected() {
        let mut registry = WalletRegistry::new();
        registry.register_wallet(ledger()).unwrap();
        assert!(registry.register_wallet(ledger()).is_err());
    }

    proptest! {
        #[test]
        fn prop_only_mainnet_targets_mainnet(name in "[a-zA-Z]{0,12}") {
            let client = RestClient::for_network_name(&name, &NodeConfig::default()).unwrap();
            let expected = if name.eq_ignore_ascii_case("mainnet") {
                Network::Mainnet
            } else {
                Network::Testnet
            };
            prop_assert_eq!(aptos_health_chain::ChainClient::network(&client), expected);
        }
    }

    #[test]
    fn test_mainnet_any_case() {
        for name in ["mainnet", "Mainnet", "MAINNET"] {
            assert_eq!(Network::from_name(name), Network::Mainnet);
        }
        for name in ["testnet", "devnet", "", "main net"] {
            assert_eq!(Network::from_name(name), Network::Testnet);
        }
    }
}
