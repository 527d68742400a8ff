//! Provider Initialization Tests
//!
//! The registry resource's existence is the only initialization signal.

#[cfg(test)]
mod tests {
    use crate::fixtures::{dashboard, ledger, PROVIDER};
    use aptos_health_chain::ModuleId;
    use aptos_health_dashboard::{Dashboard, Phase};
    use aptos_health_types::ProviderRegistry;

    #[tokio::test]
    async fn test_uninitialized_to_initialized() {
        let ledger = ledger();
        let mut dashboard = dashboard(&ledger).await;
        assert_eq!(dashboard.phase(), Phase::Uninitialized);

        let committed = dashboard.initialize().await;
        assert!(committed.is_some());
        assert_eq!(dashboard.phase(), Phase::Initialized);
        assert!(dashboard.patients().is_empty());
        assert!(dashboard.selected_patient_id().is_none());

        let submitted = ledger.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].function, ModuleId::default().function("initialize"));
        assert!(submitted[0].arguments.is_empty());
    }

    #[tokio::test]
    async fn test_existing_registry_detected_on_attach() {
        let ledger = ledger();
        ledger.seed_registry(ProviderRegistry::default());
        let dashboard = dashboard(&ledger).await;
        assert_eq!(dashboard.phase(), Phase::Initialized);
    }

    #[tokio::test]
    async fn test_node_error_keeps_initialized() {
        let ledger = ledger();
        ledger.seed_registry(ProviderRegistry::default());
        let mut dashboard = dashboard(&ledger).await;

        ledger.fail_next_read("Internal server error");
        dashboard.check_initialized().await;
        assert!(dashboard.is_initialized());
        assert_eq!(dashboard.phase(), Phase::Initialized);
    }

    #[tokio::test]
    async fn test_missing_registry_clears_initialized() {
        let ledger = ledger();
        ledger.seed_registry(ProviderRegistry::default());
        let mut dashboard = dashboard(&ledger).await;
        assert!(dashboard.is_initialized());

        ledger.clear_registry();
        dashboard.check_initialized().await;
        assert!(!dashboard.is_initialized());
        assert_eq!(dashboard.phase(), Phase::Uninitialized);

        // a different account has no registry either
        let mut other = Dashboard::new(ModuleId::default());
        other
            .attach(ledger.clone(), ledger.clone(), "0xdead")
            .await;
        assert!(!other.is_initialized());
    }

    #[tokio::test]
    async fn test_second_initialize_fails_with_notice() {
        let ledger = ledger();
        let mut dashboard = dashboard(&ledger).await;
        dashboard.initialize().await;
        dashboard.take_notices();

        assert!(dashboard.initialize().await.is_none());
        let notices = dashboard.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Initialization Failed");
        assert!(notices[0].description.contains("E_ALREADY_INITIALIZED"));
        assert!(dashboard.is_initialized());
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_initialize_without_wallet_is_noop() {
        let mut dashboard = Dashboard::new(ModuleId::default());
        assert!(dashboard.initialize().await.is_none());
        assert!(dashboard.notices().is_empty());
        assert_eq!(dashboard.phase(), Phase::Uninitialized);
    }

    #[tokio::test]
    async fn test_registry_type_uses_module() {
        let ledger = ledger();
        let dashboard = dashboard(&ledger).await;
        assert_eq!(
            dashboard.registry_type(),
            format!(
                "{}::healthcare::ProviderRegistry",
                aptos_health_chain::DEFAULT_MODULE_ADDRESS
            )
        );
        assert_eq!(dashboard.account(), Some(PROVIDER));
    }
}
