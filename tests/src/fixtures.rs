//! Shared scenario setup

use aptos_health_chain::ModuleId;
use aptos_health_dashboard::testing::MockLedger;
use aptos_health_dashboard::{Clock, Dashboard, NewPatient};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

pub const PROVIDER: &str = "0x8e46115deae69c3ffc41c50f29c94501935467de0212a666d2f0f0b83f1574ac";

/// 2024-01-01T09:15:30.123Z
pub fn fixed_clock() -> Clock {
    Arc::new(|| {
        Utc.timestamp_millis_opt(1_704_100_530_123)
            .single()
            .unwrap_or_else(Utc::now)
    })
}

/// Fresh ledger with no provider registry
pub fn ledger() -> Arc<MockLedger> {
    MockLedger::shared(PROVIDER)
}

/// Dashboard attached to `ledger` as its own wallet and node
pub async fn dashboard(ledger: &Arc<MockLedger>) -> Dashboard {
    let mut dashboard = Dashboard::new(ModuleId::default()).with_clock(fixed_clock());
    dashboard
        .attach(ledger.clone(), ledger.clone(), ledger.address())
        .await;
    dashboard
}

/// Initialized dashboard with no patients
pub async fn initialized_dashboard(ledger: &Arc<MockLedger>) -> Dashboard {
    let mut dashboard = dashboard(ledger).await;
    dashboard.initialize().await;
    dashboard.take_notices();
    dashboard
}

pub fn new_patient(id: &str, name: &str) -> NewPatient {
    NewPatient {
        id: id.to_string(),
        name: name.to_string(),
        age: 34,
        gender: "Female".to_string(),
        contact: "+1-555-0123".to_string(),
        email: "patient@example.com".to_string(),
        address: "123 Main St".to_string(),
        medical_history: "None".to_string(),
    }
}
