//! Patient Registration Tests
//!
//! Adding patients through the dialog and directly, selection rules and
//! validation of the intake fields.

#[cfg(test)]
mod tests {
    use crate::fixtures::{initialized_dashboard, ledger, new_patient};
    use aptos_health_dashboard::view::patient_details;
    use aptos_health_dashboard::generate_id;
    use aptos_health_types::ValidationError;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_committed_patient_is_fetched_and_selected() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;

        let committed = dashboard
            .add_patient(new_patient("PAT-000001", "Alice Johnson"))
            .await;
        assert!(committed.is_some());

        assert!(dashboard.patients().iter().any(|p| p.id == "PAT-000001"));
        assert_eq!(dashboard.selected_patient_id(), Some("PAT-000001"));

        let notices = dashboard.take_notices();
        assert_eq!(notices[0].title, "Patient Added");
        assert_eq!(
            notices[0].description,
            "New patient record has been created successfully."
        );
    }

    #[tokio::test]
    async fn test_second_patient_keeps_first_selected() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.add_patient(new_patient("PAT-2", "Bob")).await;

        assert_eq!(dashboard.patients().len(), 2);
        assert_eq!(dashboard.selected_patient_id(), Some("PAT-1"));
    }

    #[tokio::test]
    async fn test_dialog_flow_with_generated_id() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;

        dashboard.open_patient_dialog();
        {
            let draft = dashboard.patient_draft_mut().unwrap();
            assert_eq!(draft.id, "PAT-530123");
            assert_eq!(draft.gender, "Male");
            draft.name = "Carol White".to_string();
            draft.age = "52".to_string();
            draft.contact = "+1-555-0142".to_string();
            draft.email = "carol@example.com".to_string();
            draft.address = "77 Oak Ave".to_string();
        }
        assert!(dashboard.submit_patient_dialog().await);
        assert!(!dashboard.patient_dialog().is_open());

        let patient = dashboard.selected_patient().unwrap();
        assert_eq!(patient.id, "PAT-530123");
        assert_eq!(patient.age, 52);
        let rows = patient_details(patient);
        assert_eq!(rows[1], ("Name", "Carol White".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_id_leaves_state_unchanged() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.take_notices();
        let before = dashboard.patients().to_vec();

        assert!(dashboard
            .add_patient(new_patient("PAT-1", "Impostor"))
            .await
            .is_none());
        assert_eq!(dashboard.patients(), before.as_slice());
        assert!(!dashboard.is_loading());

        let notices = dashboard.take_notices();
        assert_eq!(notices[0].title, "Failed to Add Patient");
        assert!(notices[0].is_failure());
    }

    #[tokio::test]
    async fn test_bad_age_never_reaches_chain() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        let submitted_before = ledger.submitted().len();

        dashboard.open_patient_dialog();
        {
            let draft = dashboard.patient_draft_mut().unwrap();
            draft.name = "Dan".to_string();
            draft.age = "200".to_string();
            draft.contact = "555".to_string();
            draft.email = "dan@example.com".to_string();
            draft.address = "1 Elm St".to_string();
        }
        assert!(!dashboard.submit_patient_dialog().await);
        assert!(dashboard.patient_dialog().is_open());
        assert_eq!(ledger.submitted().len(), submitted_before);
        assert_eq!(
            dashboard.take_notices()[0].description,
            ValidationError::AgeOutOfRange(200).to_string()
        );
    }

    proptest! {
        #[test]
        fn prop_generated_ids_end_in_clock_digits(millis in 1_000_000i64..4_000_000_000_000i64) {
            let now = Utc.timestamp_millis_opt(millis).single().unwrap();
            let id = generate_id("PAT", now);
            let digits = millis.to_string();
            prop_assert!(id.starts_with("PAT-"));
            prop_assert_eq!(&id[4..], &digits[digits.len() - 6..]);
        }
    }
}
