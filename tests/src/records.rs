//! Medical Record Tests
//!
//! Records are filtered per patient from the whole registry and re-read
//! after every committed write.

#[cfg(test)]
mod tests {
    use crate::fixtures::{initialized_dashboard, ledger, new_patient};
    use aptos_health_dashboard::testing::LEDGER_EPOCH_SECS;
    use aptos_health_dashboard::NewMedicalRecord;
    use aptos_health_types::RecordType;

    fn record(id: &str, patient_id: &str, record_type: RecordType) -> NewMedicalRecord {
        NewMedicalRecord {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            record_type,
            diagnosis: "Seasonal influenza".to_string(),
            treatment: "Rest and fluids".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_records_never_cross_patients() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-A", "Alice")).await;
        dashboard.add_patient(new_patient("PAT-B", "Bob")).await;

        dashboard
            .add_medical_record(record("MR-1", "PAT-A", RecordType::Examination))
            .await;
        dashboard
            .add_medical_record(record("MR-2", "PAT-B", RecordType::LabTest))
            .await;
        dashboard
            .add_medical_record(record("MR-3", "PAT-A", RecordType::Prescription))
            .await;

        dashboard.select_patient("PAT-A").await;
        let ids: Vec<&str> = dashboard
            .medical_records()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["MR-1", "MR-3"]);
        assert!(dashboard
            .medical_records()
            .iter()
            .all(|r| r.patient_id == "PAT-A"));

        dashboard.select_patient("PAT-B").await;
        assert_eq!(dashboard.medical_records().len(), 1);
        assert_eq!(dashboard.medical_records()[0].record_type, RecordType::LabTest);
    }

    #[tokio::test]
    async fn test_record_date_assigned_by_chain() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-A", "Alice")).await;
        ledger.set_now(LEDGER_EPOCH_SECS + 3_600);

        dashboard
            .add_medical_record(record("MR-1", "PAT-A", RecordType::Surgery))
            .await;
        assert_eq!(dashboard.medical_records()[0].date, LEDGER_EPOCH_SECS + 3_600);
        assert_eq!(
            dashboard.take_notices().last().unwrap().title,
            "Medical Record Added"
        );
    }

    #[tokio::test]
    async fn test_record_for_unknown_patient_fails() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;

        assert!(dashboard
            .add_medical_record(record("MR-1", "PAT-GHOST", RecordType::Other))
            .await
            .is_none());
        let notices = dashboard.take_notices();
        assert_eq!(notices[0].title, "Failed to Add Medical Record");
        assert!(notices[0].description.contains("E_PATIENT_NOT_FOUND"));
        assert!(dashboard.medical_records().is_empty());
    }

    #[tokio::test]
    async fn test_record_dialog_defaults_and_submit() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-A", "Alice")).await;

        dashboard.open_record_dialog();
        {
            let draft = dashboard.record_draft_mut().unwrap();
            assert_eq!(draft.id, "MR-530123");
            assert_eq!(draft.record_type, RecordType::Examination);
            draft.diagnosis = "Hypertension".to_string();
            draft.treatment = "Lisinopril 10mg".to_string();
        }
        assert!(dashboard.submit_record_dialog().await);
        assert!(!dashboard.record_dialog().is_open());
        assert_eq!(dashboard.medical_records()[0].patient_id, "PAT-A");
    }
}
