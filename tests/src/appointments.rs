//! Appointment Tests
//!
//! Scheduling, status changes and the actions offered per status.

#[cfg(test)]
mod tests {
    use crate::fixtures::{initialized_dashboard, ledger, new_patient};
    use aptos_health_dashboard::view::appointment_actions;
    use aptos_health_dashboard::{AppointmentAction, NewAppointment};
    use aptos_health_types::AppointmentStatus;
    use serde_json::json;

    fn checkup(id: &str, patient_id: &str) -> NewAppointment {
        NewAppointment {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            date: "2024-01-01".to_string(),
            time: "09:00".to_string(),
            purpose: "Checkup".to_string(),
        }
    }

    #[tokio::test]
    async fn test_schedule_arguments_in_order() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;

        dashboard
            .schedule_appointment(checkup("APT-123456", "PAT-1"))
            .await;

        let payload = ledger.submitted().pop().unwrap();
        assert_eq!(payload.function_name(), "schedule_appointment");
        assert_eq!(
            payload.arguments_json(),
            vec![
                json!("APT-123456"),
                json!("PAT-1"),
                json!("2024-01-01"),
                json!("09:00"),
                json!("Checkup"),
                json!("scheduled"),
            ]
        );
        assert_eq!(dashboard.appointments()[0].status, AppointmentStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_cancelled_appointment_offers_no_actions() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.schedule_appointment(checkup("APT-1", "PAT-1")).await;
        assert_eq!(
            appointment_actions(&dashboard.appointments()[0]),
            vec![AppointmentAction::Complete, AppointmentAction::Cancel]
        );

        dashboard
            .apply_appointment_action("APT-1", AppointmentAction::Cancel)
            .await;

        let appointment = &dashboard.appointments()[0];
        assert_eq!(appointment.status.as_str(), "cancelled");
        assert!(appointment_actions(appointment).is_empty());
        assert_eq!(
            dashboard.take_notices().last().unwrap().title,
            "Appointment Updated"
        );
    }

    #[tokio::test]
    async fn test_complete_marks_completed() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.schedule_appointment(checkup("APT-1", "PAT-1")).await;

        dashboard
            .update_appointment_status("APT-1", AppointmentStatus::Completed)
            .await;
        assert_eq!(dashboard.appointments()[0].status, AppointmentStatus::Completed);
    }

    #[tokio::test]
    async fn test_status_refresh_follows_selected_patient() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.add_patient(new_patient("PAT-2", "Bob")).await;
        dashboard.schedule_appointment(checkup("APT-1", "PAT-1")).await;
        dashboard.schedule_appointment(checkup("APT-2", "PAT-2")).await;

        dashboard.select_patient("PAT-1").await;
        dashboard
            .update_appointment_status("APT-2", AppointmentStatus::Cancelled)
            .await;

        // the list still shows the selected patient only
        assert_eq!(dashboard.appointments().len(), 1);
        assert_eq!(dashboard.appointments()[0].id, "APT-1");

        dashboard.select_patient("PAT-2").await;
        assert_eq!(dashboard.appointments()[0].status, AppointmentStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_unknown_appointment_update_fails() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;

        assert!(dashboard
            .update_appointment_status("APT-404", AppointmentStatus::Completed)
            .await
            .is_none());
        let notices = dashboard.take_notices();
        assert_eq!(notices[0].title, "Failed to Update Appointment");
        assert!(notices[0].is_failure());
    }

    #[tokio::test]
    async fn test_appointment_dialog_defaults() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;

        dashboard.open_appointment_dialog();
        {
            let draft = dashboard.appointment_draft_mut().unwrap();
            assert_eq!(draft.id, "APT-530123");
            assert_eq!(draft.date, "2024-01-01");
            assert_eq!(draft.time, "09:00");
            draft.purpose = "Annual physical".to_string();
        }
        assert!(dashboard.submit_appointment_dialog().await);
        assert_eq!(dashboard.appointments()[0].purpose, "Annual physical");
    }

    #[tokio::test]
    async fn test_appointment_without_purpose_stays_open() {
        let ledger = ledger();
        let mut dashboard = initialized_dashboard(&ledger).await;
        dashboard.add_patient(new_patient("PAT-1", "Alice")).await;
        dashboard.take_notices();

        dashboard.open_appointment_dialog();
        assert!(!dashboard.submit_appointment_dialog().await);
        assert!(dashboard.appointment_dialog().is_open());
        assert_eq!(
            dashboard.take_notices()[0].description,
            "Purpose is required"
        );
    }
}
