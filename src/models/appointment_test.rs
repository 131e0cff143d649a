use super::*;

// =============================================================
// ObjectRef: bare id vs populated reference
// =============================================================

#[test]
fn doctor_id_deserializes_from_a_bare_string() {
    let appt: Appointment = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "doctorId": "d1",
        "patientId": "p1",
        "appointmentDate": "2026-03-11T00:00:00.000Z",
        "appointmentTime": "10:00",
        "description": "Checkup",
        "status": "pending",
    }))
    .unwrap();

    assert_eq!(appt.doctor.as_ref().map(|d| d.id()), Some("d1"));
    assert_eq!(appt.doctor.as_ref().and_then(|d| d.display_name()), None);
    assert!(!appt.is_confirmed());
}

#[test]
fn doctor_id_deserializes_from_a_populated_object() {
    let appt: Appointment = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "doctorId": {"_id": "d1", "firstName": "Dev", "lastName": "Rao"},
        "patientId": {"_id": "p1", "firstName": "Asha", "lastName": "Iyer"},
        "appointmentDate": "2026-03-11T00:00:00.000Z",
        "appointmentTime": "10:00",
        "status": "confirmed",
    }))
    .unwrap();

    assert_eq!(appt.doctor.as_ref().map(|d| d.id()), Some("d1"));
    assert_eq!(
        appt.doctor.as_ref().and_then(|d| d.display_name()),
        Some("Dev Rao".to_string())
    );
    assert!(appt.is_confirmed());
}

#[test]
fn missing_refs_and_status_default() {
    let appt: Appointment = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "appointmentDate": "2026-03-11",
        "appointmentTime": "10:00",
    }))
    .unwrap();

    assert!(appt.doctor.is_none());
    assert!(appt.patient.is_none());
    assert_eq!(appt.status_label(), STATUS_PENDING);
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn appointments_envelope_tolerates_an_absent_list() {
    let response: AppointmentsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.appointments.is_empty());
}
