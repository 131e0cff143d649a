use super::*;
use crate::models::Role;

fn identity() -> Identity {
    serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "firstName": "Asha",
        "lastName": "Iyer",
        "email": "asha@example.com",
        "role": "patient",
    }))
    .unwrap()
}

// =============================================================
// Identity merge: profile refresh replaces wholesale
// =============================================================

#[test]
fn patient_merge_overlays_account_and_profile_fields() {
    let patient: Patient = serde_json::from_value(serde_json::json!({
        "_id": "prof1",
        "userId": {"_id": "u1", "firstName": "Aisha", "lastName": "Iyer-Rao", "email": "aisha@example.com"},
        "age": 34,
        "gender": "female",
        "ContactNumber": "555-0101",
        "MedicalHistory": "None",
        "bloodGroup": "O+",
        "profilePicture": "https://example.com/a.png",
    }))
    .unwrap();

    let merged = merge_patient_identity(&identity(), &patient);

    assert_eq!(merged.first_name, "Aisha");
    assert_eq!(merged.last_name, "Iyer-Rao");
    assert_eq!(merged.email, "aisha@example.com");
    assert_eq!(merged.role, Role::Patient);
    assert_eq!(merged.profile_picture.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(merged.profile["age"], 34);
    assert_eq!(merged.profile["bloodGroup"], "O+");
    assert_eq!(merged.profile["MedicalHistory"], "None");
}

#[test]
fn patient_merge_keeps_existing_fields_when_profile_is_sparse() {
    let patient = Patient::default();
    let merged = merge_patient_identity(&identity(), &patient);

    assert_eq!(merged.first_name, "Asha");
    assert_eq!(merged.email, "asha@example.com");
    assert!(merged.profile_picture.is_none());
}

#[test]
fn doctor_merge_overlays_practice_fields() {
    let doctor: Doctor = serde_json::from_value(serde_json::json!({
        "_id": "doc1",
        "userId": {"_id": "u1", "firstName": "Dev", "lastName": "Rao", "email": "dev@example.com"},
        "specialization": "Cardiology",
        "experience": 12,
        "hospitalName": "City Hospital",
    }))
    .unwrap();

    let merged = merge_doctor_identity(&identity(), &doctor);

    assert_eq!(merged.first_name, "Dev");
    assert_eq!(merged.profile["specialization"], "Cardiology");
    assert_eq!(merged.profile["experience"], 12);
    assert_eq!(merged.profile["hospitalName"], "City Hospital");
}

// =============================================================
// Profile validation
// =============================================================

#[test]
fn complete_patient_profile_validates() {
    assert_eq!(
        validate_patient_profile("34", "female", "No known conditions", "O+"),
        None
    );
}

#[test]
fn patient_required_fields_are_enforced_in_order() {
    assert_eq!(
        validate_patient_profile("34", "female", "  ", "O+"),
        Some("Medical history is required".to_string())
    );
    assert_eq!(
        validate_patient_profile("34", "female", "None", ""),
        Some("Blood group is required".to_string())
    );
    assert_eq!(
        validate_patient_profile("34", "", "None", "O+"),
        Some("Gender is required".to_string())
    );
}

#[test]
fn age_bounds_are_enforced_when_present() {
    assert_eq!(
        validate_patient_profile("17", "female", "None", "O+"),
        Some("Age must be a number between 18 and 100".to_string())
    );
    assert_eq!(
        validate_patient_profile("101", "female", "None", "O+"),
        Some("Age must be a number between 18 and 100".to_string())
    );
    assert_eq!(
        validate_patient_profile("abc", "female", "None", "O+"),
        Some("Age must be a number between 18 and 100".to_string())
    );
    // Age is optional
    assert_eq!(validate_patient_profile("", "female", "None", "O+"), None);
}

#[test]
fn doctor_profile_requires_specialization_and_qualification() {
    assert_eq!(validate_doctor_profile("40", "Cardiology", "MD"), None);
    assert_eq!(
        validate_doctor_profile("40", " ", "MD"),
        Some("Specialization is required".to_string())
    );
    assert_eq!(
        validate_doctor_profile("40", "Cardiology", ""),
        Some("Qualification is required".to_string())
    );
}
