// ============================================================================
// PROFILE VIEWMODEL - Fetch/update profiles + identity refresh
// ============================================================================
// After every successful profile fetch or save, the freshened record is
// merged over the identity and dispatched wholesale through the session
// store, so the rest of the app always reads current profile data.
// ============================================================================

#[cfg(test)]
#[path = "profile_viewmodel_test.rs"]
mod profile_viewmodel_test;

use serde_json::Value;

use crate::models::{Doctor, DoctorUpdate, Identity, Patient, PatientUpdate};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub struct ProfileViewModel {
    api: ApiClient,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn load_patient(&self, user_id: &str) -> Result<Patient, ApiError> {
        self.api.patient_profile(user_id).await
    }

    /// Save, then re-fetch so the caller gets the backend's own view.
    pub async fn save_patient(
        &self,
        user_id: &str,
        update: &PatientUpdate,
    ) -> Result<Patient, ApiError> {
        self.api.update_patient_profile(user_id, update).await?;
        self.api.patient_profile(user_id).await
    }

    pub async fn load_doctor(&self, user_id: &str) -> Result<Doctor, ApiError> {
        self.api.doctor_profile(user_id).await
    }

    pub async fn save_doctor(
        &self,
        user_id: &str,
        update: &DoctorUpdate,
    ) -> Result<Doctor, ApiError> {
        self.api.update_doctor_profile(user_id, update).await?;
        self.api.doctor_profile(user_id).await
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn set_profile_field(identity: &mut Identity, key: &str, value: Option<&Value>) {
    match value {
        Some(v) if !v.is_null() => {
            identity.profile.insert(key.to_string(), v.clone());
        }
        _ => {}
    }
}

fn set_profile_string(identity: &mut Identity, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        identity
            .profile
            .insert(key.to_string(), Value::String(v.clone()));
    }
}

/// Merge a freshly fetched patient record over the current identity.
pub fn merge_patient_identity(current: &Identity, patient: &Patient) -> Identity {
    let mut identity = current.clone();
    if let Some(user) = &patient.user {
        if let Some(first) = &user.first_name {
            identity.first_name = first.clone();
        }
        if let Some(last) = &user.last_name {
            identity.last_name = last.clone();
        }
        if let Some(email) = &user.email {
            identity.email = email.clone();
        }
    }
    if patient.profile_picture.is_some() {
        identity.profile_picture = patient.profile_picture.clone();
    }
    set_profile_field(&mut identity, "age", patient.age.as_ref());
    set_profile_string(&mut identity, "gender", &patient.gender);
    set_profile_string(&mut identity, "contactNumber", &patient.contact_number);
    set_profile_string(&mut identity, "MedicalHistory", &patient.medical_history);
    set_profile_string(&mut identity, "bloodGroup", &patient.blood_group);
    set_profile_string(&mut identity, "address", &patient.address);
    identity
}

/// Merge a freshly fetched doctor record over the current identity.
pub fn merge_doctor_identity(current: &Identity, doctor: &Doctor) -> Identity {
    let mut identity = current.clone();
    if let Some(user) = &doctor.user {
        if let Some(first) = &user.first_name {
            identity.first_name = first.clone();
        }
        if let Some(last) = &user.last_name {
            identity.last_name = last.clone();
        }
        if let Some(email) = &user.email {
            identity.email = email.clone();
        }
    }
    if doctor.profile_picture.is_some() {
        identity.profile_picture = doctor.profile_picture.clone();
    }
    set_profile_field(&mut identity, "age", doctor.age.as_ref());
    set_profile_field(&mut identity, "experience", doctor.experience.as_ref());
    set_profile_string(&mut identity, "specialization", &doctor.specialization);
    set_profile_string(&mut identity, "qualification", &doctor.qualification);
    set_profile_string(&mut identity, "contactNumber", &doctor.contact_number);
    set_profile_string(&mut identity, "hospitalName", &doctor.hospital_name);
    set_profile_string(&mut identity, "about", &doctor.about);
    set_profile_string(&mut identity, "address", &doctor.address);
    identity
}

/// First failing rule, phrased for the user, or None when the form is fine.
pub fn validate_patient_profile(
    age: &str,
    gender: &str,
    medical_history: &str,
    blood_group: &str,
) -> Option<String> {
    if medical_history.trim().is_empty() {
        return Some("Medical history is required".to_string());
    }
    if blood_group.trim().is_empty() {
        return Some("Blood group is required".to_string());
    }
    if gender.trim().is_empty() {
        return Some("Gender is required".to_string());
    }
    validate_age(age)
}

pub fn validate_doctor_profile(age: &str, specialization: &str, qualification: &str) -> Option<String> {
    if specialization.trim().is_empty() {
        return Some("Specialization is required".to_string());
    }
    if qualification.trim().is_empty() {
        return Some("Qualification is required".to_string());
    }
    validate_age(age)
}

/// Age is optional, but when present must be a number between 18 and 100.
fn validate_age(age: &str) -> Option<String> {
    let age = age.trim();
    if age.is_empty() {
        return None;
    }
    match age.parse::<u32>() {
        Ok(value) if (18..=100).contains(&value) => None,
        _ => Some("Age must be a number between 18 and 100".to_string()),
    }
}
