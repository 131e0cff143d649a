// ============================================================================
// APPOINTMENT VIEWMODEL - Listing, booking and confirming appointments
// ============================================================================

#[cfg(test)]
#[path = "appointment_viewmodel_test.rs"]
mod appointment_viewmodel_test;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{HashMap, HashSet};

use crate::models::{Appointment, BookAppointmentRequest, STATUS_CONFIRMED};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub struct AppointmentViewModel {
    api: ApiClient,
}

impl AppointmentViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn patient_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, ApiError> {
        self.api.patient_appointments(patient_id).await
    }

    /// Appointments plus a doctor-id -> display-name map. The appointment
    /// records may carry bare doctor ids, so names come from per-doctor
    /// profile fetches; a doctor that fails to load just has no entry.
    pub async fn patient_appointments_with_doctors(
        &self,
        patient_id: &str,
    ) -> Result<(Vec<Appointment>, HashMap<String, String>), ApiError> {
        let appointments = self.api.patient_appointments(patient_id).await?;

        let doctor_ids: HashSet<String> = appointments
            .iter()
            .filter_map(|appt| appt.doctor.as_ref())
            .map(|doctor| doctor.id().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let mut names = HashMap::new();
        for doctor_id in doctor_ids {
            match self.api.doctor_profile(&doctor_id).await {
                Ok(doctor) => {
                    names.insert(doctor_id, doctor.full_name());
                }
                Err(err) => {
                    log::warn!("⚠️ Could not load doctor {}: {}", doctor_id, err);
                }
            }
        }

        Ok((appointments, names))
    }

    pub async fn doctor_appointments(&self, doctor_id: &str) -> Result<Vec<Appointment>, ApiError> {
        self.api.doctor_appointments(doctor_id).await
    }

    pub async fn book(
        &self,
        doctor_id: &str,
        request: &BookAppointmentRequest,
    ) -> Result<(), ApiError> {
        self.api.book_appointment(doctor_id, request).await?;
        Ok(())
    }

    pub async fn confirm(&self, appointment_id: &str) -> Result<(), ApiError> {
        self.api
            .update_appointment_status(appointment_id, STATUS_CONFIRMED)
            .await?;
        Ok(())
    }
}

impl Default for AppointmentViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// `HH:MM`, 24-hour.
pub fn is_valid_time_hhmm(time: &str) -> bool {
    NaiveTime::parse_from_str(time, "%H:%M").is_ok() && time.len() == 5
}

/// Validate the booking form against the rules the source app enforces:
/// all fields present, a parseable future date, a well-formed time.
/// `now` is injected so the rule is testable.
pub fn validate_booking(
    date: &str,
    time: &str,
    description: &str,
    now: NaiveDateTime,
) -> Result<(), String> {
    if date.trim().is_empty() || time.trim().is_empty() || description.trim().is_empty() {
        return Err("Please fill in all required fields".to_string());
    }
    if !is_valid_time_hhmm(time.trim()) {
        return Err("Please select a valid time".to_string());
    }
    let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| "Please select a valid date".to_string())?;
    if parsed_date <= now.date() {
        return Err("Appointment date must be in the future".to_string());
    }
    Ok(())
}

/// Wire format for the booked date: midnight UTC of the selected day.
pub fn booking_date_payload(date: &str) -> String {
    format!("{}T00:00:00.000Z", date.trim())
}
