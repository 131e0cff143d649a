// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here, just requests against the backend REST API.
// Every call carries cookie credentials (the backend session lives in an
// http-only cookie), so `credentials: include` is set on each request.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::models::{
    Appointment, AppointmentsResponse, AuthResponse, BookAppointmentRequest, Doctor,
    DoctorResponse, DoctorUpdate, DoctorsResponse, Feedback, FeedbacksResponse, LoginRequest,
    MessageResponse, Patient, PatientResponse, PatientUpdate, SignupRequest,
    SubmitFeedbackRequest, UpdateAppointmentRequest,
};
use crate::services::error::{classify_error, ApiError};
use crate::utils::BACKEND_URL;

/// Stateless HTTP client for the booking backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    // ---- auth -------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Logging in: {}", request.email);
        self.post_json("/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Signing up: {} ({})", request.email, request.role.as_str());
        self.post_json("/signup", request).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        log::info!("👋 Logging out");
        self.post_json("/logout", &serde_json::json!({})).await
    }

    // ---- doctors ----------------------------------------------------------

    pub async fn all_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        let response: DoctorsResponse = self.get_json("/alldoctors").await?;
        log::info!("🩺 Loaded {} doctors", response.doctors.len());
        Ok(response.doctors)
    }

    pub async fn doctor_profile(&self, doctor_id: &str) -> Result<Doctor, ApiError> {
        let response: DoctorResponse = self
            .get_json(&format!("/doctor/get/profile/{}", doctor_id))
            .await?;
        Ok(response.doctor)
    }

    pub async fn update_doctor_profile(
        &self,
        user_id: &str,
        update: &DoctorUpdate,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("💾 Updating doctor profile: {}", user_id);
        self.post_json(&format!("/doctor/update/profile/{}", user_id), update)
            .await
    }

    // ---- patients ---------------------------------------------------------

    pub async fn patient_profile(&self, patient_id: &str) -> Result<Patient, ApiError> {
        let response: PatientResponse = self
            .get_json(&format!("/patient/get/profile/{}", patient_id))
            .await?;
        Ok(response.patient)
    }

    pub async fn update_patient_profile(
        &self,
        user_id: &str,
        update: &PatientUpdate,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("💾 Updating patient profile: {}", user_id);
        self.post_json(&format!("/patient/update/profile/{}", user_id), update)
            .await
    }

    // ---- appointments -----------------------------------------------------

    pub async fn patient_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, ApiError> {
        let response: AppointmentsResponse = self
            .get_json(&format!("/get/appointments/{}", patient_id))
            .await?;
        log::info!("📅 Loaded {} appointments for patient", response.appointments.len());
        Ok(response.appointments)
    }

    pub async fn doctor_appointments(&self, doctor_id: &str) -> Result<Vec<Appointment>, ApiError> {
        let response: AppointmentsResponse = self
            .get_json(&format!("/doctor/check/appointments/{}", doctor_id))
            .await?;
        log::info!("📅 Loaded {} appointments for doctor", response.appointments.len());
        Ok(response.appointments)
    }

    pub async fn book_appointment(
        &self,
        doctor_id: &str,
        request: &BookAppointmentRequest,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("📅 Booking appointment with doctor {}", doctor_id);
        self.post_json(&format!("/book/appointment/{}", doctor_id), request)
            .await
    }

    pub async fn update_appointment_status(
        &self,
        appointment_id: &str,
        status: &str,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("✅ Setting appointment {} -> {}", appointment_id, status);
        let request = UpdateAppointmentRequest {
            status: status.to_string(),
        };
        let url = format!(
            "{}/doctor/update/appointment/{}",
            self.base_url, appointment_id
        );
        let response = Request::patch(&url)
            .credentials(RequestCredentials::Include)
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(response).await
    }

    // ---- feedback ---------------------------------------------------------

    pub async fn submit_feedback(
        &self,
        request: &SubmitFeedbackRequest,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("⭐ Submitting feedback for doctor {}", request.doctor_id);
        self.post_json("/feedback/submit", request).await
    }

    pub async fn doctor_feedback(&self, doctor_id: &str) -> Result<Vec<Feedback>, ApiError> {
        let response: FeedbacksResponse = self
            .get_json(&format!("/doctor/get/feedback/{}", doctor_id))
            .await?;
        log::info!("⭐ Loaded {} feedback entries", response.feedbacks.len());
        Ok(response.feedbacks)
    }

    // ---- plumbing ---------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a 2xx body, or classify the failure by status + error body.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Err(classify_error(status, &status_text, &body))
    }
}
