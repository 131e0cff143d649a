use serde::{Deserialize, Serialize};

use crate::models::appointment::ObjectRef;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "doctorId", default)]
    pub doctor: Option<ObjectRef>,
    #[serde(rename = "patientId", default)]
    pub patient: Option<ObjectRef>,
    pub rating: u8,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// `{ feedbacks: [...] }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedbacksResponse {
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
}

/// Payload for POST /feedback/submit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitFeedbackRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub rating: u8,
    pub comments: String,
}
