// ============================================================================
// FEEDBACK VIEWMODEL - Star-rating feedback between patients and doctors
// ============================================================================

#[cfg(test)]
#[path = "feedback_viewmodel_test.rs"]
mod feedback_viewmodel_test;

use crate::models::{Feedback, SubmitFeedbackRequest};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub struct FeedbackViewModel {
    api: ApiClient,
}

impl FeedbackViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub async fn doctor_feedback(&self, doctor_id: &str) -> Result<Vec<Feedback>, ApiError> {
        self.api.doctor_feedback(doctor_id).await
    }

    pub async fn submit(&self, request: &SubmitFeedbackRequest) -> Result<(), ApiError> {
        self.api.submit_feedback(request).await?;
        Ok(())
    }
}

impl Default for FeedbackViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A rating between 1 and 5 stars and non-blank comments are required.
pub fn validate_feedback(rating: u8, comments: &str) -> Result<(), String> {
    if rating == 0 || comments.trim().is_empty() {
        return Err("Please provide a rating and comments".to_string());
    }
    if rating > 5 {
        return Err("Rating must be between 1 and 5".to_string());
    }
    Ok(())
}
