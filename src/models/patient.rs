use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::user::UserRef;

/// Patient profile record. Note the backend's capitalized wire names
/// (`ContactNumber`, `MedicalHistory`); they are preserved verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "userId", default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "ContactNumber", default)]
    pub contact_number: Option<String>,
    #[serde(rename = "MedicalHistory", default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "bloodGroup", default)]
    pub blood_group: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

impl Patient {
    pub fn first_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.first_name.as_deref())
            .unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.last_name.as_deref())
            .unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("")
    }
}

/// `{ patient }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PatientResponse {
    pub patient: Patient,
}

/// Payload for POST /patient/update/profile/{id}.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PatientUpdate {
    pub age: String,
    pub gender: String,
    #[serde(rename = "ContactNumber")]
    pub contact_number: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    #[serde(rename = "MedicalHistory")]
    pub medical_history: String,
    pub address: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture: String,
}
