use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::user::UserRef;

/// Doctor profile record.
///
/// Depending on the endpoint the backend either populates `userId` with the
/// account record or copies `firstName`/`lastName` onto the top level, so
/// both shapes are modeled and the accessors check both.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "userId", default)]
    pub user: Option<UserRef>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub experience: Option<Value>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(rename = "contactNumber", default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    #[serde(rename = "hospitalName", default)]
    pub hospital_name: Option<String>,
}

impl Doctor {
    /// Account user id this doctor belongs to, wherever the backend put it.
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.id.as_deref())
            .or(self.id.as_deref())
    }

    pub fn first_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.first_name.as_deref()))
            .unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.last_name
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.last_name.as_deref()))
            .unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }
}

/// `{ doctor }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DoctorResponse {
    pub doctor: Doctor,
}

/// `{ doctors: [...] }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DoctorsResponse {
    pub doctors: Vec<Doctor>,
}

/// Payload for POST /doctor/update/profile/{id}. Form values go out as the
/// user typed them; the backend owns coercion.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DoctorUpdate {
    pub age: String,
    pub specialization: String,
    pub experience: String,
    pub qualification: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub address: String,
    pub about: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture: String,
    #[serde(rename = "hospitalName")]
    pub hospital_name: String,
}
