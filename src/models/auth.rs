use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::user::{Identity, Role};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub role: Role,
}

/// `{ message, user }` envelope returned by /login and /signup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
}

/// Plain `{ message }` acknowledgements (logout, feedback submit, ...).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shapes the backend uses:
/// `{ message }`, `{ error }`, or `{ errors: { field: message } }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}
