// ============================================================================
// AUTH VIEWMODEL - Login/signup form logic
// ============================================================================
// Validates locally, submits through the auth gateway and answers with the
// route the caller should navigate to (role-based dashboard).
// ============================================================================

#[cfg(test)]
#[path = "auth_viewmodel_test.rs"]
mod auth_viewmodel_test;

use std::collections::HashMap;

use crate::models::{Role, SignupRequest};
use crate::router::{role_home, Route};
use crate::services::auth_service;
use crate::services::error::AuthError;
use crate::state::app_state::AppState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Client-side required-field check; the backend does real validation.
pub fn validate_login(form: &LoginForm) -> Result<(), AuthError> {
    let mut errors = HashMap::new();
    if form.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    }
    if form.password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AuthError::Fields(errors))
    }
}

pub fn validate_signup(form: &SignupForm) -> Result<(), AuthError> {
    let mut errors = HashMap::new();
    if form.first_name.trim().is_empty() {
        errors.insert("firstName".to_string(), "First name is required".to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.insert("lastName".to_string(), "Last name is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    }
    if form.password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AuthError::Fields(errors))
    }
}

/// Log in and answer with the dashboard route for the user's role.
pub async fn submit_login(state: &AppState, form: &LoginForm) -> Result<Route, AuthError> {
    validate_login(form)?;
    let identity = auth_service::login(&state.session, form.email.trim(), &form.password).await?;
    Ok(role_home(identity.role))
}

/// Sign up (auto-login) and answer with the dashboard route for the role.
pub async fn submit_signup(state: &AppState, form: &SignupForm) -> Result<Route, AuthError> {
    validate_signup(form)?;
    let request = SignupRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        role: form.role,
    };
    let identity = auth_service::signup(&state.session, &request).await?;
    Ok(role_home(identity.role))
}

/// Log out and land on the login view.
pub async fn logout(state: &AppState) {
    auth_service::logout(&state.session).await;
    state.navigate(Route::Login);
}
