// ============================================================================
// AUTH GATEWAY - login / signup / logout against the backend
// ============================================================================
// Translates backend responses into session store updates and hands the
// identity back to the caller, which owns the role-based redirect.
// ============================================================================

use crate::models::{Identity, LoginRequest, SignupRequest};
use crate::services::api_client::ApiClient;
use crate::services::error::{ApiError, AuthError};
use crate::state::session_state::SessionState;

/// Log in and populate the session store on success.
pub async fn login(
    session: &SessionState,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let api = ApiClient::new();
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = api.login(&request).await?;
    let identity = response.user.ok_or_else(|| {
        AuthError::from(ApiError::Decode("login response carried no user".to_string()))
    })?;

    log::info!("✅ Logged in as {} ({})", identity.email, identity.role.as_str());
    session.set_user(identity.clone());
    Ok(identity)
}

/// Create an account. The backend logs the new user in on the same call, so
/// the session store is populated immediately (auto-login after signup).
pub async fn signup(session: &SessionState, request: &SignupRequest) -> Result<Identity, AuthError> {
    let api = ApiClient::new();

    let response = api.signup(request).await?;
    let identity = response.user.ok_or_else(|| {
        AuthError::from(ApiError::Decode("signup response carried no user".to_string()))
    })?;

    log::info!("✅ Signed up as {} ({})", identity.email, identity.role.as_str());
    session.set_user(identity.clone());
    Ok(identity)
}

/// Log out: the backend call is best-effort, the local session clear is not.
pub async fn logout(session: &SessionState) {
    let api = ApiClient::new();
    if let Err(err) = api.logout().await {
        log::warn!("⚠️ Logout request failed, clearing session anyway: {}", err);
    }
    session.clear_user();
}
