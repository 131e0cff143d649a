use super::*;
use std::collections::HashMap;

use crate::models::{Identity, Role};
use crate::services::storage::MemoryStorage;

fn patient() -> Identity {
    serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "firstName": "Asha",
        "lastName": "Iyer",
        "email": "asha@example.com",
        "role": "patient",
    }))
    .unwrap()
}

fn state() -> AppState {
    let state = AppState::with_storage(MemoryStorage::new());
    state.session.hydrate();
    state
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_updates_route_and_epoch() {
    let state = state();
    let before = state.epoch();

    state.navigate(Route::Login);

    assert_eq!(state.route(), Route::Login);
    assert!(state.epoch() > before);
}

#[test]
fn navigate_notifies_subscribers() {
    let state = state();
    let fired = std::rc::Rc::new(std::cell::Cell::new(0u32));
    {
        let fired = fired.clone();
        state.subscribe_to_changes(move || fired.set(fired.get() + 1));
    }

    state.navigate(Route::About);
    state.navigate(Route::Contact);

    assert_eq!(fired.get(), 2);
}

#[test]
fn replace_route_does_not_notify() {
    let state = state();
    let fired = std::rc::Rc::new(std::cell::Cell::new(0u32));
    {
        let fired = fired.clone();
        state.subscribe_to_changes(move || fired.set(fired.get() + 1));
    }

    state.replace_route(Route::Home);

    assert_eq!(fired.get(), 0);
    assert_eq!(state.route(), Route::Home);
}

// =============================================================
// Cross-cutting 401/403 rule
// =============================================================

#[test]
fn unauthorized_error_clears_session_and_redirects_to_login() {
    let state = state();
    state.session.set_user(patient());
    state.navigate(Route::PatientDashboard);

    state.handle_api_error(&ApiError::Unauthorized {
        status: 403,
        message: "Forbidden".to_string(),
    });

    assert!(!state.session.is_authenticated());
    assert!(state.session.user().is_none());
    assert_eq!(state.route(), Route::Login);
}

#[test]
fn non_auth_errors_toast_and_leave_the_session_alone() {
    let state = state();
    state.session.set_user(patient());
    state.navigate(Route::PatientDashboard);

    state.handle_api_error(&ApiError::Status {
        status: 500,
        message: "Internal error".to_string(),
    });

    assert!(state.session.is_authenticated());
    assert_eq!(state.route(), Route::PatientDashboard);
    assert_eq!(state.toast().unwrap().message, "Internal error");
    assert_eq!(state.toast().unwrap().kind, ToastKind::Error);
}

#[test]
fn validation_errors_do_not_clear_the_session() {
    let state = state();
    state.session.set_user(patient());

    let mut fields = HashMap::new();
    fields.insert("email".to_string(), "Invalid email".to_string());
    state.handle_api_error(&ApiError::Validation(fields));

    assert!(state.session.is_authenticated());
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn toasts_do_not_trigger_the_render_channel() {
    let state = state();
    let renders = std::rc::Rc::new(std::cell::Cell::new(0u32));
    {
        let renders = renders.clone();
        state.subscribe_to_changes(move || renders.set(renders.get() + 1));
    }

    state.set_toast("saved", ToastKind::Success);
    state.clear_toast();

    assert_eq!(renders.get(), 0);
}

#[test]
fn clear_toast_drops_the_message() {
    let state = state();
    state.set_toast("saved", ToastKind::Success);
    state.clear_toast();
    assert!(state.toast().is_none());
}
