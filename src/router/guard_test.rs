use super::*;

use crate::models::{Identity, Role};
use crate::services::storage::MemoryStorage;

fn identity(role: Role) -> Identity {
    serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "firstName": "Asha",
        "lastName": "Iyer",
        "email": "asha@example.com",
        "role": role.as_str(),
    }))
    .unwrap()
}

fn protected_routes() -> Vec<Route> {
    vec![
        Route::PatientDashboard,
        Route::PatientProfile,
        Route::PatientAppointments,
        Route::PatientDoctors,
        Route::BookAppointment {
            doctor_id: "d1".to_string(),
        },
        Route::PatientFeedback {
            doctor_id: "d1".to_string(),
        },
        Route::DoctorDashboard,
        Route::DoctorProfile,
        Route::DoctorAppointments,
        Route::DoctorFeedback,
        Route::AdminDashboard,
    ]
}

// =============================================================
// Hydration gate
// =============================================================

#[test]
fn protected_routes_are_pending_before_hydration() {
    let session = SessionState::new(MemoryStorage::new());
    for route in protected_routes() {
        assert_eq!(evaluate(&route, &session), GuardOutcome::Pending);
    }
}

#[test]
fn public_routes_are_allowed_even_before_hydration() {
    let session = SessionState::new(MemoryStorage::new());
    for route in [Route::Home, Route::About, Route::Contact, Route::Login] {
        assert_eq!(evaluate(&route, &session), GuardOutcome::Allow);
    }
}

// =============================================================
// Empty session: redirect to the landing page, never render
// =============================================================

#[test]
fn empty_session_redirects_every_protected_route_to_home() {
    let session = SessionState::new(MemoryStorage::new());
    session.hydrate();
    for route in protected_routes() {
        assert_eq!(
            evaluate(&route, &session),
            GuardOutcome::RedirectTo(Route::Home),
            "{:?} must not render for an empty session",
            route
        );
    }
}

// =============================================================
// Authenticated flows
// =============================================================

#[test]
fn logged_in_patient_reaches_the_patient_dashboard() {
    let session = SessionState::new(MemoryStorage::new());
    session.hydrate();
    session.set_user(identity(Role::Patient));

    assert_eq!(
        evaluate(&Route::PatientDashboard, &session),
        GuardOutcome::Allow
    );
}

#[test]
fn clear_user_locks_every_protected_route_again() {
    let session = SessionState::new(MemoryStorage::new());
    session.hydrate();
    session.set_user(identity(Role::Doctor));
    session.clear_user();

    for route in protected_routes() {
        assert_eq!(
            evaluate(&route, &session),
            GuardOutcome::RedirectTo(Route::Home)
        );
    }
}

#[test]
fn rehydrated_session_passes_the_guard_without_fresh_login() {
    let storage = MemoryStorage::new();
    let first = SessionState::new(storage.clone());
    first.hydrate();
    first.set_user(identity(Role::Patient));

    let reloaded = SessionState::new(storage);
    reloaded.hydrate();

    assert_eq!(
        evaluate(&Route::PatientDashboard, &reloaded),
        GuardOutcome::Allow
    );
}
