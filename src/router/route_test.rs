use super::*;

// =============================================================
// Parse / path round-trips
// =============================================================

#[test]
fn parse_and_path_round_trip() {
    let routes = [
        Route::Home,
        Route::About,
        Route::Contact,
        Route::Login,
        Route::PatientDashboard,
        Route::PatientProfile,
        Route::PatientAppointments,
        Route::PatientDoctors,
        Route::BookAppointment {
            doctor_id: "d42".to_string(),
        },
        Route::PatientFeedback {
            doctor_id: "d42".to_string(),
        },
        Route::DoctorDashboard,
        Route::DoctorProfile,
        Route::DoctorAppointments,
        Route::DoctorFeedback,
        Route::AdminDashboard,
    ];

    for route in routes {
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn parse_tolerates_hash_prefix_and_trailing_slash() {
    assert_eq!(Route::parse("#/patient/dashboard"), Route::PatientDashboard);
    assert_eq!(Route::parse("/patient/dashboard/"), Route::PatientDashboard);
    assert_eq!(Route::parse("#/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(Route::parse("/no/such/page"), Route::Home);
    assert_eq!(Route::parse("/patient"), Route::Home);
    assert_eq!(Route::parse("/patient/book-appointment"), Route::Home);
}

#[test]
fn parse_extracts_the_doctor_id() {
    assert_eq!(
        Route::parse("/patient/book-appointment/abc123"),
        Route::BookAppointment {
            doctor_id: "abc123".to_string()
        }
    );
    assert_eq!(
        Route::parse("/patient/feedback/abc123"),
        Route::PatientFeedback {
            doctor_id: "abc123".to_string()
        }
    );
}

// =============================================================
// Protection flags
// =============================================================

#[test]
fn public_routes_are_not_protected() {
    for route in [Route::Home, Route::About, Route::Contact, Route::Login] {
        assert!(!route.is_protected(), "{:?} should be public", route);
    }
}

#[test]
fn dashboard_routes_are_protected() {
    for route in [
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
    ] {
        assert!(route.is_protected(), "{:?} should be protected", route);
    }
}

// =============================================================
// Role landing pages
// =============================================================

#[test]
fn each_role_lands_on_its_dashboard() {
    assert_eq!(role_home(Role::Doctor), Route::DoctorDashboard);
    assert_eq!(role_home(Role::Patient), Route::PatientDashboard);
    assert_eq!(role_home(Role::Admin), Route::AdminDashboard);
}
