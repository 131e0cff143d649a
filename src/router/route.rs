// ============================================================================
// ROUTES - Hash-based route table
// ============================================================================

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::models::Role;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    // Public
    Home,
    About,
    Contact,
    Login,
    // Patient
    PatientDashboard,
    PatientProfile,
    PatientAppointments,
    PatientDoctors,
    BookAppointment { doctor_id: String },
    PatientFeedback { doctor_id: String },
    // Doctor
    DoctorDashboard,
    DoctorProfile,
    DoctorAppointments,
    DoctorFeedback,
    // Admin
    AdminDashboard,
}

impl Route {
    /// Parse a location path (hash fragment without the leading `#`).
    /// Unknown paths land on the home page.
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["login"] => Route::Login,
            ["patient", "dashboard"] => Route::PatientDashboard,
            ["patient", "profile"] => Route::PatientProfile,
            ["patient", "appointments"] => Route::PatientAppointments,
            ["patient", "doctors"] => Route::PatientDoctors,
            ["patient", "book-appointment", doctor_id] => Route::BookAppointment {
                doctor_id: (*doctor_id).to_string(),
            },
            ["patient", "feedback", doctor_id] => Route::PatientFeedback {
                doctor_id: (*doctor_id).to_string(),
            },
            ["doctor", "dashboard"] => Route::DoctorDashboard,
            ["doctor", "profile"] => Route::DoctorProfile,
            ["doctor", "appointments"] => Route::DoctorAppointments,
            ["doctor", "feedback"] => Route::DoctorFeedback,
            ["admin", "dashboard"] => Route::AdminDashboard,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
            Route::PatientDashboard => "/patient/dashboard".to_string(),
            Route::PatientProfile => "/patient/profile".to_string(),
            Route::PatientAppointments => "/patient/appointments".to_string(),
            Route::PatientDoctors => "/patient/doctors".to_string(),
            Route::BookAppointment { doctor_id } => {
                format!("/patient/book-appointment/{}", doctor_id)
            }
            Route::PatientFeedback { doctor_id } => format!("/patient/feedback/{}", doctor_id),
            Route::DoctorDashboard => "/doctor/dashboard".to_string(),
            Route::DoctorProfile => "/doctor/profile".to_string(),
            Route::DoctorAppointments => "/doctor/appointments".to_string(),
            Route::DoctorFeedback => "/doctor/feedback".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
        }
    }

    /// Everything under /patient, /doctor and /admin requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Route::Home | Route::About | Route::Contact | Route::Login
        )
    }
}

/// Where each role lands after login/signup. Centralized so the login and
/// signup flows cannot drift apart.
pub fn role_home(role: Role) -> Route {
    match role {
        Role::Doctor => Route::DoctorDashboard,
        Role::Patient => Route::PatientDashboard,
        Role::Admin => Route::AdminDashboard,
    }
}
