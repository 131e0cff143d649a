// ============================================================================
// APP VIEW - Route dispatch behind the guard
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{evaluate, GuardOutcome, Route};
use crate::state::app_state::AppState;
use crate::views::admin::render_admin_dashboard;
use crate::views::auth::render_login;
use crate::views::doctor::{
    render_doctor_appointments, render_doctor_dashboard, render_doctor_feedback,
    render_doctor_profile,
};
use crate::views::pages::{render_about, render_contact, render_home};
use crate::views::patient::{
    render_book_appointment, render_patient_appointments, render_patient_dashboard,
    render_patient_doctors, render_patient_feedback, render_patient_profile,
};
use crate::views::shared::render_navbar;

/// Build the whole view tree for the current route. The guard re-runs here
/// on every render; a blocked route renders the landing page instead.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    let requested = state.route();
    let displayed = match evaluate(&requested, &state.session) {
        GuardOutcome::Allow => requested,
        GuardOutcome::Pending => {
            // Session still rehydrating: neutral placeholder, no redirect.
            let placeholder = ElementBuilder::new("div")?
                .class("session-pending")
                .html("<div class=\"spinner\"></div>")
                .build();
            append_child(&shell, &placeholder)?;
            return Ok(shell);
        }
        GuardOutcome::RedirectTo(target) => {
            log::warn!(
                "🔒 Blocked {} for unauthenticated visitor, showing {}",
                requested.path(),
                target.path()
            );
            // replace_route (not navigate): we are inside a render pass and
            // a notify here would recurse into another one.
            state.replace_route(target.clone());
            target
        }
    };

    if !displayed.is_protected() && displayed != Route::Login {
        append_child(&shell, &render_navbar(state)?)?;
    }

    let view = match &displayed {
        Route::Home => render_home()?,
        Route::About => render_about()?,
        Route::Contact => render_contact()?,
        Route::Login => render_login(state)?,
        Route::PatientDashboard => render_patient_dashboard(state)?,
        Route::PatientProfile => render_patient_profile(state)?,
        Route::PatientAppointments => render_patient_appointments(state)?,
        Route::PatientDoctors => render_patient_doctors(state)?,
        Route::BookAppointment { doctor_id } => render_book_appointment(state, doctor_id)?,
        Route::PatientFeedback { doctor_id } => render_patient_feedback(state, doctor_id)?,
        Route::DoctorDashboard => render_doctor_dashboard(state)?,
        Route::DoctorProfile => render_doctor_profile(state)?,
        Route::DoctorAppointments => render_doctor_appointments(state)?,
        Route::DoctorFeedback => render_doctor_feedback(state)?,
        Route::AdminDashboard => render_admin_dashboard(state)?,
    };
    append_child(&shell, &view)?;

    Ok(shell)
}
