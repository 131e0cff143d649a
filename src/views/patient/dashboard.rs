// ============================================================================
// PATIENT DASHBOARD
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::Role;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::escape_html;
use crate::viewmodels::AppointmentViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_patient_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page dashboard-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("patient-dashboard")?
        .html(&format!(
            "<header class=\"dashboard-header\">\
               <h1>Welcome Back, {}</h1>\
               <p>Manage your health with ease.</p>\
             </header>\
             <div class=\"dashboard-grid\">\
               <div class=\"card\" id=\"appointments-card\">\
                 <h2>Total Appointments</h2>{}\
               </div>\
               <div class=\"card\">\
                 <h2>Quick Actions</h2>\
                 <div class=\"quick-actions\">\
                   <a class=\"btn-secondary\" href=\"#{}\">Schedule Appointment</a>\
                   <a class=\"btn-secondary\" href=\"#{}\">Update Profile</a>\
                 </div>\
               </div>\
             </div>",
            escape_html(&user.first_name.to_uppercase()),
            loading_markup("Loading appointments..."),
            Route::PatientDoctors.path(),
            Route::PatientProfile.path(),
        ))
        .build();
    append_child(&page, &content)?;

    // The count card fills in once the patient's appointments arrive.
    {
        let state = state.clone();
        let epoch = state.epoch();
        let patient_id = user.id.clone();
        spawn_local(async move {
            let vm = AppointmentViewModel::new();
            let result = vm.patient_appointments(&patient_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(card) = get_element_by_id("appointments-card") else {
                return;
            };
            match result {
                Ok(appointments) => {
                    set_inner_html(
                        &card,
                        &format!(
                            "<h2>Total Appointments</h2>\
                             <p class=\"stat\">{}</p>\
                             <a class=\"btn-primary\" href=\"#{}\">View Schedule</a>",
                            appointments.len(),
                            Route::PatientAppointments.path(),
                        ),
                    );
                }
                Err(err) => {
                    set_inner_html(
                        &card,
                        &format!(
                            "<h2>Total Appointments</h2>{}",
                            error_markup(&err.user_message())
                        ),
                    );
                    state.handle_api_error(&err);
                }
            }
        });
    }

    Ok(page)
}
