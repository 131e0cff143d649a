// ============================================================================
// ALL DOCTORS - Directory the patient books from
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{Doctor, Role};
use crate::router::Route;
use crate::services::error::ApiError;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::{display_value, escape_html};
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_patient_doctors(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page doctors-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("patient-doctors")?
        .html(&format!(
            "<h1>Find Doctors</h1><div id=\"doctors-list\">{}</div>",
            loading_markup("Loading doctors...")
        ))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        spawn_local(async move {
            let api = ApiClient::new();
            let result = api.all_doctors().await;
            if state.epoch() != epoch {
                return;
            }
            let Some(list) = get_element_by_id("doctors-list") else {
                return;
            };
            match result {
                Ok(doctors) if doctors.is_empty() => {
                    set_inner_html(&list, &error_markup("No doctors found"));
                }
                Ok(doctors) => {
                    set_inner_html(&list, &doctors_markup(&doctors));
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "No doctors found".to_string(),
                        other => other.user_message(),
                    };
                    set_inner_html(&list, &error_markup(&message));
                    state.handle_api_error(&err);
                }
            }
        });
    }

    Ok(page)
}

fn doctors_markup(doctors: &[Doctor]) -> String {
    let cards: String = doctors
        .iter()
        .map(|doctor| {
            let doctor_id = doctor.user_id().unwrap_or("");
            format!(
                "<div class=\"doctor-card\">\
                   <h3>Dr. {}</h3>\
                   <p class=\"specialization\">{}</p>\
                   <p>{} years experience · {}</p>\
                   <p>{}</p>\
                   <div class=\"card-actions\">\
                     <a class=\"btn-primary\" href=\"#{}\">Book Appointment</a>\
                     <a class=\"btn-secondary\" href=\"#{}\">Leave Feedback</a>\
                   </div>\
                 </div>",
                escape_html(&doctor.full_name()),
                escape_html(doctor.specialization.as_deref().unwrap_or("General")),
                escape_html(&display_value(&doctor.experience)),
                escape_html(doctor.qualification.as_deref().unwrap_or("")),
                escape_html(doctor.hospital_name.as_deref().unwrap_or("")),
                Route::BookAppointment {
                    doctor_id: doctor_id.to_string()
                }
                .path(),
                Route::PatientFeedback {
                    doctor_id: doctor_id.to_string()
                }
                .path(),
            )
        })
        .collect();

    format!("<div class=\"doctors-grid\">{}</div>", cards)
}
