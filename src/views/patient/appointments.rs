// ============================================================================
// PATIENT APPOINTMENTS - Schedule listing with doctor names
// ============================================================================

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{Appointment, Role};
use crate::services::error::ApiError;
use crate::state::app_state::AppState;
use crate::utils::{escape_html, format_date};
use crate::viewmodels::AppointmentViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_patient_appointments(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page appointments-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("patient-appointments")?
        .html(&format!(
            "<h1>My Appointments</h1><div id=\"appointments-list\">{}</div>",
            loading_markup("Loading appointments...")
        ))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        let patient_id = user.id.clone();
        spawn_local(async move {
            let vm = AppointmentViewModel::new();
            let result = vm.patient_appointments_with_doctors(&patient_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(list) = get_element_by_id("appointments-list") else {
                return;
            };
            match result {
                Ok((appointments, doctor_names)) => {
                    set_inner_html(&list, &appointments_markup(&appointments, &doctor_names));
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "No appointments found".to_string(),
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

fn appointments_markup(
    appointments: &[Appointment],
    doctor_names: &HashMap<String, String>,
) -> String {
    if appointments.is_empty() {
        return "<p class=\"empty\">No appointments found.</p>".to_string();
    }

    let rows: String = appointments
        .iter()
        .map(|appt| {
            let doctor = appt
                .doctor
                .as_ref()
                .and_then(|d| {
                    d.display_name()
                        .or_else(|| doctor_names.get(d.id()).cloned())
                })
                .unwrap_or_else(|| "Unknown".to_string());
            format!(
                "<tr>\
                   <td>Dr. {}</td><td>{}</td><td>{}</td>\
                   <td><span class=\"status status-{}\">{}</span></td><td>{}</td>\
                 </tr>",
                escape_html(&doctor),
                escape_html(&format_date(&appt.date)),
                escape_html(&appt.time),
                escape_html(appt.status_label()),
                escape_html(appt.status_label()),
                escape_html(appt.description.as_deref().unwrap_or("")),
            )
        })
        .collect();

    format!(
        "<table class=\"appointments-table\">\
           <thead><tr><th>Doctor</th><th>Date</th><th>Time</th><th>Status</th><th>Reason</th></tr></thead>\
           <tbody>{}</tbody>\
         </table>",
        rows
    )
}
