// ============================================================================
// DOCTOR APPOINTMENTS - Schedule with per-appointment confirmation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, on_click, set_inner_html, set_text_content, ElementBuilder,
};
use crate::models::{Appointment, Role};
use crate::services::error::ApiError;
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::{escape_html, format_date};
use crate::viewmodels::AppointmentViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_doctor_appointments(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page appointments-page").build();
    append_child(&page, &render_sidebar(state, Role::Doctor)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("doctor-appointments")?
        .html(&format!(
            "<h1>Appointments</h1><div id=\"appointments-list\">{}</div>",
            loading_markup("Loading appointments...")
        ))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        let doctor_id = user.id.clone();
        spawn_local(async move {
            let vm = AppointmentViewModel::new();
            let result = vm.doctor_appointments(&doctor_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(list) = get_element_by_id("appointments-list") else {
                return;
            };
            match result {
                Ok(appointments) => {
                    set_inner_html(&list, &appointments_markup(&appointments));
                    wire_confirm_buttons(&state, &appointments);
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

fn appointments_markup(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return "<p class=\"empty\">No appointments found.</p>".to_string();
    }

    let rows: String = appointments
        .iter()
        .map(|appt| {
            let patient = appt
                .patient
                .as_ref()
                .and_then(|p| p.display_name())
                .unwrap_or_else(|| "Patient".to_string());
            let action = if appt.is_confirmed() {
                "<span class=\"confirmed\">Confirmed</span>".to_string()
            } else {
                format!(
                    "<button class=\"btn-primary btn-confirm\" id=\"confirm-{}\">Confirm</button>",
                    escape_html(&appt.id)
                )
            };
            format!(
                "<tr>\
                   <td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                   <td><span class=\"status status-{}\" id=\"status-{}\">{}</span></td><td>{}</td>\
                 </tr>",
                escape_html(&patient),
                escape_html(&format_date(&appt.date)),
                escape_html(&appt.time),
                escape_html(appt.description.as_deref().unwrap_or("")),
                escape_html(appt.status_label()),
                escape_html(&appt.id),
                escape_html(appt.status_label()),
                action,
            )
        })
        .collect();

    format!(
        "<table class=\"appointments-table\">\
           <thead><tr><th>Patient</th><th>Date</th><th>Time</th><th>Reason</th>\
             <th>Status</th><th></th></tr></thead>\
           <tbody>{}</tbody>\
         </table>",
        rows
    )
}

fn wire_confirm_buttons(state: &AppState, appointments: &[Appointment]) {
    for appt in appointments {
        if appt.is_confirmed() {
            continue;
        }
        let Some(button) = get_element_by_id(&format!("confirm-{}", appt.id)) else {
            continue;
        };
        let state = state.clone();
        let appointment_id = appt.id.clone();
        on_click(&button, move |_| {
            let state = state.clone();
            let appointment_id = appointment_id.clone();
            let epoch = state.epoch();
            spawn_local(async move {
                let vm = AppointmentViewModel::new();
                let result = vm.confirm(&appointment_id).await;
                if state.epoch() != epoch {
                    return;
                }
                match result {
                    Ok(()) => {
                        // Optimistic row update, no refetch
                        if let Some(status) =
                            get_element_by_id(&format!("status-{}", appointment_id))
                        {
                            set_text_content(&status, "confirmed");
                            status.set_class_name("status status-confirmed");
                        }
                        if let Some(button) =
                            get_element_by_id(&format!("confirm-{}", appointment_id))
                        {
                            set_inner_html(
                                &button.parent_element().unwrap_or(button),
                                "<span class=\"confirmed\">Confirmed</span>",
                            );
                        }
                        state.set_toast("Appointment confirmed successfully!", ToastKind::Success);
                    }
                    Err(err) => {
                        state.handle_api_error(&err);
                    }
                }
            });
        });
    }
}
