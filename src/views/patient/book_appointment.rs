// ============================================================================
// BOOK APPOINTMENT - Booking form against a chosen doctor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, input_value, on_click, on_submit, set_inner_html,
    set_text_content, textarea_value, ElementBuilder,
};
use crate::models::{BookAppointmentRequest, Role};
use crate::router::Route;
use crate::services::error::ApiError;
use crate::services::ApiClient;
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::escape_html;
use crate::viewmodels::appointment_viewmodel::{booking_date_payload, validate_booking};
use crate::viewmodels::AppointmentViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_book_appointment(state: &AppState, doctor_id: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page booking-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("book-appointment")?
        .html(&loading_markup("Loading doctor details..."))
        .build();
    append_child(&page, &content)?;

    // Load the doctor first; the form only renders once we know who the
    // appointment is with.
    {
        let state = state.clone();
        let epoch = state.epoch();
        let doctor_id = doctor_id.to_string();
        let patient_id = user.id.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            let result = api.doctor_profile(&doctor_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(content) = get_element_by_id("book-appointment") else {
                return;
            };
            match result {
                Ok(doctor) => {
                    set_inner_html(
                        &content,
                        &format!(
                            "<h1>Book an Appointment</h1>\
                             <p class=\"booking-doctor\">Dr. {} · {}</p>\
                             <form id=\"booking-form\" class=\"booking-form\">\
                               <div class=\"form-group\">\
                                 <label for=\"booking-date\">Date *</label>\
                                 <input type=\"date\" id=\"booking-date\"/>\
                               </div>\
                               <div class=\"form-group\">\
                                 <label for=\"booking-time\">Time *</label>\
                                 <input type=\"time\" id=\"booking-time\"/>\
                               </div>\
                               <div class=\"form-group\">\
                                 <label for=\"booking-description\">Reason for Visit *</label>\
                                 <textarea id=\"booking-description\" rows=\"4\" \
                                   placeholder=\"Describe your symptoms or reason for the visit\"></textarea>\
                               </div>\
                               <p class=\"form-error\" id=\"booking-error\"></p>\
                               <div class=\"form-actions\">\
                                 <button type=\"button\" id=\"booking-cancel\" class=\"btn-secondary\">Cancel</button>\
                                 <button type=\"submit\" id=\"booking-submit\" class=\"btn-primary\">Book Appointment</button>\
                               </div>\
                             </form>",
                            escape_html(&doctor.full_name()),
                            escape_html(doctor.specialization.as_deref().unwrap_or("General")),
                        ),
                    );
                    wire_booking_form(&state, &doctor_id, &patient_id);
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "Doctor not found".to_string(),
                        other => other.user_message(),
                    };
                    set_inner_html(&content, &error_markup(&message));
                    state.handle_api_error(&err);
                }
            }
        });
    }

    Ok(page)
}

fn wire_booking_form(state: &AppState, doctor_id: &str, patient_id: &str) {
    if let Some(cancel) = get_element_by_id("booking-cancel") {
        let state = state.clone();
        on_click(&cancel, move |_| {
            state.navigate(Route::PatientDoctors);
        });
    }

    let Some(form) = get_element_by_id("booking-form") else {
        return;
    };

    let state = state.clone();
    let doctor_id = doctor_id.to_string();
    let patient_id = patient_id.to_string();
    on_submit(&form, move |_| {
        let date = input_value("booking-date");
        let time = input_value("booking-time");
        let description = textarea_value("booking-description");

        let now = chrono::Utc::now().naive_utc();
        if let Err(message) = validate_booking(&date, &time, &description, now) {
            show_booking_error(&message);
            return;
        }
        show_booking_error("");

        let request = BookAppointmentRequest {
            patient_id: patient_id.clone(),
            date: booking_date_payload(&date),
            time: time.trim().to_string(),
            description: description.trim().to_string(),
        };

        let state = state.clone();
        let doctor_id = doctor_id.clone();
        let epoch = state.epoch();
        set_booking_submitting(true);
        spawn_local(async move {
            let vm = AppointmentViewModel::new();
            let result = vm.book(&doctor_id, &request).await;
            if state.epoch() != epoch {
                return;
            }
            match result {
                Ok(()) => {
                    state.set_toast("Appointment booked successfully!", ToastKind::Success);
                    state.navigate(Route::PatientAppointments);
                }
                Err(err) => {
                    set_booking_submitting(false);
                    match &err {
                        ApiError::Validation(fields) => {
                            let message = fields
                                .values()
                                .next()
                                .cloned()
                                .unwrap_or_else(|| "Invalid booking details".to_string());
                            show_booking_error(&message);
                        }
                        other => {
                            show_booking_error(&other.user_message());
                            state.handle_api_error(other);
                        }
                    }
                }
            }
        });
    });
}

fn show_booking_error(message: &str) {
    if let Some(line) = get_element_by_id("booking-error") {
        set_text_content(&line, message);
    }
}

fn set_booking_submitting(submitting: bool) {
    if let Some(button) = get_element_by_id("booking-submit") {
        if submitting {
            let _ = button.set_attribute("disabled", "");
            set_text_content(&button, "Booking...");
        } else {
            let _ = button.remove_attribute("disabled");
            set_text_content(&button, "Book Appointment");
        }
    }
}
