// ============================================================================
// PATIENT FEEDBACK FORM - Star rating + comments for a doctor
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, on_click, on_submit, set_inner_html, set_text_content,
    textarea_value, ElementBuilder,
};
use crate::models::{Role, SubmitFeedbackRequest};
use crate::router::Route;
use crate::services::error::ApiError;
use crate::services::ApiClient;
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::escape_html;
use crate::viewmodels::feedback_viewmodel::validate_feedback;
use crate::viewmodels::FeedbackViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_patient_feedback(state: &AppState, doctor_id: &str) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page feedback-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("patient-feedback")?
        .html(&loading_markup("Loading doctor details..."))
        .build();
    append_child(&page, &content)?;

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
            let Some(content) = get_element_by_id("patient-feedback") else {
                return;
            };
            match result {
                Ok(doctor) => {
                    let stars: String = (1..=5)
                        .map(|value| {
                            format!(
                                "<button type=\"button\" class=\"star\" id=\"star-{0}\" \
                                   data-value=\"{0}\">☆</button>",
                                value
                            )
                        })
                        .collect();
                    set_inner_html(
                        &content,
                        &format!(
                            "<h1>Rate Your Visit</h1>\
                             <p class=\"feedback-doctor\">Dr. {} · {}</p>\
                             <form id=\"feedback-form\" class=\"feedback-form\">\
                               <div class=\"star-row\">{}</div>\
                               <div class=\"form-group\">\
                                 <label for=\"feedback-comments\">Comments *</label>\
                                 <textarea id=\"feedback-comments\" rows=\"4\" \
                                   placeholder=\"How was your experience?\"></textarea>\
                               </div>\
                               <p class=\"form-error\" id=\"feedback-error\"></p>\
                               <div class=\"form-actions\">\
                                 <button type=\"button\" id=\"feedback-cancel\" class=\"btn-secondary\">Cancel</button>\
                                 <button type=\"submit\" id=\"feedback-submit\" class=\"btn-primary\">Submit Feedback</button>\
                               </div>\
                             </form>",
                            escape_html(&doctor.full_name()),
                            escape_html(doctor.specialization.as_deref().unwrap_or("General")),
                            stars,
                        ),
                    );
                    wire_feedback_form(&state, &doctor_id, &patient_id);
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

fn wire_feedback_form(state: &AppState, doctor_id: &str, patient_id: &str) {
    let rating = Rc::new(RefCell::new(0u8));

    for value in 1..=5u8 {
        if let Some(star) = get_element_by_id(&format!("star-{}", value)) {
            let rating = rating.clone();
            on_click(&star, move |_| {
                *rating.borrow_mut() = value;
                paint_stars(value);
            });
        }
    }

    if let Some(cancel) = get_element_by_id("feedback-cancel") {
        let state = state.clone();
        on_click(&cancel, move |_| {
            state.navigate(Route::PatientDoctors);
        });
    }

    let Some(form) = get_element_by_id("feedback-form") else {
        return;
    };

    let state = state.clone();
    let doctor_id = doctor_id.to_string();
    let patient_id = patient_id.to_string();
    on_submit(&form, move |_| {
        let stars = *rating.borrow();
        let comments = textarea_value("feedback-comments");

        if let Err(message) = validate_feedback(stars, &comments) {
            show_feedback_error(&message);
            return;
        }
        show_feedback_error("");

        let request = SubmitFeedbackRequest {
            doctor_id: doctor_id.clone(),
            patient_id: patient_id.clone(),
            rating: stars,
            comments: comments.trim().to_string(),
        };

        let state = state.clone();
        let epoch = state.epoch();
        spawn_local(async move {
            let vm = FeedbackViewModel::new();
            let result = vm.submit(&request).await;
            if state.epoch() != epoch {
                return;
            }
            match result {
                Ok(()) => {
                    state.set_toast("Thank you for your feedback!", ToastKind::Success);
                    state.navigate(Route::PatientDoctors);
                }
                Err(err) => {
                    show_feedback_error(&err.user_message());
                    state.handle_api_error(&err);
                }
            }
        });
    });
}

fn paint_stars(rating: u8) {
    for value in 1..=5u8 {
        if let Some(star) = get_element_by_id(&format!("star-{}", value)) {
            set_text_content(&star, if value <= rating { "★" } else { "☆" });
        }
    }
}

fn show_feedback_error(message: &str) {
    if let Some(line) = get_element_by_id("feedback-error") {
        set_text_content(&line, message);
    }
}
