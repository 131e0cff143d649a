// ============================================================================
// DOCTOR FEEDBACK - Patient ratings received by the logged-in doctor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{Feedback, Role};
use crate::services::error::ApiError;
use crate::state::app_state::AppState;
use crate::utils::{escape_html, format_date};
use crate::viewmodels::FeedbackViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_doctor_feedback(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page feedback-page").build();
    append_child(&page, &render_sidebar(state, Role::Doctor)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("doctor-feedback")?
        .html(&format!(
            "<h1>Patient Feedback</h1><div id=\"feedback-list\">{}</div>",
            loading_markup("Loading feedback...")
        ))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        let doctor_id = user.id.clone();
        spawn_local(async move {
            let vm = FeedbackViewModel::new();
            let result = vm.doctor_feedback(&doctor_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(list) = get_element_by_id("feedback-list") else {
                return;
            };
            match result {
                Ok(feedbacks) => {
                    set_inner_html(&list, &feedback_markup(&feedbacks));
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "No feedback found".to_string(),
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

fn stars_markup(rating: u8) -> String {
    (1..=5)
        .map(|value| if value <= rating { "★" } else { "☆" })
        .collect()
}

fn feedback_markup(feedbacks: &[Feedback]) -> String {
    if feedbacks.is_empty() {
        return "<p class=\"empty\">No feedback yet.</p>".to_string();
    }

    let cards: String = feedbacks
        .iter()
        .map(|feedback| {
            let patient = feedback
                .patient
                .as_ref()
                .and_then(|p| p.display_name())
                .unwrap_or_else(|| "Anonymous".to_string());
            let when = feedback
                .created_at
                .as_deref()
                .map(format_date)
                .unwrap_or_default();
            format!(
                "<div class=\"feedback-card\">\
                   <div class=\"feedback-head\">\
                     <span class=\"patient-name\">{}</span>\
                     <span class=\"stars\">{}</span>\
                   </div>\
                   <p class=\"comments\">{}</p>\
                   <span class=\"when\">{}</span>\
                 </div>",
                escape_html(&patient),
                stars_markup(feedback.rating),
                escape_html(feedback.comments.as_deref().unwrap_or("")),
                escape_html(&when),
            )
        })
        .collect();

    format!("<div class=\"feedback-grid\">{}</div>", cards)
}
