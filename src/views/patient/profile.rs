// ============================================================================
// PATIENT PROFILE - View and update the patient's medical profile
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, input_value, on_submit, select_value, set_inner_html,
    set_input_value, set_select_value, set_text_content, set_textarea_value, textarea_value,
    ElementBuilder,
};
use crate::models::{Patient, PatientUpdate, Role};
use crate::services::error::ApiError;
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::{display_value, escape_html};
use crate::viewmodels::profile_viewmodel::{merge_patient_identity, validate_patient_profile};
use crate::viewmodels::ProfileViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub fn render_patient_profile(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page profile-page").build();
    append_child(&page, &render_sidebar(state, Role::Patient)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("patient-profile")?
        .html(&loading_markup("Loading profile..."))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        let user_id = user.id.clone();
        spawn_local(async move {
            let vm = ProfileViewModel::new();
            let result = vm.load_patient(&user_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(content) = get_element_by_id("patient-profile") else {
                return;
            };
            match result {
                Ok(patient) => {
                    set_inner_html(&content, &profile_form_markup(&patient));
                    fill_form(&patient);
                    // Refresh the identity wholesale so the rest of the app
                    // reads current profile data.
                    if let Some(current) = state.session.user() {
                        state.session.set_user(merge_patient_identity(&current, &patient));
                    }
                    wire_profile_form(&state, &user_id);
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "Patient profile not found".to_string(),
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

fn profile_form_markup(patient: &Patient) -> String {
    let blood_options: String = BLOOD_GROUPS
        .iter()
        .map(|group| format!("<option value=\"{0}\">{0}</option>", group))
        .collect();

    format!(
        "<h1>My Profile</h1>\
         <form id=\"profile-form\" class=\"profile-form\">\
           <div class=\"form-row\">\
             <div class=\"form-group\">\
               <label for=\"profile-first-name\">First Name</label>\
               <input type=\"text\" id=\"profile-first-name\" value=\"{first}\" disabled/>\
             </div>\
             <div class=\"form-group\">\
               <label for=\"profile-last-name\">Last Name</label>\
               <input type=\"text\" id=\"profile-last-name\" value=\"{last}\" disabled/>\
             </div>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-email\">Email</label>\
             <input type=\"email\" id=\"profile-email\" value=\"{email}\" disabled/>\
           </div>\
           <div class=\"form-row\">\
             <div class=\"form-group\">\
               <label for=\"profile-age\">Age</label>\
               <input type=\"number\" id=\"profile-age\"/>\
             </div>\
             <div class=\"form-group\">\
               <label for=\"profile-gender\">Gender *</label>\
               <select id=\"profile-gender\">\
                 <option value=\"\">Select</option>\
                 <option value=\"male\">Male</option>\
                 <option value=\"female\">Female</option>\
                 <option value=\"other\">Other</option>\
               </select>\
             </div>\
             <div class=\"form-group\">\
               <label for=\"profile-blood-group\">Blood Group *</label>\
               <select id=\"profile-blood-group\">\
                 <option value=\"\">Select</option>{blood}\
               </select>\
             </div>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-contact\">Contact Number</label>\
             <input type=\"tel\" id=\"profile-contact\"/>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-medical-history\">Medical History *</label>\
             <textarea id=\"profile-medical-history\" rows=\"4\"></textarea>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-address\">Address</label>\
             <textarea id=\"profile-address\" rows=\"2\"></textarea>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-picture\">Profile Picture URL</label>\
             <input type=\"url\" id=\"profile-picture\"/>\
           </div>\
           <p class=\"form-error\" id=\"profile-error\"></p>\
           <button type=\"submit\" id=\"profile-submit\" class=\"btn-primary\">Save Changes</button>\
         </form>",
        first = escape_html(patient.first_name()),
        last = escape_html(patient.last_name()),
        email = escape_html(patient.email()),
        blood = blood_options,
    )
}

fn fill_form(patient: &Patient) {
    set_input_value("profile-age", &display_value(&patient.age));
    set_select_value("profile-gender", patient.gender.as_deref().unwrap_or(""));
    set_select_value(
        "profile-blood-group",
        patient.blood_group.as_deref().unwrap_or(""),
    );
    set_input_value(
        "profile-contact",
        patient.contact_number.as_deref().unwrap_or(""),
    );
    set_textarea_value(
        "profile-medical-history",
        patient.medical_history.as_deref().unwrap_or(""),
    );
    set_textarea_value("profile-address", patient.address.as_deref().unwrap_or(""));
    set_input_value(
        "profile-picture",
        patient.profile_picture.as_deref().unwrap_or(""),
    );
}

fn wire_profile_form(state: &AppState, user_id: &str) {
    let Some(form) = get_element_by_id("profile-form") else {
        return;
    };

    let state = state.clone();
    let user_id = user_id.to_string();
    on_submit(&form, move |_| {
        let age = input_value("profile-age");
        let gender = select_value("profile-gender");
        let blood_group = select_value("profile-blood-group");
        let medical_history = textarea_value("profile-medical-history");

        if let Some(message) =
            validate_patient_profile(&age, &gender, &medical_history, &blood_group)
        {
            show_profile_error(&message);
            return;
        }
        show_profile_error("");

        let update = PatientUpdate {
            age: age.trim().to_string(),
            gender,
            contact_number: input_value("profile-contact").trim().to_string(),
            blood_group,
            medical_history: medical_history.trim().to_string(),
            address: textarea_value("profile-address").trim().to_string(),
            profile_picture: input_value("profile-picture").trim().to_string(),
        };

        let state = state.clone();
        let user_id = user_id.clone();
        let epoch = state.epoch();
        set_profile_submitting(true);
        spawn_local(async move {
            let vm = ProfileViewModel::new();
            let result = vm.save_patient(&user_id, &update).await;
            if state.epoch() != epoch {
                return;
            }
            set_profile_submitting(false);
            match result {
                Ok(patient) => {
                    if let Some(current) = state.session.user() {
                        state.session.set_user(merge_patient_identity(&current, &patient));
                    }
                    state.set_toast("Profile updated successfully", ToastKind::Success);
                }
                Err(err) => {
                    match &err {
                        ApiError::Validation(fields) => {
                            let message = fields
                                .values()
                                .next()
                                .cloned()
                                .unwrap_or_else(|| "Invalid profile details".to_string());
                            show_profile_error(&message);
                        }
                        other => {
                            show_profile_error(&other.user_message());
                            state.handle_api_error(other);
                        }
                    }
                }
            }
        });
    });
}

fn show_profile_error(message: &str) {
    if let Some(line) = get_element_by_id("profile-error") {
        set_text_content(&line, message);
    }
}

fn set_profile_submitting(submitting: bool) {
    if let Some(button) = get_element_by_id("profile-submit") {
        if submitting {
            let _ = button.set_attribute("disabled", "");
            set_text_content(&button, "Saving...");
        } else {
            let _ = button.remove_attribute("disabled");
            set_text_content(&button, "Save Changes");
        }
    }
}
