// ============================================================================
// DOCTOR PROFILE - View and update the doctor's practice profile
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, input_value, on_submit, set_inner_html, set_input_value,
    set_text_content, set_textarea_value, textarea_value, ElementBuilder,
};
use crate::models::{Doctor, DoctorUpdate, Role};
use crate::services::error::ApiError;
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::{display_value, escape_html};
use crate::viewmodels::profile_viewmodel::{merge_doctor_identity, validate_doctor_profile};
use crate::viewmodels::ProfileViewModel;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_doctor_profile(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page profile-page").build();
    append_child(&page, &render_sidebar(state, Role::Doctor)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("doctor-profile")?
        .html(&loading_markup("Loading profile..."))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        let user_id = user.id.clone();
        spawn_local(async move {
            let vm = ProfileViewModel::new();
            let result = vm.load_doctor(&user_id).await;
            if state.epoch() != epoch {
                return;
            }
            let Some(content) = get_element_by_id("doctor-profile") else {
                return;
            };
            match result {
                Ok(doctor) => {
                    set_inner_html(&content, &profile_form_markup(&doctor));
                    fill_form(&doctor);
                    if let Some(current) = state.session.user() {
                        state.session.set_user(merge_doctor_identity(&current, &doctor));
                    }
                    wire_profile_form(&state, &user_id);
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::NotFound { .. } => "Doctor profile not found".to_string(),
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

fn profile_form_markup(doctor: &Doctor) -> String {
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
               <label for=\"profile-experience\">Experience (years)</label>\
               <input type=\"number\" id=\"profile-experience\"/>\
             </div>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-specialization\">Specialization *</label>\
             <input type=\"text\" id=\"profile-specialization\"/>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-qualification\">Qualification *</label>\
             <input type=\"text\" id=\"profile-qualification\"/>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-hospital\">Hospital</label>\
             <input type=\"text\" id=\"profile-hospital\"/>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-contact\">Contact Number</label>\
             <input type=\"tel\" id=\"profile-contact\"/>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-address\">Address</label>\
             <textarea id=\"profile-address\" rows=\"2\"></textarea>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-about\">About</label>\
             <textarea id=\"profile-about\" rows=\"4\"></textarea>\
           </div>\
           <div class=\"form-group\">\
             <label for=\"profile-picture\">Profile Picture URL</label>\
             <input type=\"url\" id=\"profile-picture\"/>\
           </div>\
           <p class=\"form-error\" id=\"profile-error\"></p>\
           <button type=\"submit\" id=\"profile-submit\" class=\"btn-primary\">Save Changes</button>\
         </form>",
        first = escape_html(doctor.first_name()),
        last = escape_html(doctor.last_name()),
        email = escape_html(doctor.email()),
    )
}

fn fill_form(doctor: &Doctor) {
    set_input_value("profile-age", &display_value(&doctor.age));
    set_input_value("profile-experience", &display_value(&doctor.experience));
    set_input_value(
        "profile-specialization",
        doctor.specialization.as_deref().unwrap_or(""),
    );
    set_input_value(
        "profile-qualification",
        doctor.qualification.as_deref().unwrap_or(""),
    );
    set_input_value(
        "profile-hospital",
        doctor.hospital_name.as_deref().unwrap_or(""),
    );
    set_input_value(
        "profile-contact",
        doctor.contact_number.as_deref().unwrap_or(""),
    );
    set_textarea_value("profile-address", doctor.address.as_deref().unwrap_or(""));
    set_textarea_value("profile-about", doctor.about.as_deref().unwrap_or(""));
    set_input_value(
        "profile-picture",
        doctor.profile_picture.as_deref().unwrap_or(""),
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
        let specialization = input_value("profile-specialization");
        let qualification = input_value("profile-qualification");

        if let Some(message) = validate_doctor_profile(&age, &specialization, &qualification) {
            show_profile_error(&message);
            return;
        }
        show_profile_error("");

        let update = DoctorUpdate {
            age: age.trim().to_string(),
            specialization: specialization.trim().to_string(),
            experience: input_value("profile-experience").trim().to_string(),
            qualification: qualification.trim().to_string(),
            contact_number: input_value("profile-contact").trim().to_string(),
            address: textarea_value("profile-address").trim().to_string(),
            about: textarea_value("profile-about").trim().to_string(),
            profile_picture: input_value("profile-picture").trim().to_string(),
            hospital_name: input_value("profile-hospital").trim().to_string(),
        };

        let state = state.clone();
        let user_id = user_id.clone();
        let epoch = state.epoch();
        set_profile_submitting(true);
        spawn_local(async move {
            let vm = ProfileViewModel::new();
            let result = vm.save_doctor(&user_id, &update).await;
            if state.epoch() != epoch {
                return;
            }
            set_profile_submitting(false);
            match result {
                Ok(doctor) => {
                    if let Some(current) = state.session.user() {
                        state.session.set_user(merge_doctor_identity(&current, &doctor));
                    }
                    state.set_toast("Profile updated successfully", ToastKind::Success);
                }
                Err(err) => match &err {
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
                },
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
