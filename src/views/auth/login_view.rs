// ============================================================================
// LOGIN VIEW - Login / signup toggle form
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom::{
    add_class, append_child, get_element_by_id, input_value, on_click, on_submit, remove_class,
    select_value, set_text_content, ElementBuilder,
};
use crate::models::Role;
use crate::services::error::AuthError;
use crate::state::app_state::{AppState, ToastKind};
use crate::viewmodels::auth_viewmodel::{self, LoginForm, SignupForm};

const FIELD_ERROR_IDS: [(&str, &str); 4] = [
    ("firstName", "auth-error-firstName"),
    ("lastName", "auth-error-lastName"),
    ("email", "auth-error-email"),
    ("password", "auth-error-password"),
];

/// Render the combined login/signup screen.
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let signup_mode = Rc::new(RefCell::new(false));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .html(
            "<div class=\"login-logo\"><div class=\"logo-icon\">🏥</div></div>\
             <h1>MediBook</h1>\
             <p id=\"auth-heading\">Welcome Back</p>",
        )
        .build();
    append_child(&container, &header)?;

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .id("auth-form")?
        .html(
            "<div id=\"signup-fields\" class=\"signup-fields hidden\">\
               <div class=\"form-group\">\
                 <label for=\"auth-first-name\">First Name</label>\
                 <input type=\"text\" id=\"auth-first-name\" placeholder=\"Enter your first name\"/>\
                 <span class=\"field-error\" id=\"auth-error-firstName\"></span>\
               </div>\
               <div class=\"form-group\">\
                 <label for=\"auth-last-name\">Last Name</label>\
                 <input type=\"text\" id=\"auth-last-name\" placeholder=\"Enter your last name\"/>\
                 <span class=\"field-error\" id=\"auth-error-lastName\"></span>\
               </div>\
               <div class=\"form-group\">\
                 <label for=\"auth-role\">I am a</label>\
                 <select id=\"auth-role\">\
                   <option value=\"patient\" selected>Patient</option>\
                   <option value=\"doctor\">Doctor</option>\
                 </select>\
               </div>\
             </div>\
             <div class=\"form-group\">\
               <label for=\"auth-email\">Email</label>\
               <input type=\"email\" id=\"auth-email\" placeholder=\"Enter your email\"/>\
               <span class=\"field-error\" id=\"auth-error-email\"></span>\
             </div>\
             <div class=\"form-group\">\
               <label for=\"auth-password\">Password</label>\
               <div class=\"password-row\">\
                 <input type=\"password\" id=\"auth-password\" placeholder=\"Enter your password\"/>\
                 <button type=\"button\" id=\"auth-show-password\" class=\"btn-show-password\">🔒</button>\
               </div>\
               <span class=\"field-error\" id=\"auth-error-password\"></span>\
             </div>\
             <button type=\"submit\" id=\"auth-submit\" class=\"btn-login\">Login</button>\
             <p class=\"form-error\" id=\"auth-error\"></p>\
             <p class=\"login-footer\">\
               <span id=\"auth-toggle-label\">Don't have an account?</span> \
               <button type=\"button\" id=\"auth-toggle\" class=\"btn-toggle-link\">Sign up</button>\
             </p>",
        )
        .build();
    append_child(&container, &form)?;
    append_child(&screen, &container)?;

    // Password visibility toggle. The tree is still detached here, so
    // listeners are looked up through the form, not the document.
    if let Some(toggle) = form.query_selector("#auth-show-password").ok().flatten() {
        on_click(&toggle, move |_| {
            if let Some(input) = get_element_by_id("auth-password")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                let hidden = input.type_() == "password";
                input.set_type(if hidden { "text" } else { "password" });
                if let Some(button) = get_element_by_id("auth-show-password") {
                    set_text_content(&button, if hidden { "🔓" } else { "🔒" });
                }
            }
        });
    }

    // Login <-> signup toggle
    if let Some(toggle) = form.query_selector("#auth-toggle").ok().flatten() {
        let signup_mode = signup_mode.clone();
        on_click(&toggle, move |_| {
            let now_signup = !*signup_mode.borrow();
            *signup_mode.borrow_mut() = now_signup;
            clear_errors();
            apply_mode(now_signup);
        });
    }

    // Submit
    {
        let state = state.clone();
        let signup_mode = signup_mode.clone();
        on_submit(&form, move |_| {
            clear_errors();
            let state = state.clone();
            let is_signup = *signup_mode.borrow();
            let epoch = state.epoch();

            set_submitting(true, is_signup);
            spawn_local(async move {
                let result = if is_signup {
                    let form = SignupForm {
                        email: input_value("auth-email"),
                        password: input_value("auth-password"),
                        first_name: input_value("auth-first-name"),
                        last_name: input_value("auth-last-name"),
                        role: parse_role(&select_value("auth-role")),
                    };
                    auth_viewmodel::submit_signup(&state, &form).await
                } else {
                    let form = LoginForm {
                        email: input_value("auth-email"),
                        password: input_value("auth-password"),
                    };
                    auth_viewmodel::submit_login(&state, &form).await
                };

                if state.epoch() != epoch {
                    return;
                }

                match result {
                    Ok(destination) => {
                        state.set_toast(
                            if is_signup {
                                "Account created, welcome!"
                            } else {
                                "Logged in successfully"
                            },
                            ToastKind::Success,
                        );
                        state.navigate(destination);
                    }
                    Err(err) => {
                        show_auth_error(&err);
                        set_submitting(false, is_signup);
                    }
                }
            });
        });
    }

    Ok(screen)
}

fn parse_role(value: &str) -> Role {
    match value {
        "doctor" => Role::Doctor,
        _ => Role::Patient,
    }
}

/// Flip the static parts of the form between login and signup.
fn apply_mode(signup: bool) {
    if let Some(fields) = get_element_by_id("signup-fields") {
        if signup {
            let _ = remove_class(&fields, "hidden");
        } else {
            let _ = add_class(&fields, "hidden");
        }
    }
    if let Some(heading) = get_element_by_id("auth-heading") {
        set_text_content(&heading, if signup { "Create Account" } else { "Welcome Back" });
    }
    if let Some(submit) = get_element_by_id("auth-submit") {
        set_text_content(&submit, if signup { "Signup" } else { "Login" });
    }
    if let Some(label) = get_element_by_id("auth-toggle-label") {
        set_text_content(
            &label,
            if signup {
                "Already have an account?"
            } else {
                "Don't have an account?"
            },
        );
    }
    if let Some(toggle) = get_element_by_id("auth-toggle") {
        set_text_content(&toggle, if signup { "Login" } else { "Sign up" });
    }
}

fn set_submitting(submitting: bool, signup: bool) {
    if let Some(button) = get_element_by_id("auth-submit") {
        if submitting {
            let _ = button.set_attribute("disabled", "");
        } else {
            let _ = button.remove_attribute("disabled");
        }
        if let Some(html) = button.dyn_ref::<HtmlElement>() {
            html.set_inner_text(match (submitting, signup) {
                (true, _) => "Please wait...",
                (false, true) => "Signup",
                (false, false) => "Login",
            });
        }
    }
}

fn clear_errors() {
    if let Some(general) = get_element_by_id("auth-error") {
        set_text_content(&general, "");
    }
    for (_, id) in FIELD_ERROR_IDS {
        if let Some(span) = get_element_by_id(id) {
            set_text_content(&span, "");
        }
    }
}

/// Field errors go inline under their input; everything else goes to the
/// general error line.
fn show_auth_error(err: &AuthError) {
    match err {
        AuthError::Fields(_) => {
            for (field, id) in FIELD_ERROR_IDS {
                if let (Some(message), Some(span)) = (err.field(field), get_element_by_id(id)) {
                    set_text_content(&span, message);
                }
            }
        }
        AuthError::Rejected(message) => {
            if let Some(general) = get_element_by_id("auth-error") {
                set_text_content(&general, message);
            }
        }
    }
}
