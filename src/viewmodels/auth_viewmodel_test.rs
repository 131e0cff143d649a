use super::*;

fn signup_form() -> SignupForm {
    SignupForm {
        email: "asha@example.com".to_string(),
        password: "secret123".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Iyer".to_string(),
        role: Role::Patient,
    }
}

// =============================================================
// Login form validation
// =============================================================

#[test]
fn complete_login_form_validates() {
    let form = LoginForm {
        email: "asha@example.com".to_string(),
        password: "secret123".to_string(),
    };
    assert!(validate_login(&form).is_ok());
}

#[test]
fn empty_login_fields_report_per_field_errors() {
    let form = LoginForm::default();
    let err = validate_login(&form).unwrap_err();
    assert!(err.field("email").is_some());
    assert!(err.field("password").is_some());
}

#[test]
fn whitespace_email_is_rejected() {
    let form = LoginForm {
        email: "   ".to_string(),
        password: "secret123".to_string(),
    };
    let err = validate_login(&form).unwrap_err();
    assert!(err.field("email").is_some());
    assert!(err.field("password").is_none());
}

// =============================================================
// Signup form validation
// =============================================================

#[test]
fn complete_signup_form_validates() {
    assert!(validate_signup(&signup_form()).is_ok());
}

#[test]
fn missing_names_report_field_errors() {
    let mut form = signup_form();
    form.first_name.clear();
    form.last_name = "  ".to_string();

    let err = validate_signup(&form).unwrap_err();
    assert!(err.field("firstName").is_some());
    assert!(err.field("lastName").is_some());
    assert!(err.field("email").is_none());
}
