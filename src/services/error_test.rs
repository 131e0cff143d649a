use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn unauthorized_statuses_classify_as_unauthorized() {
    for status in [401, 403] {
        let err = classify_error(status, "Forbidden", r#"{"message":"Please log in"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Please log in");
    }
}

#[test]
fn not_found_carries_the_backend_message() {
    let err = classify_error(404, "Not Found", r#"{"message":"Doctor not found"}"#);
    assert_eq!(
        err,
        ApiError::NotFound {
            message: "Doctor not found".to_string()
        }
    );
}

#[test]
fn errors_map_classifies_as_field_validation() {
    let err = classify_error(
        400,
        "Bad Request",
        r#"{"errors":{"email":"Invalid email address"}}"#,
    );
    match err {
        ApiError::Validation(fields) => {
            assert_eq!(fields.get("email").map(String::as_str), Some("Invalid email address"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn message_body_classifies_as_status() {
    let err = classify_error(500, "Internal Server Error", r#"{"message":"boom"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "boom".to_string()
        }
    );
}

#[test]
fn error_key_is_accepted_as_message() {
    let err = classify_error(500, "Internal Server Error", r#"{"error":"boom"}"#);
    assert_eq!(err.user_message(), "boom");
}

#[test]
fn unparseable_body_falls_back_to_status_text() {
    let err = classify_error(502, "Bad Gateway", "<html>upstream died</html>");
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            message: "HTTP 502: Bad Gateway".to_string()
        }
    );
}

#[test]
fn empty_errors_map_is_not_validation() {
    let err = classify_error(400, "Bad Request", r#"{"errors":{}}"#);
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
}

// =============================================================
// AuthError conversion
// =============================================================

#[test]
fn validation_maps_convert_to_field_errors() {
    let api_err = classify_error(400, "Bad Request", r#"{"errors":{"password":"Too short"}}"#);
    let auth_err = AuthError::from(api_err);
    assert_eq!(auth_err.field("password"), Some("Too short"));
    assert_eq!(auth_err.field("email"), None);
}

#[test]
fn rejected_credentials_convert_to_a_user_facing_message() {
    let api_err = classify_error(401, "Unauthorized", r#"{"message":"Invalid credentials"}"#);
    let auth_err = AuthError::from(api_err);
    assert_eq!(auth_err, AuthError::Rejected("Invalid credentials".to_string()));
    assert_eq!(auth_err.message(), "Invalid credentials");
}
