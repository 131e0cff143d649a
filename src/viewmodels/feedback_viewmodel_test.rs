use super::*;

// =============================================================
// Feedback validation
// =============================================================

#[test]
fn rating_with_comments_validates() {
    assert!(validate_feedback(5, "Great doctor, very attentive").is_ok());
    assert!(validate_feedback(1, "Waited two hours").is_ok());
}

#[test]
fn missing_rating_or_comments_is_rejected() {
    assert_eq!(
        validate_feedback(0, "Great doctor").unwrap_err(),
        "Please provide a rating and comments"
    );
    assert_eq!(
        validate_feedback(4, "   ").unwrap_err(),
        "Please provide a rating and comments"
    );
}

#[test]
fn rating_above_five_is_rejected() {
    assert_eq!(
        validate_feedback(6, "ok").unwrap_err(),
        "Rating must be between 1 and 5"
    );
}
