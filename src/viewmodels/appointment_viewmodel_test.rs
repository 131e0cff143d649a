use super::*;
use chrono::NaiveDate;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

// =============================================================
// Time format
// =============================================================

#[test]
fn well_formed_times_pass() {
    for time in ["00:00", "09:05", "13:45", "23:59"] {
        assert!(is_valid_time_hhmm(time), "{} should be valid", time);
    }
}

#[test]
fn malformed_times_fail() {
    for time in ["24:00", "9:05", "12:60", "12:5", "noon", "", "12:345"] {
        assert!(!is_valid_time_hhmm(time), "{} should be invalid", time);
    }
}

// =============================================================
// Booking validation
// =============================================================

#[test]
fn valid_future_booking_passes() {
    assert!(validate_booking("2026-03-11", "10:00", "Persistent headaches", now()).is_ok());
}

#[test]
fn missing_fields_are_reported_first() {
    let err = validate_booking("", "10:00", "Checkup", now()).unwrap_err();
    assert_eq!(err, "Please fill in all required fields");

    let err = validate_booking("2026-03-11", "10:00", "   ", now()).unwrap_err();
    assert_eq!(err, "Please fill in all required fields");
}

#[test]
fn bad_time_is_rejected() {
    let err = validate_booking("2026-03-11", "25:00", "Checkup", now()).unwrap_err();
    assert_eq!(err, "Please select a valid time");
}

#[test]
fn unparseable_date_is_rejected() {
    let err = validate_booking("11/03/2026", "10:00", "Checkup", now()).unwrap_err();
    assert_eq!(err, "Please select a valid date");
}

#[test]
fn past_and_same_day_dates_are_rejected() {
    for date in ["2026-03-10", "2026-03-09", "2020-01-01"] {
        let err = validate_booking(date, "10:00", "Checkup", now()).unwrap_err();
        assert_eq!(err, "Appointment date must be in the future");
    }
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn booking_date_payload_is_midnight_utc() {
    assert_eq!(
        booking_date_payload(" 2026-03-11 "),
        "2026-03-11T00:00:00.000Z"
    );
}
