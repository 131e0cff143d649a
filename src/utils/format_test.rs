use super::*;
use serde_json::json;

#[test]
fn escapes_html_metacharacters() {
    assert_eq!(
        escape_html("<img src=x onerror=\"alert('x')\"> & more"),
        "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt; &amp; more"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn formats_rfc3339_and_bare_dates() {
    assert_eq!(format_date("2026-03-11T00:00:00.000Z"), "11 Mar 2026");
    assert_eq!(format_date("2026-03-11"), "11 Mar 2026");
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_date("tomorrow"), "tomorrow");
}

#[test]
fn displays_strings_and_numbers_alike() {
    assert_eq!(display_value(&Some(json!("34"))), "34");
    assert_eq!(display_value(&Some(json!(34))), "34");
    assert_eq!(display_value(&Some(json!(null))), "");
    assert_eq!(display_value(&None), "");
}
