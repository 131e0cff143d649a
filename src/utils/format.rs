// ============================================================================
// FORMAT HELPERS - Display formatting for wire values
// ============================================================================

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Escape text for interpolation into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a backend date (RFC 3339 or bare `YYYY-MM-DD`) as e.g. "12 Mar 2026".
/// Falls back to the raw string when it does not parse.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// Render a loosely-typed JSON field (string or number) for display.
/// The backend is not consistent about numeric fields like age/experience.
pub fn display_value(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
