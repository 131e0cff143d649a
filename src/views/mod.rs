pub mod admin;
pub mod app;
pub mod auth;
pub mod doctor;
pub mod pages;
pub mod patient;
pub mod shared;

pub use app::render_app;

use crate::utils::escape_html;

/// Markup for a view section that is still fetching.
pub(crate) fn loading_markup(label: &str) -> String {
    format!(
        "<div class=\"loading\"><div class=\"spinner\"></div><p>{}</p></div>",
        escape_html(label)
    )
}

/// Markup for a view section whose fetch failed.
pub(crate) fn error_markup(message: &str) -> String {
    format!(
        "<div class=\"fetch-error\"><p>{}</p></div>",
        escape_html(message)
    )
}
