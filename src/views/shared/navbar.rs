// ============================================================================
// NAVBAR - Public page header
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::app_state::AppState;

/// Render the public navigation bar. Links are hash anchors, picked up by
/// the global hashchange listener.
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let active = state.route();
    let link = |route: Route, label: &str| -> String {
        let class = if active == route { "nav-link active" } else { "nav-link" };
        format!(
            "<a class=\"{}\" href=\"#{}\">{}</a>",
            class,
            route.path(),
            label
        )
    };

    let markup = format!(
        "<div class=\"navbar-inner\">\
           <h1 class=\"brand\">MediBook</h1>\
           <nav class=\"nav-links\">{}{}{}<a class=\"btn-login-link\" href=\"#{}\">Login</a></nav>\
         </div>",
        link(Route::Home, "Home"),
        link(Route::About, "About Us"),
        link(Route::Contact, "Contact"),
        Route::Login.path(),
    );

    Ok(ElementBuilder::new("header")?
        .class("navbar")
        .html(&markup)
        .build())
}
