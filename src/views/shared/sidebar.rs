// ============================================================================
// SIDEBAR - Dashboard navigation for logged-in users
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Role;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::viewmodels::auth_viewmodel;

fn links_for(role: Role) -> Vec<(Route, &'static str)> {
    match role {
        Role::Patient => vec![
            (Route::PatientDashboard, "Dashboard"),
            (Route::PatientDoctors, "Find Doctors"),
            (Route::PatientAppointments, "Appointments"),
            (Route::PatientProfile, "Profile"),
        ],
        Role::Doctor => vec![
            (Route::DoctorDashboard, "Dashboard"),
            (Route::DoctorAppointments, "Appointments"),
            (Route::DoctorFeedback, "Feedback"),
            (Route::DoctorProfile, "Profile"),
        ],
        Role::Admin => vec![(Route::AdminDashboard, "Dashboard")],
    }
}

fn title_for(role: Role) -> &'static str {
    match role {
        Role::Patient => "Patient Dashboard",
        Role::Doctor => "Doctor Dashboard",
        Role::Admin => "Admin Dashboard",
    }
}

/// Render the sidebar for the given role. The logout entry goes through the
/// auth gateway (best-effort backend call, unconditional session clear).
pub fn render_sidebar(state: &AppState, role: Role) -> Result<Element, JsValue> {
    let active = state.route();

    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();

    let title = ElementBuilder::new("h1")?
        .class("sidebar-title")
        .text(title_for(role))
        .build();
    append_child(&sidebar, &title)?;

    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    for (route, label) in links_for(role) {
        let class = if active == route {
            "sidebar-link active"
        } else {
            "sidebar-link"
        };
        let anchor = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &format!("#{}", route.path()))?
            .text(label)
            .build();
        append_child(&nav, &anchor)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("sidebar-link logout")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            let state = state.clone();
            spawn_local(async move {
                auth_viewmodel::logout(&state).await;
            });
        });
    }
    append_child(&nav, &logout)?;
    append_child(&sidebar, &nav)?;

    Ok(sidebar)
}
