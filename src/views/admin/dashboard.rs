// ============================================================================
// ADMIN DASHBOARD - Platform overview for administrators
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::Role;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::escape_html;
use crate::views::shared::render_sidebar;
use crate::views::{error_markup, loading_markup};

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page dashboard-page").build();
    append_child(&page, &render_sidebar(state, Role::Admin)?)?;

    let user = match state.session.user() {
        Some(user) => user,
        None => return Ok(page),
    };

    let content = ElementBuilder::new("div")?
        .class("page-content")
        .id("admin-dashboard")?
        .html(&format!(
            "<header class=\"dashboard-header\">\
               <h1>Welcome, {}</h1>\
               <p>Platform overview.</p>\
             </header>\
             <div class=\"dashboard-grid\">\
               <div class=\"card\" id=\"doctors-card\">\
                 <h2>Registered Doctors</h2>{}\
               </div>\
             </div>",
            escape_html(&user.full_name()),
            loading_markup("Loading doctors..."),
        ))
        .build();
    append_child(&page, &content)?;

    {
        let state = state.clone();
        let epoch = state.epoch();
        spawn_local(async move {
            let api = ApiClient::new();
            let result = api.all_doctors().await;
            if state.epoch() != epoch {
                return;
            }
            let Some(card) = get_element_by_id("doctors-card") else {
                return;
            };
            match result {
                Ok(doctors) => {
                    set_inner_html(
                        &card,
                        &format!(
                            "<h2>Registered Doctors</h2><p class=\"stat\">{}</p>",
                            doctors.len()
                        ),
                    );
                }
                Err(err) => {
                    set_inner_html(
                        &card,
                        &format!(
                            "<h2>Registered Doctors</h2>{}",
                            error_markup(&err.user_message())
                        ),
                    );
                    state.handle_api_error(&err);
                }
            }
        });
    }

    Ok(page)
}
