// ============================================================================
// APP - Application shell
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html, ElementBuilder};
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::views::render_app;
use crate::views::shared::render_toast;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Mount on #app. The session is rehydrated from storage here, before
    /// the first render, so the guard never sees a spuriously empty session
    /// on reload.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.session.hydrate();

        // Initial route from the current hash (deep links, reloads)
        if let Some(route) = current_location_route() {
            state.replace_route(route);
        }

        Ok(Self { state, root })
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Full render: rebuild the view tree for the current route, then sync
    /// the location hash and the toast overlay.
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");

        let shell = render_app(&self.state)?;
        self.root.append_child(&shell)?;

        // Persistent toast overlay, outside the per-route tree
        let toast_root = ElementBuilder::new("div")?
            .class("toast-overlay")
            .id("toast-root")?
            .build();
        self.root.append_child(&toast_root)?;
        render_toast(&self.state);

        self.sync_location();
        Ok(())
    }

    /// Keep location.hash in step with the rendered route (guard redirects
    /// change the route during the render pass).
    fn sync_location(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let wanted = format!("#{}", self.state.route().path());
        let current = location.hash().unwrap_or_default();
        if current != wanted {
            let _ = location.set_hash(&wanted);
        }
    }
}

/// Route encoded in the current location hash, if any.
pub fn current_location_route() -> Option<Route> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.is_empty() {
        return None;
    }
    Some(Route::parse(&hash))
}
