// ============================================================================
// MEDIBOOK - Healthcare appointment booking SPA (pure Rust + WASM)
// ============================================================================
// Strict MVVM:
// - Views: functions that render DOM (no business logic)
// - ViewModels: per-flow logic + validation
// - Services: API/storage I/O only
// - State: Rc<RefCell> containers with subscriber notifications
// - Models: serde structs mirroring the backend wire format
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::{current_location_route, App};
use crate::views::shared::render_toast;

// Global App instance; re-renders go through rerender_app()
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🏥 MediBook starting up");

    let mut app = App::new()?;
    let state = app.state();

    // Route/session changes re-render the whole tree ...
    state.subscribe_to_changes(rerender_app);
    // ... toasts only touch the persistent overlay
    {
        let toast_state = state.clone();
        state.subscribe_to_toasts(move || render_toast(&toast_state));
    }

    app.render()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Global hashchange listener. Registered exactly once here; registering
    // it per render would accumulate handlers.
    if let Some(window) = web_sys::window() {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(route) = current_location_route() {
                if route != state.route() {
                    state.navigate(route);
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        // forget() keeps the closure alive for the lifetime of the page
        closure.forget();
    }

    Ok(())
}

/// Re-render the mounted app (full render).
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(err) = app.render() {
                log::error!("❌ Render failed: {:?}", err);
            }
        } else {
            log::warn!("⚠️ rerender_app called before the app was initialized");
        }
    });
}
