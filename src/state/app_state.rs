// ============================================================================
// APP STATE - Global application state + subscriber notifications
// ============================================================================

#[cfg(test)]
#[path = "app_state_test.rs"]
mod app_state_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::router::Route;
use crate::services::error::ApiError;
use crate::services::storage::{LocalStorage, StorageBackend};
use crate::state::session_state::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    route: Rc<RefCell<Route>>,
    toast: Rc<RefCell<Option<Toast>>>,
    // Bumped on every navigation. In-flight fetches capture the value at
    // spawn time and drop their result if the user has navigated away,
    // so a stale response never writes into a view that is gone.
    epoch: Rc<Cell<u64>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
    // Toasts deliberately get their own channel: a toast must never trigger
    // the full re-render path, or every failed fetch would refetch forever.
    toast_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(LocalStorage::new())
    }

    pub fn with_storage(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            session: SessionState::new(storage),
            route: Rc::new(RefCell::new(Route::Home)),
            toast: Rc::new(RefCell::new(None)),
            epoch: Rc::new(Cell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
            toast_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Move to a new route and re-render. Invalidates in-flight fetches.
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 Navigating to {}", route.path());
        *self.route.borrow_mut() = route;
        self.epoch.set(self.epoch.get() + 1);
        self.notify_subscribers();
    }

    /// Swap the route without notifying. Used by the render pass itself
    /// (guard redirects) where a notify would recurse into another render.
    pub fn replace_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
        self.epoch.set(self.epoch.get() + 1);
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    pub fn toast(&self) -> Option<Toast> {
        self.toast.borrow().clone()
    }

    /// Show a transient toast. The toast view schedules the auto-dismiss.
    pub fn set_toast(&self, message: &str, kind: ToastKind) {
        *self.toast.borrow_mut() = Some(Toast {
            message: message.to_string(),
            kind,
        });
        self.notify_toast_subscribers();
    }

    pub fn clear_toast(&self) {
        let had_toast = self.toast.borrow_mut().take().is_some();
        if had_toast {
            self.notify_toast_subscribers();
        }
    }

    /// The app-wide error rule every feature view routes through:
    /// 401/403 clears the session and returns to login; anything else
    /// surfaces as a transient toast. Field-validation errors are handled
    /// inline by the form that triggered them, before reaching here.
    pub fn handle_api_error(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::warn!("🔒 Authentication failure, clearing session");
            self.session.clear_user();
            self.navigate(Route::Login);
        } else {
            self.set_toast(&err.user_message(), ToastKind::Error);
        }
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn subscribe_to_toasts<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.toast_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_toast_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.toast_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
