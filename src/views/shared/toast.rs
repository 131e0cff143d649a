// ============================================================================
// TOAST - Transient error/success banner
// ============================================================================
// Rendered imperatively into the persistent #toast-root overlay, outside
// the re-rendered view tree, so showing a toast never re-runs view fetches.
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{get_element_by_id, set_inner_html};
use crate::state::app_state::{AppState, ToastKind};
use crate::utils::{escape_html, TOAST_DURATION_MS};

/// Sync the #toast-root overlay with the current toast state and schedule
/// the auto-dismiss for a freshly shown toast.
pub fn render_toast(state: &AppState) {
    let Some(root) = get_element_by_id("toast-root") else {
        return;
    };

    match state.toast() {
        Some(toast) => {
            let class = match toast.kind {
                ToastKind::Error => "toast toast-error",
                ToastKind::Success => "toast toast-success",
            };
            set_inner_html(
                &root,
                &format!(
                    "<div class=\"{}\">{}</div>",
                    class,
                    escape_html(&toast.message)
                ),
            );

            let state = state.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                state.clear_toast();
            })
            .forget();
        }
        None => set_inner_html(&root, ""),
    }
}
