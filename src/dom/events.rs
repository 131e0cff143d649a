// ============================================================================
// EVENT HANDLING - Listener helpers
// ============================================================================
// MEMORY MANAGEMENT:
// - Listeners on DOM elements: when the element is destroyed (e.g. via
//   set_inner_html("") on an ancestor) the browser drops the listeners with
//   it, so closure.forget() is safe for element-local listeners.
// - Listeners on window/document must only be registered ONCE at startup,
//   otherwise they accumulate across re-renders (see lib.rs).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

use crate::dom::get_element_by_id;

/// Attach a click listener
pub fn on_click<F>(element: &Element, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a submit listener. prevent_default() runs before the handler so
/// the browser never performs a form navigation.
pub fn on_submit<F>(form: &Element, mut handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler(event);
    }) as Box<dyn FnMut(Event)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current value of an <input> by id ("" when missing)
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current value of a <select> by id
pub fn select_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Current value of a <textarea> by id
pub fn textarea_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Set the value of an <input> by id
pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

/// Set the value of a <textarea> by id
pub fn set_textarea_value(id: &str, value: &str) {
    if let Some(area) =
        get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    {
        area.set_value(value);
    }
}

/// Set the value of a <select> by id
pub fn set_select_value(id: &str, value: &str) {
    if let Some(select) =
        get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}
