//! Small, panic-free helpers over web-sys
//!
//! Every page enhancement goes through these to look up nodes, attach
//! listeners, and flip classes.

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::{DomError, Result};

/// Get window object
///
/// # Errors
///
/// Returns `DomError::WindowNotAvailable` outside a browser context.
pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or(DomError::WindowNotAvailable)
}

/// Get document from window
///
/// # Errors
///
/// Returns `DomError::DocumentNotAvailable` if the window has no document.
pub fn get_document(window: &Window) -> Result<Document> {
    window.document().ok_or(DomError::DocumentNotAvailable)
}

/// All elements in the document matching `selector`
///
/// # Errors
///
/// Returns `DomError::InvalidSelector` if the browser rejects the selector.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|e| DomError::invalid_selector(selector, &e))
}

/// All descendants of `root` matching `selector`
///
/// # Errors
///
/// Returns `DomError::InvalidSelector` if the browser rejects the selector.
pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|e| DomError::invalid_selector(selector, &e))
}

/// First element in the document matching `selector`, if any
///
/// # Errors
///
/// Returns `DomError::InvalidSelector` if the browser rejects the selector.
pub fn select_one(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::invalid_selector(selector, &e))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attaches a listener that lives as long as the page
///
/// The closure is leaked on purpose; none of the page's listeners are ever
/// removed.
///
/// # Errors
///
/// Returns `DomError::ListenerFailed` if the browser refuses the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::listener_failed(event, &e))?;

    // Keep closure alive
    closure.forget();

    Ok(())
}

/// Adds or removes `class` so its presence matches `present`
pub fn set_class(element: &Element, class: &str, present: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, present) {
        warn!(class, error = ?e, "failed to update class");
    }
}
