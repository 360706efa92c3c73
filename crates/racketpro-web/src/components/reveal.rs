//! Scroll reveal via `IntersectionObserver`

use js_sys::Array;
use racketpro_core::{RevealAction, RevealConfig, reveal_action};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{select_all, set_class};
use crate::error::Result;

/// Type alias for the observer callback
type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes reveal targets and marks each visible the first time it enters view
///
/// Falls back to revealing every target at once when the browser cannot build
/// an observer. Returns the number of targets found.
///
/// # Errors
///
/// Returns `DomError` if the target selector is invalid.
pub fn init_reveal(document: &Document, config: &RevealConfig) -> Result<usize> {
    let targets = select_all(document, &config.selector)?;
    if targets.is_empty() {
        debug!(selector = %config.selector, "no reveal targets");
        return Ok(0);
    }

    let visible_class = config.visible_class.clone();
    let callback: ObserverClosure = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            handle_entry(&entry, &observer, &visible_class);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.clamped_threshold()));
    options.set_root_margin(&config.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            // Keep closure alive
            callback.forget();
        }
        Err(e) => {
            warn!(error = ?e, "intersection observer unavailable, revealing all targets");
            reveal_all(&targets, &config.visible_class);
        }
    }

    Ok(targets.len())
}

fn handle_entry(entry: &IntersectionObserverEntry, observer: &IntersectionObserver, class: &str) {
    let target = entry.target();
    let already_revealed = target.class_list().contains(class);

    match reveal_action(entry.is_intersecting(), already_revealed) {
        RevealAction::Reveal => {
            set_class(&target, class, true);
            observer.unobserve(&target);
        }
        RevealAction::Release => observer.unobserve(&target),
        RevealAction::Wait => {}
    }
}

fn reveal_all(targets: &[Element], class: &str) {
    for target in targets {
        set_class(target, class, true);
    }
}
