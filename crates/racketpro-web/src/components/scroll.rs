//! Smooth scrolling for in-page anchors

use racketpro_core::{ScrollConfig, fragment_id, scroll_destination};
use tracing::debug;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{listen, select_all};
use crate::error::Result;

/// Intercepts clicks on fragment anchors and scrolls smoothly instead
///
/// Default navigation is cancelled for every matched anchor. Returns the
/// number of anchors wired.
///
/// # Errors
///
/// Returns `DomError` if the anchor selector is invalid or a listener cannot
/// be added.
pub fn init_smooth_scroll(window: &Window, document: &Document, config: &ScrollConfig) -> Result<usize> {
    let anchors = select_all(document, &config.anchor_selector)?;

    for anchor in &anchors {
        let window = window.clone();
        let document = document.clone();
        let source = anchor.clone();
        let header_offset = config.header_offset;

        listen(anchor, "click", move |event| {
            event.prevent_default();
            let href = source.get_attribute("href").unwrap_or_default();
            scroll_to_fragment(&window, &document, &href, header_offset);
        })?;
    }

    Ok(anchors.len())
}

/// Scrolls so the fragment's target sits just below the fixed header
///
/// Returns `false`, without scrolling, when the href is not a fragment or no
/// element has that id.
pub fn scroll_to_fragment(window: &Window, document: &Document, href: &str, header_offset: f64) -> bool {
    let Some(id) = fragment_id(href) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        debug!(id, "scroll target not found");
        return false;
    };

    let page_offset = window.scroll_y().unwrap_or(0.0);
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        page_offset,
        header_offset,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    true
}
