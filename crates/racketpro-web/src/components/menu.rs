//! Mobile navigation toggle
//!
//! The open/closed state lives in one `Cell<MenuState>`; every class on the
//! panel, the trigger and its bars is derived from it on each change.

use std::cell::Cell;
use std::rc::Rc;

use racketpro_core::{MenuConfig, MenuState};
use tracing::{debug, warn};
use web_sys::{Document, Element};

use crate::dom::{listen, select_all, select_all_in, select_one, set_class};
use crate::error::Result;

struct MobileMenu {
    toggle: Element,
    panel: Element,
    config: MenuConfig,
    state: Cell<MenuState>,
}

impl MobileMenu {
    fn apply(&self, next: MenuState) {
        self.state.set(next);
        let open = next.is_open();

        set_class(&self.panel, &self.config.panel_class, open);
        set_class(&self.toggle, &self.config.toggle_class, open);

        match select_all_in(&self.toggle, &self.config.bar_selector) {
            Ok(bars) => {
                for bar in &bars {
                    set_class(bar, &self.config.bar_class, open);
                }
            }
            Err(err) => warn!(error = %err, "failed to look up menu bars"),
        }
    }
}

/// Wires the hamburger trigger and the navigation links
///
/// Returns `Ok(false)` without wiring anything when the trigger or the panel
/// is missing from the page.
///
/// # Errors
///
/// Returns `DomError` if a selector is invalid or a listener cannot be added.
pub fn init_mobile_menu(document: &Document, config: &MenuConfig) -> Result<bool> {
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        debug!(id = %config.toggle_id, "menu trigger not found, skipping mobile menu");
        return Ok(false);
    };
    let Some(panel) = select_one(document, &config.panel_selector)? else {
        debug!(selector = %config.panel_selector, "navigation panel not found, skipping mobile menu");
        return Ok(false);
    };

    let menu = Rc::new(MobileMenu {
        toggle,
        panel,
        config: config.clone(),
        state: Cell::new(MenuState::default()),
    });

    let on_toggle = Rc::clone(&menu);
    listen(&menu.toggle, "click", move |_| {
        on_toggle.apply(on_toggle.state.get().toggle());
    })?;

    for link in select_all(document, &config.link_selector)? {
        let on_link = Rc::clone(&menu);
        listen(&link, "click", move |_| {
            on_link.apply(on_link.state.get().close());
        })?;
    }

    Ok(true)
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "menu_test.rs"]
mod menu_test;
