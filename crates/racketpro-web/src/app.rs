//! Page start-up
//!
//! Each enhancement initializes independently; one failing is logged and
//! does not stop the others.

use std::fmt::Display;

use racketpro_core::SiteConfig;
use tracing::{error, info};
use web_sys::{Document, Window};

use crate::components::{init_lead_form, init_mobile_menu, init_reveal, init_smooth_scroll};
use crate::config::{CONFIG_ELEMENT_ID, load_site_config};
use crate::dom::{get_document, get_window, listen};
use crate::error::Result;

/// What `init_site` managed to wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub menu: bool,
    pub anchors: usize,
    pub lead_form: bool,
    pub reveal_targets: usize,
}

/// Wires every enhancement the page has markup for
pub fn init_site(window: &Window, document: &Document, config: &SiteConfig) -> InitReport {
    let report = InitReport {
        menu: settle("mobile menu", init_mobile_menu(document, &config.menu)),
        anchors: settle(
            "smooth scroll",
            init_smooth_scroll(window, document, &config.scroll),
        ),
        lead_form: settle(
            "lead form",
            init_lead_form(document, &config.form, &config.status),
        ),
        reveal_targets: settle("scroll reveal", init_reveal(document, &config.reveal)),
    };

    info!(?report, "page enhancements ready");
    report
}

fn settle<T: Default, E: Display>(component: &str, result: std::result::Result<T, E>) -> T {
    result.unwrap_or_else(|err| {
        error!(component, error = %err, "failed to initialize");
        T::default()
    })
}

/// Runs `init_site` once the document has been parsed
///
/// # Errors
///
/// Returns `DomError` outside a browser or if the ready listener cannot be
/// added.
pub fn start() -> Result<()> {
    let window = get_window()?;
    let document = get_document(&window)?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        listen(&target, "DOMContentLoaded", move |_| {
            run(&window, &document);
        })?;
    } else {
        run(&window, &document);
    }

    Ok(())
}

fn run(window: &Window, document: &Document) {
    let config = load_site_config(document, CONFIG_ELEMENT_ID);
    init_site(window, document, &config);
}
