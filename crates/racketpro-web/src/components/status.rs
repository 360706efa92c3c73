//! Status line rendering for the lead form
//!
//! [`StatusMessenger`] renders what the core `StatusBoard` decides and owns the
//! auto-clear timer. Showing a new message cancels the previous timer, and the
//! board's generation check keeps a stale timer from clearing a newer message.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use racketpro_core::{StatusBoard, StatusConfig, StatusKind, StatusMessage};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement};

use crate::error::{DomError, Result};

/// Status line attached to a form
pub struct StatusMessenger {
    document: Document,
    form: HtmlFormElement,
    element_id: String,
    board: RefCell<StatusBoard>,
    pending_clear: RefCell<Option<Timeout>>,
}

impl StatusMessenger {
    #[must_use]
    pub fn new(document: Document, form: HtmlFormElement, config: &StatusConfig) -> Rc<Self> {
        Rc::new(Self {
            document,
            form,
            element_id: config.element_id.clone(),
            board: RefCell::new(StatusBoard::new(config.display_for())),
            pending_clear: RefCell::new(None),
        })
    }

    /// Shows `text` and schedules it to clear after the configured duration
    ///
    /// # Errors
    ///
    /// Returns `DomError` if the status element cannot be found or created.
    pub fn show(self: &Rc<Self>, text: &str, kind: StatusKind) -> Result<()> {
        let element = self.ensure_element()?;
        let message = self.board.borrow_mut().show(text, kind);
        render(&element, Some(&message));

        let messenger = Rc::downgrade(self);
        let generation = message.generation;
        let millis = u32::try_from(message.display_for.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            if let Some(messenger) = messenger.upgrade() {
                messenger.expire(generation);
            }
        });

        // Clear existing timeout if any
        let previous = self.pending_clear.borrow_mut().replace(timeout);
        if let Some(previous) = previous {
            previous.cancel();
        }

        Ok(())
    }

    /// Message currently on display
    #[must_use]
    pub fn current(&self) -> Option<StatusMessage> {
        self.board.borrow().current().cloned()
    }

    fn expire(&self, generation: u64) {
        if !self.board.borrow_mut().expire(generation) {
            return;
        }
        let Some(element) = self.document.get_element_by_id(&self.element_id) else {
            debug!(id = %self.element_id, "status element gone, nothing to clear");
            return;
        };
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => render(&element, None),
            Err(_) => warn!(id = %self.element_id, "status element is not an HTML element"),
        }
    }

    /// Finds the status element, creating it inside the form if absent
    fn ensure_element(&self) -> Result<HtmlElement> {
        if let Some(existing) = self.document.get_element_by_id(&self.element_id) {
            return existing
                .dyn_into::<HtmlElement>()
                .map_err(|_| DomError::CastFailed {
                    id: self.element_id.clone(),
                    expected: "HTML element",
                });
        }

        let created = self
            .document
            .create_element("div")
            .map_err(|e| DomError::AppendFailed {
                id: self.element_id.clone(),
                reason: format!("{e:?}"),
            })?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::CastFailed {
                id: self.element_id.clone(),
                expected: "HTML element",
            })?;
        created.set_id(&self.element_id);

        self.form
            .append_child(&created)
            .map_err(|e| DomError::AppendFailed {
                id: self.element_id.clone(),
                reason: format!("{e:?}"),
            })?;

        Ok(created)
    }
}

fn render(element: &HtmlElement, message: Option<&StatusMessage>) {
    match message {
        Some(message) => {
            element.set_class_name(message.kind.css_class());
            element.set_inner_text(&message.text);
        }
        None => {
            element.set_class_name("");
            element.set_inner_text("");
        }
    }
}
