//! Lead capture form binding
//!
//! [`DomLeadForm`] is the DOM implementation of the core `LeadFormView`. The
//! submit listener cancels the native submission and hands the rest to a
//! `LeadFormController` on the local executor.

use std::rc::Rc;

use chrono::Utc;
use futures::FutureExt;
use racketpro_core::{
    FieldIds, FormConfig, LeadFields, LeadFormController, LeadFormView, SimulatedSubmitter,
    StatusConfig, StatusKind,
};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::components::status::StatusMessenger;
use crate::dom::listen;
use crate::error::{DomError, Result};

/// The lead form as found in the page
pub struct DomLeadForm {
    document: Document,
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    fields: FieldIds,
    status: Rc<StatusMessenger>,
}

impl DomLeadForm {
    /// Looks up the form and its submit control
    ///
    /// Returns `Ok(None)` when the page has no lead form.
    ///
    /// # Errors
    ///
    /// Returns `DomError` if the form id names a non-form element or the
    /// submit selector is invalid.
    pub fn bind(
        document: &Document,
        config: &FormConfig,
        status: &StatusConfig,
    ) -> Result<Option<Self>> {
        let Some(element) = document.get_element_by_id(&config.form_id) else {
            return Ok(None);
        };
        let form = element
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| DomError::CastFailed {
                id: config.form_id.clone(),
                expected: "form",
            })?;

        let submit = form
            .query_selector(&config.submit_selector)
            .map_err(|e| DomError::invalid_selector(&config.submit_selector, &e))?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        if submit.is_none() {
            debug!(selector = %config.submit_selector, "lead form has no submit button");
        }

        let messenger = StatusMessenger::new(document.clone(), form.clone(), status);

        Ok(Some(Self {
            document: document.clone(),
            form,
            submit,
            fields: config.fields.clone(),
            status: messenger,
        }))
    }

    #[must_use]
    pub const fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn field_value(&self, id: &str) -> String {
        self.document
            .get_element_by_id(id)
            .map(|element| control_value(&element))
            .unwrap_or_default()
    }
}

/// Current value of an input, select, or textarea; empty for anything else
fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

impl LeadFormView for DomLeadForm {
    fn fields(&self) -> LeadFields {
        LeadFields {
            name: self.field_value(&self.fields.name),
            email: self.field_value(&self.fields.email),
            phone: self.field_value(&self.fields.phone),
            interested_sport: self.field_value(&self.fields.sport),
            message: self.field_value(&self.fields.message),
        }
    }

    fn submit_label(&self) -> String {
        self.submit
            .as_ref()
            .map(|button| button.inner_text())
            .unwrap_or_default()
    }

    fn set_submit_control(&self, label: &str, disabled: bool) {
        if let Some(button) = &self.submit {
            button.set_inner_text(label);
            button.set_disabled(disabled);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_status(&self, message: &str, kind: StatusKind) {
        if let Err(err) = self.status.show(message, kind) {
            error!(error = %err, "failed to show form status");
        }
    }
}

/// Wires the lead form to a simulated backend
///
/// Returns `Ok(false)` when the page has no lead form.
///
/// # Errors
///
/// Returns `DomError` if the form cannot be bound or the submit listener
/// cannot be added.
pub fn init_lead_form(
    document: &Document,
    config: &FormConfig,
    status: &StatusConfig,
) -> Result<bool> {
    let Some(view) = DomLeadForm::bind(document, config, status)? else {
        debug!(id = %config.form_id, "lead form not found, skipping");
        return Ok(false);
    };

    let form = view.form().clone();
    let submitter = SimulatedSubmitter::new(config.submit_delay(), |delay| {
        gloo_timers::future::sleep(delay).boxed_local()
    });
    let controller = Rc::new(LeadFormController::new(view, submitter, config.clone()));

    listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let outcome = controller.submit(Utc::now()).await;
            debug!(?outcome, "lead form submission finished");
        });
    })?;

    Ok(true)
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "lead_form_test.rs"]
mod lead_form_test;
