//! Lead form submission workflow
//!
//! [`LeadFormController`] drives a [`LeadFormView`] through one submission:
//! validate, lock the submit control, hand the lead to a [`LeadSubmitter`],
//! report the result, and unlock the control again. The view is a trait so the
//! same workflow runs against the DOM and against in-memory fakes.

use std::cell::Cell;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{LeadError, SubmitError};
use crate::lead::{Lead, LeadFields};
use crate::status::StatusKind;
use crate::submitter::{DEFAULT_SUBMIT_DELAY_MS, LeadSubmitter};

/// The part of the page the form controller reads from and writes to
pub trait LeadFormView {
    /// Current field values
    fn fields(&self) -> LeadFields;

    /// Current label of the submit control (empty when there is none)
    fn submit_label(&self) -> String;

    /// Sets the submit control's label and disabled flag
    fn set_submit_control(&self, label: &str, disabled: bool);

    /// Clears every field back to its initial value
    fn reset(&self);

    /// Shows a status message next to the form
    fn show_status(&self, message: &str, kind: StatusKind);
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the lead
    Accepted,
    /// Validation failed before anything was sent
    Rejected(LeadError),
    /// The backend step failed
    Failed(SubmitError),
    /// Another submission was still in flight
    Ignored,
}

/// Element IDs of the lead form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sport: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            sport: "sport".to_string(),
            message: "message".to_string(),
        }
    }
}

/// Lead form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub fields: FieldIds,
    /// Selector for the submit control, relative to the form
    pub submit_selector: String,
    /// Label shown on the submit control while a submission is pending
    pub pending_label: String,
    pub validation_message: String,
    pub success_message: String,
    pub failure_message: String,
    /// Latency of the simulated backend
    pub submit_delay_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "lead-form".to_string(),
            fields: FieldIds::default(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            pending_label: "Sending...".to_string(),
            validation_message: "All required fields must be filled.".to_string(),
            success_message: "Success! We will contact you shortly.".to_string(),
            failure_message: "Something went wrong. Please try again.".to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.submit_delay_ms))
    }
}

/// Runs lead form submissions against a view and a backend
#[derive(Debug)]
pub struct LeadFormController<V, S> {
    view: V,
    submitter: S,
    config: FormConfig,
    in_flight: Cell<bool>,
}

impl<V, S> LeadFormController<V, S>
where
    V: LeadFormView,
    S: LeadSubmitter,
{
    pub const fn new(view: V, submitter: S, config: FormConfig) -> Self {
        Self {
            view,
            submitter,
            config,
            in_flight: Cell::new(false),
        }
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether a submission is waiting on the backend
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }

    /// Handles one submit of the form
    ///
    /// Validation failures are reported without touching the submit control.
    /// Once the lead is valid the control is disabled until the backend step
    /// finishes, and restored to its original label on success, failure, or
    /// when this future is dropped early. Fields are only reset after a
    /// successful submission.
    pub async fn submit(&self, created_at: DateTime<Utc>) -> SubmitOutcome {
        if self.in_flight.get() {
            debug!("submission already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let lead = match Lead::from_fields(self.view.fields(), created_at) {
            Ok(lead) => lead,
            Err(err) => {
                warn!(error = %err, "lead form rejected");
                self.view
                    .show_status(&self.config.validation_message, StatusKind::Error);
                return SubmitOutcome::Rejected(err);
            }
        };

        let _lock = SubmitLock::acquire(&self.view, &self.in_flight, &self.config.pending_label);

        match self.submitter.submit(&lead).await {
            Ok(()) => {
                info!("lead submitted");
                self.view
                    .show_status(&self.config.success_message, StatusKind::Success);
                self.view.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                error!(error = %err, "submission error");
                self.view
                    .show_status(&self.config.failure_message, StatusKind::Error);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Submit control lock held while the backend step runs
///
/// Dropping it restores the original label, re-enables the control and
/// clears the in-flight flag, including when the submit future is dropped
/// before it completes.
struct SubmitLock<'a, V: LeadFormView> {
    view: &'a V,
    in_flight: &'a Cell<bool>,
    original_label: String,
}

impl<'a, V: LeadFormView> SubmitLock<'a, V> {
    fn acquire(view: &'a V, in_flight: &'a Cell<bool>, pending_label: &str) -> Self {
        let original_label = view.submit_label();
        in_flight.set(true);
        view.set_submit_control(pending_label, true);
        Self {
            view,
            in_flight,
            original_label,
        }
    }
}

impl<V: LeadFormView> Drop for SubmitLock<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_control(&self.original_label, false);
        self.in_flight.set(false);
    }
}
