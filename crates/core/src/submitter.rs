//! Lead submission backends
//!
//! [`LeadSubmitter`] is the seam between the form controller and whatever
//! receives leads. [`SimulatedSubmitter`] is the placeholder backend: it logs
//! the payload and waits out a fixed delay instead of making a network call.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use tracing::info;

use crate::error::SubmitError;
use crate::lead::Lead;

/// Default latency of the simulated backend
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;

/// Something that accepts validated leads
///
/// Futures are not `Send`; submitters run on the browser's single thread.
#[async_trait(?Send)]
pub trait LeadSubmitter {
    /// Delivers one lead
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the lead could not be delivered.
    async fn submit(&self, lead: &Lead) -> Result<(), SubmitError>;
}

#[async_trait(?Send)]
impl<T: LeadSubmitter + ?Sized> LeadSubmitter for Rc<T> {
    async fn submit(&self, lead: &Lead) -> Result<(), SubmitError> {
        (**self).submit(lead).await
    }
}

/// Sleep primitive supplied by the runtime (a browser timer, or a test stub)
pub type SleepFn = Rc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()>>;

/// Stand-in backend that logs the payload and resolves after a delay
#[derive(Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    sleep: SleepFn,
    failure: Option<String>,
}

impl fmt::Debug for SimulatedSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedSubmitter")
            .field("delay", &self.delay)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

impl SimulatedSubmitter {
    /// Creates a submitter that succeeds after `delay`
    pub fn new<F>(delay: Duration, sleep: F) -> Self
    where
        F: Fn(Duration) -> LocalBoxFuture<'static, ()> + 'static,
    {
        Self {
            delay,
            sleep: Rc::new(sleep),
            failure: None,
        }
    }

    /// Makes every submission fail with a transport error after the delay
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait(?Send)]
impl LeadSubmitter for SimulatedSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(lead)
            .map_err(|e| SubmitError::transport(format!("failed to encode lead: {e}")))?;
        info!(%payload, "pushing lead to backend");

        (self.sleep)(self.delay).await;

        self.failure
            .as_ref()
            .map_or(Ok(()), |reason| Err(SubmitError::transport(reason.clone())))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::cell::RefCell;

    use chrono::DateTime;
    use futures::FutureExt;

    use super::*;
    use crate::lead::LeadFields;

    fn lead() -> Lead {
        let created_at = DateTime::from_timestamp(1_792_152_000, 0).expect("valid timestamp");
        Lead::from_fields(LeadFields::new("Alice", "a@b.com", "Hi"), created_at).unwrap()
    }

    fn recording_sleep(log: Rc<RefCell<Vec<Duration>>>) -> SimulatedSubmitter {
        SimulatedSubmitter::new(Duration::from_millis(1_500), move |delay| {
            log.borrow_mut().push(delay);
            futures::future::ready(()).boxed_local()
        })
    }

    #[tokio::test]
    async fn test_simulated_submit_waits_configured_delay() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let submitter = recording_sleep(Rc::clone(&log));

        let result = submitter.submit(&lead()).await;

        assert!(result.is_ok());
        assert_eq!(*log.borrow(), vec![Duration::from_millis(1_500)]);
    }

    #[tokio::test]
    async fn test_failing_submit_still_waits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let submitter = recording_sleep(Rc::clone(&log)).failing("offline");

        let result = submitter.submit(&lead()).await;

        assert_eq!(result, Err(SubmitError::transport("offline")));
        assert_eq!(log.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_rc_submitter_delegates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let submitter = Rc::new(recording_sleep(Rc::clone(&log)));

        assert!(submitter.submit(&lead()).await.is_ok());
        assert_eq!(submitter.delay(), Duration::from_millis(1_500));
    }
}
