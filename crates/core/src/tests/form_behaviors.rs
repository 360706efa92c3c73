//! Behavioral tests for lead form submission

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::fakes::{
    FakeForm, GatedSubmitter, LogCapture, SUBMIT_LABEL, instant_submitter, timestamp,
};
use crate::error::{LeadError, SubmitError};
use crate::form::{FormConfig, LeadFormController, SubmitOutcome};
use crate::lead::{LeadFields, RequiredField};
use crate::status::StatusKind;

fn complete_fields() -> LeadFields {
    LeadFields::new("Alice", "a@b.com", "Hi")
}

// ============================================================================
// GIVEN: A form missing required fields
// ============================================================================

#[tokio::test]
async fn given_empty_name_when_submitted_then_rejected_with_validation_message() {
    // Given
    let form = FakeForm::with_fields(LeadFields::new("", "a@b.com", "Hi"));
    let delays = Rc::new(RefCell::new(Vec::new()));
    let controller =
        LeadFormController::new(form, instant_submitter(Rc::clone(&delays)), FormConfig::default());

    // When
    let outcome = controller.submit(timestamp()).await;

    // Then
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(LeadError::MissingRequired(vec![RequiredField::Name]))
    );
    assert_eq!(
        controller.view().last_status(),
        Some((
            "All required fields must be filled.".to_string(),
            StatusKind::Error
        ))
    );
    assert!(
        controller.view().control_changes.borrow().is_empty(),
        "Submit control must not change on validation failure"
    );
    assert!(delays.borrow().is_empty(), "Backend must not be called");
}

#[tokio::test]
async fn given_any_missing_required_field_when_submitted_then_no_control_change() {
    let combos = [
        ("", "a@b.com", "Hi"),
        ("Alice", "", "Hi"),
        ("Alice", "a@b.com", ""),
        ("", "", "Hi"),
        ("", "a@b.com", ""),
        ("Alice", "", ""),
        ("", "", ""),
    ];

    for (name, email, message) in combos {
        // Given
        let form = FakeForm::with_fields(
            LeadFields::new(name, email, message)
                .with_phone("555-0100")
                .with_sport("squash"),
        );
        let delays = Rc::new(RefCell::new(Vec::new()));
        let controller = LeadFormController::new(
            form,
            instant_submitter(Rc::clone(&delays)),
            FormConfig::default(),
        );

        // When
        let outcome = controller.submit(timestamp()).await;

        // Then
        assert!(
            matches!(outcome, SubmitOutcome::Rejected(_)),
            "{name:?}/{email:?}/{message:?} should be rejected"
        );
        assert!(!controller.view().disabled.get());
        assert_eq!(*controller.view().label.borrow(), SUBMIT_LABEL);
        assert_eq!(controller.view().resets.get(), 0);
        assert!(!controller.is_pending());
    }
}

#[tokio::test]
async fn given_rejected_form_when_submitted_then_fields_are_kept() {
    let fields = LeadFields::new("Alice", "a@b.com", "");
    let form = FakeForm::with_fields(fields.clone());
    let controller = LeadFormController::new(
        form,
        instant_submitter(Rc::new(RefCell::new(Vec::new()))),
        FormConfig::default(),
    );

    controller.submit(timestamp()).await;

    assert_eq!(*controller.view().fields.borrow(), fields);
}

// ============================================================================
// GIVEN: A complete form and a working backend
// ============================================================================

#[tokio::test]
async fn given_complete_form_when_submitted_then_success_and_reset() {
    // Given
    let form = FakeForm::with_fields(complete_fields());
    let delays = Rc::new(RefCell::new(Vec::new()));
    let controller =
        LeadFormController::new(form, instant_submitter(Rc::clone(&delays)), FormConfig::default());

    // When
    let outcome = controller.submit(timestamp()).await;

    // Then
    assert_eq!(outcome, SubmitOutcome::Accepted);
    let view = controller.view();
    assert_eq!(
        view.last_status(),
        Some((
            "Success! We will contact you shortly.".to_string(),
            StatusKind::Success
        ))
    );
    assert_eq!(view.resets.get(), 1);
    assert_eq!(*view.fields.borrow(), LeadFields::default());
    assert_eq!(*delays.borrow(), vec![Duration::from_millis(1_500)]);
}

#[tokio::test]
async fn given_complete_form_when_submitted_then_control_disabled_then_restored() {
    let form = FakeForm::with_fields(complete_fields());
    let controller = LeadFormController::new(
        form,
        instant_submitter(Rc::new(RefCell::new(Vec::new()))),
        FormConfig::default(),
    );

    controller.submit(timestamp()).await;

    assert_eq!(
        *controller.view().control_changes.borrow(),
        vec![
            ("Sending...".to_string(), true),
            (SUBMIT_LABEL.to_string(), false),
        ]
    );
    assert!(!controller.view().disabled.get());
    assert!(!controller.is_pending());
}

#[tokio::test]
async fn given_custom_pending_label_when_submitted_then_label_is_used() {
    let config = FormConfig {
        pending_label: "Booking...".to_string(),
        ..FormConfig::default()
    };
    let form = FakeForm::with_fields(complete_fields());
    let controller = LeadFormController::new(
        form,
        instant_submitter(Rc::new(RefCell::new(Vec::new()))),
        config,
    );

    controller.submit(timestamp()).await;

    let changes = controller.view().control_changes.borrow();
    assert_eq!(changes.first(), Some(&("Booking...".to_string(), true)));
}

// ============================================================================
// GIVEN: A complete form and a failing backend
// ============================================================================

#[tokio::test]
async fn given_failing_backend_when_submitted_then_error_and_fields_kept() {
    // Given
    let form = FakeForm::with_fields(complete_fields());
    let submitter =
        instant_submitter(Rc::new(RefCell::new(Vec::new()))).failing("network unreachable");
    let controller = LeadFormController::new(form, submitter, FormConfig::default());

    // When
    let outcome = controller.submit(timestamp()).await;

    // Then
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SubmitError::transport("network unreachable"))
    );
    let view = controller.view();
    assert_eq!(
        view.last_status(),
        Some((
            "Something went wrong. Please try again.".to_string(),
            StatusKind::Error
        ))
    );
    assert_eq!(view.resets.get(), 0);
    assert_eq!(*view.fields.borrow(), complete_fields());
}

#[tokio::test]
async fn given_failing_backend_when_submitted_then_control_still_restored() {
    let form = FakeForm::with_fields(complete_fields());
    let submitter = instant_submitter(Rc::new(RefCell::new(Vec::new()))).failing("boom");
    let controller = LeadFormController::new(form, submitter, FormConfig::default());

    controller.submit(timestamp()).await;

    assert!(!controller.view().disabled.get());
    assert_eq!(*controller.view().label.borrow(), SUBMIT_LABEL);
    assert!(!controller.is_pending());
}

// ============================================================================
// GIVEN: A submission is in flight
// ============================================================================

#[tokio::test]
async fn given_pending_submission_when_checked_then_control_disabled_with_pending_label() {
    // Given
    let (submitter, gate) = GatedSubmitter::new();
    let controller = LeadFormController::new(
        FakeForm::with_fields(complete_fields()),
        submitter,
        FormConfig::default(),
    );

    // When
    let mut first = Box::pin(controller.submit(timestamp()));
    assert!(futures::poll!(&mut first).is_pending());

    // Then
    assert!(controller.is_pending());
    assert!(controller.view().disabled.get());
    assert_eq!(*controller.view().label.borrow(), "Sending...");

    gate.send(Ok(())).unwrap();
    assert_eq!(first.await, SubmitOutcome::Accepted);
    assert!(!controller.view().disabled.get());
    assert_eq!(*controller.view().label.borrow(), SUBMIT_LABEL);
}

#[tokio::test]
async fn given_pending_submission_when_submitted_again_then_ignored() {
    // Given
    let (submitter, gate) = GatedSubmitter::new();
    let controller = LeadFormController::new(
        FakeForm::with_fields(complete_fields()),
        submitter,
        FormConfig::default(),
    );
    let mut first = Box::pin(controller.submit(timestamp()));
    assert!(futures::poll!(&mut first).is_pending());

    // When
    let second = controller.submit(timestamp()).await;

    // Then
    assert_eq!(second, SubmitOutcome::Ignored);
    gate.send(Err(SubmitError::transport("late failure"))).unwrap();
    assert!(matches!(first.await, SubmitOutcome::Failed(_)));
    assert_eq!(controller.view().statuses.borrow().len(), 1);
}

#[tokio::test]
async fn given_finished_submission_when_submitted_again_then_runs() {
    let form = FakeForm::with_fields(complete_fields());
    let controller = LeadFormController::new(
        form,
        instant_submitter(Rc::new(RefCell::new(Vec::new()))),
        FormConfig::default(),
    );

    assert_eq!(controller.submit(timestamp()).await, SubmitOutcome::Accepted);

    // Reset cleared the fields; refill them for the second attempt
    *controller.view().fields.borrow_mut() = complete_fields();
    assert_eq!(controller.submit(timestamp()).await, SubmitOutcome::Accepted);
    assert_eq!(controller.view().resets.get(), 2);
}

#[tokio::test]
async fn given_pending_submission_when_dropped_then_control_restored() {
    // Given
    let (submitter, _gate) = GatedSubmitter::new();
    let controller = LeadFormController::new(
        FakeForm::with_fields(complete_fields()),
        submitter,
        FormConfig::default(),
    );
    let mut first = Box::pin(controller.submit(timestamp()));
    assert!(futures::poll!(&mut first).is_pending());
    assert!(controller.view().disabled.get());

    // When
    drop(first);

    // Then
    assert!(!controller.is_pending());
    assert!(!controller.view().disabled.get());
    assert_eq!(*controller.view().label.borrow(), SUBMIT_LABEL);
    assert!(controller.view().statuses.borrow().is_empty());

    // The form accepts the next submission
    assert_eq!(controller.submit(timestamp()).await, SubmitOutcome::Accepted);
}

#[tokio::test]
async fn given_accepted_submission_when_logged_then_contact_details_stay_out() {
    // Given
    let logs = LogCapture::default();
    let _guard = logs.install();
    let (submitter, gate) = GatedSubmitter::new();
    let controller = LeadFormController::new(
        FakeForm::with_fields(complete_fields()),
        submitter,
        FormConfig::default(),
    );
    gate.send(Ok(())).unwrap();

    // When
    let outcome = controller.submit(timestamp()).await;

    // Then
    assert_eq!(outcome, SubmitOutcome::Accepted);
    let output = logs.contents();
    assert!(output.contains("lead submitted"));
    assert!(!output.contains("a@b.com"));
}
