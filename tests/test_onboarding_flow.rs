// ABOUTME: Integration tests for the full onboarding wizard flow
// Exercises step gating, navigation clamping, and collaborator handoff end to end

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use sproutpay::collaborators::{AccountDetails, AccountProvisioner, ConsentNotifier};
use sproutpay::components::onboarding::{OnboardingState, OnboardingStep, StepTransition};

#[derive(Default)]
struct RecordingNotifier {
    contacts: RefCell<Vec<String>>,
}

impl ConsentNotifier for RecordingNotifier {
    fn notify_parent(&self, contact: &str) -> Result<()> {
        self.contacts.borrow_mut().push(contact.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingProvisioner {
    provisioned: Rc<RefCell<Vec<AccountDetails>>>,
}

impl AccountProvisioner for RecordingProvisioner {
    fn provision_account(&self, details: &AccountDetails) -> Result<()> {
        self.provisioned.borrow_mut().push(details.clone());
        Ok(())
    }
}

/// Drive a fresh wizard to the PIN setup step with valid inputs.
fn wizard_at_pin_setup() -> OnboardingState {
    let mut state = OnboardingState::new();
    assert_eq!(state.advance(), StepTransition::Advanced);
    assert_eq!(
        state.submit_personal_details("Alex Doe", "2010-05-17"),
        StepTransition::Advanced
    );
    state.consent.acknowledged = true;
    assert_eq!(state.consent_in_person(), StepTransition::Advanced);
    assert_eq!(state.advance(), StepTransition::Advanced);
    assert_eq!(state.current_step, OnboardingStep::PinSetup);
    state
}

#[test]
fn step_index_stays_in_range_under_arbitrary_navigation() {
    let mut state = OnboardingState::new();

    // Hammer retreat at the lower bound
    for _ in 0..10 {
        state.retreat();
        assert_eq!(state.current_step, OnboardingStep::Welcome);
        assert_eq!(state.current_step.number(), 1);
    }

    // Drive to the terminal step, then hammer advance at the upper bound
    let mut state = wizard_at_pin_setup();
    assert_eq!(state.submit_pin("1234", "1234"), StepTransition::Completed);
    for _ in 0..10 {
        assert_eq!(state.advance(), StepTransition::Noop);
        assert_eq!(state.current_step, OnboardingStep::Complete);
        assert_eq!(state.current_step.number(), OnboardingStep::total());
    }
}

#[test]
fn invalid_personal_details_block_and_surface_field_error() {
    let mut state = OnboardingState::new();
    state.advance();

    let outcome = state.submit_personal_details("A", "2010-05-17");
    assert_eq!(outcome, StepTransition::Blocked);
    assert_eq!(state.current_step, OnboardingStep::PersonalDetails);
    assert_eq!(state.current_step.number(), 2);
    assert_eq!(
        state.field_error("full_name"),
        Some("Full name must be at least 2 characters.")
    );
    assert!(state.field_error("date_of_birth").is_none());
}

#[test]
fn malformed_date_blocks_with_format_message() {
    let mut state = OnboardingState::new();
    state.advance();

    let outcome = state.submit_personal_details("Alex Doe", "17/05/2010");
    assert_eq!(outcome, StepTransition::Blocked);
    assert_eq!(
        state.field_error("date_of_birth"),
        Some("Date of Birth must be in YYYY-MM-DD format.")
    );
}

#[test]
fn mismatched_pins_produce_exactly_one_error_on_confirm_field() {
    let mut state = wizard_at_pin_setup();

    let outcome = state.submit_pin("1234", "4321");
    assert_eq!(outcome, StepTransition::Blocked);
    assert_eq!(state.current_step, OnboardingStep::PinSetup);
    assert_eq!(state.errors.len(), 1);
    assert_eq!(state.errors[0].field, "confirm_pin");
    assert_eq!(state.errors[0].message, "PINs don't match");
}

#[test]
fn short_pin_reports_length_before_mismatch() {
    let mut state = wizard_at_pin_setup();

    let outcome = state.submit_pin("12", "4321");
    assert_eq!(outcome, StepTransition::Blocked);
    // Field-level failures suppress the cross-field comparison
    assert!(state
        .errors
        .iter()
        .all(|e| e.field != "confirm_pin" || e.message != "PINs don't match"));
    assert_eq!(state.field_error("pin"), Some("PIN must be 4 digits."));
}

#[test]
fn valid_personal_details_advance_to_consent() {
    let mut state = OnboardingState::new();
    state.advance();

    let outcome = state.submit_personal_details("Alex Doe", "2010-05-17");
    assert_eq!(outcome, StepTransition::Advanced);
    assert_eq!(state.current_step, OnboardingStep::ParentalConsent);
    assert_eq!(state.current_step.number(), 3);
    assert!(state.errors.is_empty());
}

#[test]
fn retreat_preserves_entered_values() {
    let mut state = OnboardingState::new();
    state.advance();
    state.submit_personal_details("Alex Doe", "2010-05-17");
    assert_eq!(state.current_step, OnboardingStep::ParentalConsent);

    state.retreat();
    assert_eq!(state.current_step, OnboardingStep::PersonalDetails);
    assert_eq!(state.personal.full_name, "Alex Doe");
    assert_eq!(state.personal.date_of_birth, "2010-05-17");

    // Forward again without retyping anything
    assert_eq!(state.advance(), StepTransition::Advanced);
    assert_eq!(state.current_step, OnboardingStep::ParentalConsent);
}

#[test]
fn completion_is_idempotent() {
    let mut state = wizard_at_pin_setup();
    assert_eq!(state.submit_pin("1234", "1234"), StepTransition::Completed);
    assert!(state.is_complete());

    // Further advances change nothing and report no new completion
    assert_eq!(state.advance(), StepTransition::Noop);
    assert_eq!(state.advance(), StepTransition::Noop);
    assert!(state.is_complete());
}

#[test]
fn remote_consent_notifies_guardian_and_advances() {
    let mut state = OnboardingState::new();
    state.advance();
    state.submit_personal_details("Alex Doe", "2010-05-17");

    let notifier = RecordingNotifier::default();
    state.consent.guardian_contact = "parent@example.com".to_string();
    let outcome = state
        .consent_via_notification(&notifier)
        .expect("notification succeeds");
    assert_eq!(outcome, StepTransition::Advanced);
    assert_eq!(state.current_step, OnboardingStep::IdentityVerification);
    assert_eq!(
        notifier.contacts.borrow().as_slice(),
        ["parent@example.com".to_string()]
    );
}

#[test]
fn completed_wizard_hands_details_to_provisioner() {
    let mut state = wizard_at_pin_setup();
    let outcome = state.submit_pin("1234", "1234");
    assert_eq!(outcome, StepTransition::Completed);

    let provisioner = RecordingProvisioner::default();
    provisioner
        .provision_account(&state.account_details())
        .expect("provisioning succeeds");

    let provisioned = provisioner.provisioned.borrow();
    assert_eq!(provisioned.len(), 1);
    assert_eq!(provisioned[0].full_name, "Alex Doe");
    assert_eq!(provisioned[0].date_of_birth, "2010-05-17");
    assert_eq!(provisioned[0].pin, "1234");
}

#[test]
fn rejected_then_corrected_name_scenario() {
    let mut state = OnboardingState::new();
    state.advance();

    // "J" is too short and must keep the wizard on step 2
    assert_eq!(
        state.submit_personal_details("J", "2012-01-01"),
        StepTransition::Blocked
    );
    assert_eq!(state.current_step.number(), 2);

    // "Jo" satisfies the minimum length and clears the error
    assert_eq!(
        state.submit_personal_details("Jo", "2012-01-01"),
        StepTransition::Advanced
    );
    assert_eq!(state.current_step.number(), 3);
    assert!(state.errors.is_empty());
}
