// ABOUTME: State management for the onboarding wizard
// Tracks current step, form inputs, consent outcome, and validation errors

use crate::collaborators::{AccountDetails, ConsentNotifier};
use crate::validation::{self, FieldError, Record, SchemaId};

/// Steps in the onboarding wizard. `Complete` is the terminal success state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    PersonalDetails,
    ParentalConsent,
    IdentityVerification,
    PinSetup,
    Complete,
}

impl OnboardingStep {
    /// Get all steps in order
    pub fn all() -> &'static [OnboardingStep] {
        &[
            Self::Welcome,
            Self::PersonalDetails,
            Self::ParentalConsent,
            Self::IdentityVerification,
            Self::PinSetup,
            Self::Complete,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::PersonalDetails => 2,
            Self::ParentalConsent => 3,
            Self::IdentityVerification => 4,
            Self::PinSetup => 5,
            Self::Complete => 6,
        }
    }

    /// Get the total number of steps, terminal state included
    pub fn total() -> usize {
        6
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::PersonalDetails => "Personal Details",
            Self::ParentalConsent => "Parental Consent",
            Self::IdentityVerification => "Identity Check",
            Self::PinSetup => "PIN Setup",
            Self::Complete => "Done",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome! Let's create your account.",
            Self::PersonalDetails => "Tell us a little about yourself",
            Self::ParentalConsent => "We need approval from a parent or guardian",
            Self::IdentityVerification => "This step helps keep your account secure",
            Self::PinSetup => "Create a 4-digit PIN for your account",
            Self::Complete => "Welcome aboard! Your account is ready.",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::PersonalDetails),
            Self::PersonalDetails => Some(Self::ParentalConsent),
            Self::ParentalConsent => Some(Self::IdentityVerification),
            Self::IdentityVerification => Some(Self::PinSetup),
            Self::PinSetup => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::PersonalDetails => Some(Self::Welcome),
            Self::ParentalConsent => Some(Self::PersonalDetails),
            Self::IdentityVerification => Some(Self::ParentalConsent),
            Self::PinSetup => Some(Self::IdentityVerification),
            Self::Complete => Some(Self::PinSetup),
        }
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// Moved forward one step.
    Advanced,
    /// Reached the terminal `Complete` state. The caller is expected to
    /// hand the account details to the provisioning collaborator.
    Completed,
    /// A gate (validation or consent) refused the move; step unchanged.
    Blocked,
    /// The request would leave the step range and was clamped.
    Noop,
}

/// Which field has input focus on the personal details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    DateOfBirth,
}

/// Step-local form record for personal details. Values are retained across
/// backward navigation so retreat is non-destructive.
#[derive(Debug, Clone, Default)]
pub struct PersonalDetailsForm {
    pub full_name: String,
    pub date_of_birth: String,
    pub focus: Option<PersonalField>,
}

impl PersonalDetailsForm {
    pub fn record(&self) -> Record {
        Record::new()
            .field("full_name", self.full_name.clone())
            .field("date_of_birth", self.date_of_birth.clone())
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(PersonalField::FullName) => Some(&mut self.full_name),
            Some(PersonalField::DateOfBirth) => Some(&mut self.date_of_birth),
            None => None,
        }
    }
}

/// Which field has input focus on the PIN setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinField {
    Pin,
    ConfirmPin,
}

/// Step-local form record for PIN setup.
#[derive(Debug, Clone, Default)]
pub struct PinForm {
    pub pin: String,
    pub confirm_pin: String,
    pub focus: Option<PinField>,
}

impl PinForm {
    pub fn record(&self) -> Record {
        Record::new()
            .field("pin", self.pin.clone())
            .field("confirm_pin", self.confirm_pin.clone())
    }

    fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(PinField::Pin) => Some(&mut self.pin),
            Some(PinField::ConfirmPin) => Some(&mut self.confirm_pin),
            None => None,
        }
    }
}

/// The two mutually exclusive consent sub-flows. Both are equivalent to
/// "consent granted" on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentPath {
    RemoteNotify,
    InPerson,
}

/// Consent gate state for step 3.
#[derive(Debug, Clone)]
pub struct ConsentState {
    /// Which sub-flow succeeded, if any.
    pub path: Option<ConsentPath>,
    pub granted: bool,
    /// Highlighted sub-flow in the UI.
    pub selected: ConsentPath,
    /// Guardian contact address for the remote path. Format unchecked.
    pub guardian_contact: String,
    /// Whether the contact input is capturing keystrokes.
    pub editing_contact: bool,
    /// In-person checkbox.
    pub acknowledged: bool,
}

impl Default for ConsentState {
    fn default() -> Self {
        Self {
            path: None,
            granted: false,
            selected: ConsentPath::RemoteNotify,
            guardian_contact: String::new(),
            editing_contact: false,
            acknowledged: false,
        }
    }
}

/// Full onboarding wizard state. Owned by a single flow instance; nothing
/// here survives abandonment.
#[derive(Debug, Clone)]
pub struct OnboardingState {
    /// Current step in the wizard
    pub current_step: OnboardingStep,
    pub personal: PersonalDetailsForm,
    pub pin: PinForm,
    pub consent: ConsentState,
    /// Field errors for the active step, cleared on any navigation.
    pub errors: Vec<FieldError>,
    /// Non-field hint shown when a gate refuses the move (consent step).
    pub gate_message: Option<String>,
}

impl OnboardingState {
    pub fn new() -> Self {
        let mut personal = PersonalDetailsForm::default();
        personal.focus = Some(PersonalField::FullName);
        let mut pin = PinForm::default();
        pin.focus = Some(PinField::Pin);

        Self {
            current_step: OnboardingStep::Welcome,
            personal,
            pin,
            consent: ConsentState::default(),
            errors: Vec::new(),
            gate_message: None,
        }
    }

    /// Progress through the flow as a fraction of all steps. Display only,
    /// never used for gating.
    pub fn progress(&self) -> f64 {
        self.current_step.number() as f64 / OnboardingStep::total() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == OnboardingStep::Complete
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    /// The record handed to account provisioning on completion.
    pub fn account_details(&self) -> AccountDetails {
        AccountDetails {
            full_name: self.personal.full_name.clone(),
            date_of_birth: self.personal.date_of_birth.clone(),
            pin: self.pin.pin.clone(),
        }
    }

    /// First error message attached to a field, for inline display.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Attempt to move forward one step. Gated steps validate their form or
    /// consult the consent gate; a refused move leaves the step unchanged
    /// and surfaces errors. Advancing past `Complete` is clamped.
    pub fn advance(&mut self) -> StepTransition {
        match self.current_step {
            OnboardingStep::Welcome | OnboardingStep::IdentityVerification => {
                self.move_forward()
            }
            OnboardingStep::PersonalDetails => {
                match validation::validate(SchemaId::PersonalDetails, &self.personal.record()) {
                    Ok(()) => self.move_forward(),
                    Err(errors) => {
                        self.errors = errors;
                        StepTransition::Blocked
                    }
                }
            }
            OnboardingStep::ParentalConsent => {
                if self.consent.granted {
                    self.move_forward()
                } else {
                    self.gate_message =
                        Some("Parental approval is needed to continue.".to_string());
                    StepTransition::Blocked
                }
            }
            OnboardingStep::PinSetup => {
                match validation::validate(SchemaId::PinSetup, &self.pin.record()) {
                    Ok(()) => {
                        self.move_forward();
                        StepTransition::Completed
                    }
                    Err(errors) => {
                        self.errors = errors;
                        StepTransition::Blocked
                    }
                }
            }
            OnboardingStep::Complete => StepTransition::Noop,
        }
    }

    /// Move back one step. Always permitted above `Welcome`, never
    /// re-validates, and leaves previously entered values in place.
    pub fn retreat(&mut self) -> StepTransition {
        match self.current_step.previous() {
            Some(prev) => {
                self.current_step = prev;
                self.errors.clear();
                self.gate_message = None;
                StepTransition::Advanced
            }
            None => StepTransition::Noop,
        }
    }

    fn move_forward(&mut self) -> StepTransition {
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                self.errors.clear();
                self.gate_message = None;
                StepTransition::Advanced
            }
            None => StepTransition::Noop,
        }
    }

    /// Set the personal details record and attempt the gated advance.
    pub fn submit_personal_details(
        &mut self,
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> StepTransition {
        self.personal.full_name = full_name.into();
        self.personal.date_of_birth = date_of_birth.into();
        self.advance()
    }

    /// Set the PIN record and attempt the gated advance.
    pub fn submit_pin(
        &mut self,
        pin: impl Into<String>,
        confirm_pin: impl Into<String>,
    ) -> StepTransition {
        self.pin.pin = pin.into();
        self.pin.confirm_pin = confirm_pin.into();
        self.advance()
    }

    /// Remote consent sub-flow: notify the guardian at the entered contact
    /// address. Success grants consent and advances.
    pub fn consent_via_notification(
        &mut self,
        notifier: &dyn ConsentNotifier,
    ) -> anyhow::Result<StepTransition> {
        notifier.notify_parent(&self.consent.guardian_contact)?;
        self.consent.granted = true;
        self.consent.path = Some(ConsentPath::RemoteNotify);
        Ok(self.advance())
    }

    /// In-person consent sub-flow: requires the acknowledgment checkbox.
    pub fn consent_in_person(&mut self) -> StepTransition {
        if !self.consent.acknowledged {
            self.gate_message =
                Some("Tick the approval box to confirm consent.".to_string());
            return StepTransition::Blocked;
        }
        self.consent.granted = true;
        self.consent.path = Some(ConsentPath::InPerson);
        self.advance()
    }

    /// Handle a typed character for whichever text field is active.
    pub fn input_char(&mut self, c: char) {
        match self.current_step {
            OnboardingStep::PersonalDetails => {
                if let Some(value) = self.personal.focused_value_mut() {
                    value.push(c);
                }
            }
            OnboardingStep::PinSetup => {
                if let Some(value) = self.pin.focused_value_mut() {
                    value.push(c);
                }
            }
            OnboardingStep::ParentalConsent if self.consent.editing_contact => {
                self.consent.guardian_contact.push(c);
            }
            _ => {}
        }
    }

    /// Handle backspace for whichever text field is active.
    pub fn backspace(&mut self) {
        match self.current_step {
            OnboardingStep::PersonalDetails => {
                if let Some(value) = self.personal.focused_value_mut() {
                    value.pop();
                }
            }
            OnboardingStep::PinSetup => {
                if let Some(value) = self.pin.focused_value_mut() {
                    value.pop();
                }
            }
            OnboardingStep::ParentalConsent if self.consent.editing_contact => {
                self.consent.guardian_contact.pop();
            }
            _ => {}
        }
    }

    /// Cycle field focus within the active step.
    pub fn focus_next_field(&mut self) {
        match self.current_step {
            OnboardingStep::PersonalDetails => {
                self.personal.focus = match self.personal.focus {
                    Some(PersonalField::FullName) => Some(PersonalField::DateOfBirth),
                    _ => Some(PersonalField::FullName),
                };
            }
            OnboardingStep::PinSetup => {
                self.pin.focus = match self.pin.focus {
                    Some(PinField::Pin) => Some(PinField::ConfirmPin),
                    _ => Some(PinField::Pin),
                };
            }
            _ => {}
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_step_navigation() {
        let step = OnboardingStep::Welcome;
        assert_eq!(step.next(), Some(OnboardingStep::PersonalDetails));
        assert_eq!(step.previous(), None);

        let step = OnboardingStep::Complete;
        assert_eq!(step.next(), None);
        assert_eq!(step.previous(), Some(OnboardingStep::PinSetup));

        let step = OnboardingStep::ParentalConsent;
        assert_eq!(step.next(), Some(OnboardingStep::IdentityVerification));
        assert_eq!(step.previous(), Some(OnboardingStep::PersonalDetails));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(OnboardingStep::Welcome.number(), 1);
        assert_eq!(OnboardingStep::PinSetup.number(), 5);
        assert_eq!(OnboardingStep::Complete.number(), 6);
        assert_eq!(OnboardingStep::total(), 6);
    }

    #[test]
    fn test_state_initialization() {
        let state = OnboardingState::new();
        assert_eq!(state.current_step, OnboardingStep::Welcome);
        assert!(state.errors.is_empty());
        assert!(!state.consent.granted);
    }

    #[test]
    fn test_welcome_advances_unconditionally() {
        let mut state = OnboardingState::new();
        assert_eq!(state.advance(), StepTransition::Advanced);
        assert_eq!(state.current_step, OnboardingStep::PersonalDetails);
    }

    #[test]
    fn test_retreat_clamped_at_welcome() {
        let mut state = OnboardingState::new();
        assert_eq!(state.retreat(), StepTransition::Noop);
        assert_eq!(state.current_step, OnboardingStep::Welcome);
    }

    #[test]
    fn test_consent_gate_blocks_without_approval() {
        let mut state = OnboardingState::new();
        state.advance();
        state.submit_personal_details("Alex Doe", "2010-05-17");
        assert_eq!(state.current_step, OnboardingStep::ParentalConsent);

        assert_eq!(state.advance(), StepTransition::Blocked);
        assert_eq!(state.current_step, OnboardingStep::ParentalConsent);
        assert!(state.gate_message.is_some());
    }

    #[test]
    fn test_in_person_consent_requires_acknowledgment() {
        let mut state = OnboardingState::new();
        state.advance();
        state.submit_personal_details("Alex Doe", "2010-05-17");

        assert_eq!(state.consent_in_person(), StepTransition::Blocked);
        state.consent.acknowledged = true;
        assert_eq!(state.consent_in_person(), StepTransition::Advanced);
        assert_eq!(state.current_step, OnboardingStep::IdentityVerification);
        assert_eq!(state.consent.path, Some(ConsentPath::InPerson));
    }

    #[test]
    fn test_progress_fraction() {
        let mut state = OnboardingState::new();
        assert!((state.progress() - 1.0 / 6.0).abs() < f64::EPSILON);
        state.advance();
        assert!((state.progress() - 2.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_input_targets_focused_field() {
        let mut state = OnboardingState::new();
        state.advance();

        for c in "Jo".chars() {
            state.input_char(c);
        }
        assert_eq!(state.personal.full_name, "Jo");

        state.focus_next_field();
        for c in "2012-01-01".chars() {
            state.input_char(c);
        }
        assert_eq!(state.personal.date_of_birth, "2012-01-01");

        state.backspace();
        assert_eq!(state.personal.date_of_birth, "2012-01-0");
    }
}
