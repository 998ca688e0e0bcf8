// ABOUTME: Event handling system for keyboard input and app actions
// Maps key events to app events per view, then applies them to state

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::app::state::{AppState, ToolsTab, View};
use crate::components::onboarding::{ConsentPath, OnboardingStep, StepTransition};
use crate::models::SavingsGoal;
use crate::validation::{self, Record, SchemaId};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextScreen,
    PreviousScreen,
    GoToScreen(View),
    // Onboarding wizard events
    OnboardingAdvance,
    OnboardingRetreat,
    OnboardingInputChar(char),
    OnboardingBackspace,
    OnboardingFocusNext,
    OnboardingFinish, // Leave the completion screen for the dashboard
    OnboardingConsentSelect(ConsentPath),
    OnboardingConsentEditContact,
    OnboardingConsentStopEditing,
    OnboardingConsentSendRequest,
    OnboardingConsentToggleAck,
    OnboardingConsentApproveInPerson,
    // Dashboard events
    NextTransaction,
    PreviousTransaction,
    // Financial tools events
    ToolsToggleTab,
    ToolsOpenGoalDialog,
    ToolsDialogInputChar(char),
    ToolsDialogBackspace,
    ToolsDialogFocusNext,
    ToolsDialogCycleCategory,
    ToolsDialogSubmit,
    ToolsDialogCancel,
    // Account profile events
    ProfileOpenEditDialog,
    ProfileOpenPinDialog,
    ProfileToggleNotifications,
    ProfileNextNotification,
    ProfilePreviousNotification,
    ProfileDialogInputChar(char),
    ProfileDialogBackspace,
    ProfileDialogFocusNext,
    ProfileDialogSubmit,
    ProfileDialogCancel,
    // Parental portal events
    ParentalNextControl,
    ParentalPreviousControl,
    ParentalToggleControl,
    ParentalOpenAllowanceDialog,
    ParentalDialogInputChar(char),
    ParentalDialogBackspace,
    ParentalDialogSubmit,
    ParentalDialogCancel,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key event into an app event given the current state.
    /// Returns None for keys that mean nothing in the active context.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits, even while a text field is capturing input
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(AppEvent::ToggleHelp)
                }
                _ => None,
            };
        }

        match state.current_view {
            View::Onboarding => Self::handle_onboarding_key(key, state),
            View::Dashboard => Self::handle_dashboard_key(key, state),
            View::FinancialTools => Self::handle_tools_key(key, state),
            View::AccountProfile => Self::handle_profile_key(key, state),
            View::ParentalPortal => Self::handle_parental_key(key, state),
        }
    }

    fn handle_global_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.text_input_active() {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Tab => Some(AppEvent::NextScreen),
            KeyCode::BackTab => Some(AppEvent::PreviousScreen),
            KeyCode::Char('1') => Some(AppEvent::GoToScreen(View::Dashboard)),
            KeyCode::Char('2') => Some(AppEvent::GoToScreen(View::FinancialTools)),
            KeyCode::Char('3') => Some(AppEvent::GoToScreen(View::AccountProfile)),
            KeyCode::Char('4') => Some(AppEvent::GoToScreen(View::ParentalPortal)),
            _ => None,
        }
    }

    fn handle_onboarding_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let onboarding = &state.onboarding;

        match onboarding.current_step {
            OnboardingStep::Welcome => match key.code {
                KeyCode::Enter | KeyCode::Right => Some(AppEvent::OnboardingAdvance),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            },
            OnboardingStep::PersonalDetails | OnboardingStep::PinSetup => match key.code {
                KeyCode::Enter => Some(AppEvent::OnboardingAdvance),
                KeyCode::Esc => Some(AppEvent::OnboardingRetreat),
                KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                    Some(AppEvent::OnboardingFocusNext)
                }
                KeyCode::Backspace => Some(AppEvent::OnboardingBackspace),
                KeyCode::Char(c) => Some(AppEvent::OnboardingInputChar(c)),
                _ => None,
            },
            OnboardingStep::ParentalConsent => {
                if onboarding.consent.editing_contact {
                    return match key.code {
                        KeyCode::Enter => Some(AppEvent::OnboardingConsentSendRequest),
                        KeyCode::Esc => Some(AppEvent::OnboardingConsentStopEditing),
                        KeyCode::Backspace => Some(AppEvent::OnboardingBackspace),
                        KeyCode::Char(c) => Some(AppEvent::OnboardingInputChar(c)),
                        _ => None,
                    };
                }
                match key.code {
                    KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                        let other = match onboarding.consent.selected {
                            ConsentPath::RemoteNotify => ConsentPath::InPerson,
                            ConsentPath::InPerson => ConsentPath::RemoteNotify,
                        };
                        Some(AppEvent::OnboardingConsentSelect(other))
                    }
                    KeyCode::Char(' ') => Some(AppEvent::OnboardingConsentToggleAck),
                    KeyCode::Enter => match onboarding.consent.selected {
                        ConsentPath::RemoteNotify => {
                            Some(AppEvent::OnboardingConsentEditContact)
                        }
                        ConsentPath::InPerson => {
                            Some(AppEvent::OnboardingConsentApproveInPerson)
                        }
                    },
                    KeyCode::Esc => Some(AppEvent::OnboardingRetreat),
                    KeyCode::Char('q') => Some(AppEvent::Quit),
                    _ => None,
                }
            }
            OnboardingStep::IdentityVerification => match key.code {
                KeyCode::Enter | KeyCode::Right => Some(AppEvent::OnboardingAdvance),
                KeyCode::Esc => Some(AppEvent::OnboardingRetreat),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            },
            OnboardingStep::Complete => match key.code {
                KeyCode::Enter => Some(AppEvent::OnboardingFinish),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            },
        }
    }

    fn handle_dashboard_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::NextTransaction),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PreviousTransaction),
            _ => Self::handle_global_key(key, state),
        }
    }

    fn handle_tools_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.tools.dialog.is_some() {
            return match key.code {
                KeyCode::Enter => Some(AppEvent::ToolsDialogSubmit),
                KeyCode::Esc => Some(AppEvent::ToolsDialogCancel),
                KeyCode::Tab => Some(AppEvent::ToolsDialogFocusNext),
                KeyCode::Up | KeyCode::Down => Some(AppEvent::ToolsDialogCycleCategory),
                KeyCode::Backspace => Some(AppEvent::ToolsDialogBackspace),
                KeyCode::Char(c) => Some(AppEvent::ToolsDialogInputChar(c)),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Left | KeyCode::Right => Some(AppEvent::ToolsToggleTab),
            KeyCode::Char('n') => Some(AppEvent::ToolsOpenGoalDialog),
            _ => Self::handle_global_key(key, state),
        }
    }

    fn handle_profile_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.profile.profile_dialog.is_some() || state.profile.pin_dialog.is_some() {
            return match key.code {
                KeyCode::Enter => Some(AppEvent::ProfileDialogSubmit),
                KeyCode::Esc => Some(AppEvent::ProfileDialogCancel),
                KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                    Some(AppEvent::ProfileDialogFocusNext)
                }
                KeyCode::Backspace => Some(AppEvent::ProfileDialogBackspace),
                KeyCode::Char(c) => Some(AppEvent::ProfileDialogInputChar(c)),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('e') => Some(AppEvent::ProfileOpenEditDialog),
            KeyCode::Char('p') => Some(AppEvent::ProfileOpenPinDialog),
            KeyCode::Char('n') => Some(AppEvent::ProfileToggleNotifications),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ProfileNextNotification),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ProfilePreviousNotification),
            _ => Self::handle_global_key(key, state),
        }
    }

    fn handle_parental_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.parental.dialog.is_some() {
            return match key.code {
                KeyCode::Enter => Some(AppEvent::ParentalDialogSubmit),
                KeyCode::Esc => Some(AppEvent::ParentalDialogCancel),
                KeyCode::Backspace => Some(AppEvent::ParentalDialogBackspace),
                KeyCode::Char(c) => Some(AppEvent::ParentalDialogInputChar(c)),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ParentalNextControl),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ParentalPreviousControl),
            KeyCode::Char(' ') => Some(AppEvent::ParentalToggleControl),
            KeyCode::Char('a') => Some(AppEvent::ParentalOpenAllowanceDialog),
            _ => Self::handle_global_key(key, state),
        }
    }

    /// Apply an app event to state. All transitions are synchronous.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::NextScreen => state.next_view(),
            AppEvent::PreviousScreen => state.previous_view(),
            AppEvent::GoToScreen(view) => state.switch_view(view),

            AppEvent::OnboardingAdvance => {
                if state.onboarding.advance() == StepTransition::Completed {
                    Self::hand_off_account(state);
                }
            }
            AppEvent::OnboardingRetreat => {
                state.onboarding.retreat();
            }
            AppEvent::OnboardingInputChar(c) => state.onboarding.input_char(c),
            AppEvent::OnboardingBackspace => state.onboarding.backspace(),
            AppEvent::OnboardingFocusNext => state.onboarding.focus_next_field(),
            AppEvent::OnboardingFinish => {
                if state.onboarding.is_complete() {
                    info!("onboarding finished, entering dashboard");
                    state.switch_view(View::Dashboard);
                }
            }
            AppEvent::OnboardingConsentSelect(path) => {
                state.onboarding.consent.selected = path;
            }
            AppEvent::OnboardingConsentEditContact => {
                state.onboarding.consent.editing_contact = true;
            }
            AppEvent::OnboardingConsentStopEditing => {
                state.onboarding.consent.editing_contact = false;
            }
            AppEvent::OnboardingConsentSendRequest => {
                state.onboarding.consent.editing_contact = false;
                match state
                    .onboarding
                    .consent_via_notification(state.consent_notifier.as_ref())
                {
                    Ok(_) => {}
                    Err(e) => warn!("consent notification failed: {e:#}"),
                }
            }
            AppEvent::OnboardingConsentToggleAck => {
                if state.onboarding.consent.selected == ConsentPath::InPerson {
                    state.onboarding.consent.acknowledged =
                        !state.onboarding.consent.acknowledged;
                }
            }
            AppEvent::OnboardingConsentApproveInPerson => {
                state.onboarding.consent_in_person();
            }

            AppEvent::NextTransaction => state.dashboard.next_transaction(),
            AppEvent::PreviousTransaction => state.dashboard.previous_transaction(),

            AppEvent::ToolsToggleTab => state.tools.toggle_tab(),
            AppEvent::ToolsOpenGoalDialog => {
                if state.tools.tab == ToolsTab::Savings {
                    state.tools.dialog = Some(crate::app::state::GoalDialog::new());
                }
            }
            AppEvent::ToolsDialogInputChar(c) => {
                if let Some(dialog) = state.tools.dialog.as_mut() {
                    match dialog.focus {
                        crate::app::state::GoalField::Name => dialog.goal_name.push(c),
                        crate::app::state::GoalField::Amount => dialog.target_amount.push(c),
                        crate::app::state::GoalField::Category => {}
                    }
                }
            }
            AppEvent::ToolsDialogBackspace => {
                if let Some(dialog) = state.tools.dialog.as_mut() {
                    match dialog.focus {
                        crate::app::state::GoalField::Name => {
                            dialog.goal_name.pop();
                        }
                        crate::app::state::GoalField::Amount => {
                            dialog.target_amount.pop();
                        }
                        crate::app::state::GoalField::Category => {}
                    }
                }
            }
            AppEvent::ToolsDialogFocusNext => {
                if let Some(dialog) = state.tools.dialog.as_mut() {
                    dialog.focus_next();
                }
            }
            AppEvent::ToolsDialogCycleCategory => {
                if let Some(dialog) = state.tools.dialog.as_mut() {
                    if dialog.focus == crate::app::state::GoalField::Category {
                        dialog.cycle_category();
                    }
                }
            }
            AppEvent::ToolsDialogSubmit => Self::submit_goal_dialog(state),
            AppEvent::ToolsDialogCancel => state.tools.dialog = None,

            AppEvent::ProfileOpenEditDialog => {
                state.profile.status_message = None;
                state.profile.profile_dialog = Some(
                    crate::app::state::ProfileDialog::prefilled(
                        &state.profile.username,
                        &state.profile.email,
                    ),
                );
            }
            AppEvent::ProfileOpenPinDialog => {
                state.profile.status_message = None;
                state.profile.pin_dialog = Some(crate::app::state::PinChangeDialog::new());
            }
            AppEvent::ProfileToggleNotifications => {
                state.profile.notifications_enabled = !state.profile.notifications_enabled;
            }
            AppEvent::ProfileNextNotification => {
                let len = state.profile.notifications.len();
                if len > 0 {
                    state.profile.selected_notification =
                        (state.profile.selected_notification + 1) % len;
                }
            }
            AppEvent::ProfilePreviousNotification => {
                let len = state.profile.notifications.len();
                if len > 0 {
                    state.profile.selected_notification = state
                        .profile
                        .selected_notification
                        .checked_sub(1)
                        .unwrap_or(len - 1);
                }
            }
            AppEvent::ProfileDialogInputChar(c) => {
                if let Some(dialog) = state.profile.profile_dialog.as_mut() {
                    match dialog.focus {
                        crate::app::state::ProfileField::Username => dialog.username.push(c),
                        crate::app::state::ProfileField::Email => dialog.email.push(c),
                    }
                } else if let Some(dialog) = state.profile.pin_dialog.as_mut() {
                    if let Some(value) = dialog.focused_value_mut() {
                        value.push(c);
                    }
                }
            }
            AppEvent::ProfileDialogBackspace => {
                if let Some(dialog) = state.profile.profile_dialog.as_mut() {
                    match dialog.focus {
                        crate::app::state::ProfileField::Username => {
                            dialog.username.pop();
                        }
                        crate::app::state::ProfileField::Email => {
                            dialog.email.pop();
                        }
                    }
                } else if let Some(dialog) = state.profile.pin_dialog.as_mut() {
                    if let Some(value) = dialog.focused_value_mut() {
                        value.pop();
                    }
                }
            }
            AppEvent::ProfileDialogFocusNext => {
                if let Some(dialog) = state.profile.profile_dialog.as_mut() {
                    dialog.focus_next();
                } else if let Some(dialog) = state.profile.pin_dialog.as_mut() {
                    dialog.focus_next();
                }
            }
            AppEvent::ProfileDialogSubmit => {
                if state.profile.profile_dialog.is_some() {
                    Self::submit_profile_dialog(state);
                } else if state.profile.pin_dialog.is_some() {
                    Self::submit_pin_dialog(state);
                }
            }
            AppEvent::ProfileDialogCancel => {
                state.profile.profile_dialog = None;
                state.profile.pin_dialog = None;
            }

            AppEvent::ParentalNextControl => state.parental.next_control(),
            AppEvent::ParentalPreviousControl => state.parental.previous_control(),
            AppEvent::ParentalToggleControl => state.parental.toggle_selected_control(),
            AppEvent::ParentalOpenAllowanceDialog => {
                state.parental.dialog = Some(crate::app::state::AllowanceDialog {
                    input: format!("{}", state.parental.weekly_allowance),
                });
            }
            AppEvent::ParentalDialogInputChar(c) => {
                if let Some(dialog) = state.parental.dialog.as_mut() {
                    dialog.input.push(c);
                }
            }
            AppEvent::ParentalDialogBackspace => {
                if let Some(dialog) = state.parental.dialog.as_mut() {
                    dialog.input.pop();
                }
            }
            AppEvent::ParentalDialogSubmit => {
                if let Some(dialog) = state.parental.dialog.take() {
                    state.parental.set_allowance_from_input(&dialog.input);
                    info!(allowance = state.parental.weekly_allowance, "allowance updated");
                }
            }
            AppEvent::ParentalDialogCancel => state.parental.dialog = None,
        }
    }

    /// Hand the completed onboarding record to account provisioning.
    /// Treated as a no-op success; a failure is logged but never fatal.
    fn hand_off_account(state: &mut AppState) {
        let details = state.onboarding.account_details();
        if let Err(e) = state.provisioner.provision_account(&details) {
            warn!("account provisioning failed: {e:#}");
        }
    }

    fn submit_goal_dialog(state: &mut AppState) {
        let Some(dialog) = state.tools.dialog.as_mut() else {
            return;
        };
        let record = Record::new()
            .field("goal_name", dialog.goal_name.clone())
            .field("target_amount", dialog.target_amount.clone());
        match validation::validate(SchemaId::SavingsGoal, &record) {
            Ok(()) => {
                let target = dialog.target_amount.trim().parse::<f64>().unwrap_or(0.0);
                let description = format!("Category: {}", dialog.category_label());
                let goal = SavingsGoal::new(dialog.goal_name.clone(), 0.0, target, description);
                state.tools.goals.push(goal);
                state.tools.dialog = None;
            }
            Err(errors) => dialog.errors = errors,
        }
    }

    fn submit_profile_dialog(state: &mut AppState) {
        let Some(dialog) = state.profile.profile_dialog.as_mut() else {
            return;
        };
        let record = Record::new()
            .field("username", dialog.username.clone())
            .field("email", dialog.email.clone());
        match validation::validate(SchemaId::ProfileEdit, &record) {
            Ok(()) => {
                state.profile.username = dialog.username.clone();
                state.profile.email = dialog.email.clone();
                state.profile.profile_dialog = None;
            }
            Err(errors) => dialog.errors = errors,
        }
    }

    fn submit_pin_dialog(state: &mut AppState) {
        let Some(dialog) = state.profile.pin_dialog.as_mut() else {
            return;
        };
        let record = Record::new()
            .field("current_pin", dialog.current_pin.clone())
            .field("new_pin", dialog.new_pin.clone())
            .field("confirm_new_pin", dialog.confirm_new_pin.clone());
        match validation::validate(SchemaId::PinChange, &record) {
            Ok(()) => {
                state.profile.pin_dialog = None;
                state.profile.status_message =
                    Some("PIN changed successfully (demo)!".to_string());
            }
            Err(errors) => dialog.errors = errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let state = AppState::new();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle_key_event(event, &state), Some(AppEvent::Quit));
    }

    #[test]
    fn test_enter_advances_welcome() {
        let mut state = AppState::new();
        let event = EventHandler::handle_key_event(key(KeyCode::Enter), &state);
        assert_eq!(event, Some(AppEvent::OnboardingAdvance));
        EventHandler::process_event(AppEvent::OnboardingAdvance, &mut state);
        assert_eq!(
            state.onboarding.current_step,
            OnboardingStep::PersonalDetails
        );
    }

    #[test]
    fn test_typing_goes_to_form_not_shortcuts() {
        let mut state = AppState::new();
        EventHandler::process_event(AppEvent::OnboardingAdvance, &mut state);

        // 'q' is text input on the personal details step, not quit
        let event = EventHandler::handle_key_event(key(KeyCode::Char('q')), &state);
        assert_eq!(event, Some(AppEvent::OnboardingInputChar('q')));
        EventHandler::process_event(AppEvent::OnboardingInputChar('q'), &mut state);
        assert!(!state.should_quit);
        assert_eq!(state.onboarding.personal.full_name, "q");
    }

    #[test]
    fn test_goal_dialog_submit_appends_goal() {
        let mut state = AppState::new();
        state.switch_view(View::FinancialTools);
        EventHandler::process_event(AppEvent::ToolsOpenGoalDialog, &mut state);
        for c in "Summer Vacation".chars() {
            EventHandler::process_event(AppEvent::ToolsDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ToolsDialogFocusNext, &mut state);
        for c in "500".chars() {
            EventHandler::process_event(AppEvent::ToolsDialogInputChar(c), &mut state);
        }
        let before = state.tools.goals.len();
        EventHandler::process_event(AppEvent::ToolsDialogSubmit, &mut state);
        assert_eq!(state.tools.goals.len(), before + 1);
        assert!(state.tools.dialog.is_none());
        let added = state.tools.goals.last().expect("goal appended");
        assert_eq!(added.title, "Summer Vacation");
        assert!((added.current_amount - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_dialog_rejects_short_name() {
        let mut state = AppState::new();
        state.switch_view(View::FinancialTools);
        EventHandler::process_event(AppEvent::ToolsOpenGoalDialog, &mut state);
        for c in "TV".chars() {
            EventHandler::process_event(AppEvent::ToolsDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ToolsDialogSubmit, &mut state);
        let dialog = state.tools.dialog.as_ref().expect("dialog stays open");
        assert!(!dialog.errors.is_empty());
    }

    #[test]
    fn test_pin_change_dialog_flow() {
        let mut state = AppState::new();
        state.switch_view(View::AccountProfile);
        EventHandler::process_event(AppEvent::ProfileOpenPinDialog, &mut state);
        for c in "1111".chars() {
            EventHandler::process_event(AppEvent::ProfileDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ProfileDialogFocusNext, &mut state);
        for c in "2222".chars() {
            EventHandler::process_event(AppEvent::ProfileDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ProfileDialogFocusNext, &mut state);
        for c in "3333".chars() {
            EventHandler::process_event(AppEvent::ProfileDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ProfileDialogSubmit, &mut state);
        let dialog = state.profile.pin_dialog.as_ref().expect("dialog stays open");
        assert_eq!(dialog.errors.len(), 1);
        assert_eq!(dialog.errors[0].field, "confirm_new_pin");

        // Fix the confirmation and resubmit
        for _ in 0..4 {
            EventHandler::process_event(AppEvent::ProfileDialogBackspace, &mut state);
        }
        for c in "2222".chars() {
            EventHandler::process_event(AppEvent::ProfileDialogInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::ProfileDialogSubmit, &mut state);
        assert!(state.profile.pin_dialog.is_none());
        assert!(state.profile.status_message.is_some());
    }

    #[test]
    fn test_parental_toggle_and_allowance() {
        let mut state = AppState::new();
        state.switch_view(View::ParentalPortal);
        let initial = state.parental.controls[0].active;
        EventHandler::process_event(AppEvent::ParentalToggleControl, &mut state);
        assert_eq!(state.parental.controls[0].active, !initial);

        EventHandler::process_event(AppEvent::ParentalOpenAllowanceDialog, &mut state);
        if let Some(dialog) = state.parental.dialog.as_mut() {
            dialog.input = "15".to_string();
        }
        EventHandler::process_event(AppEvent::ParentalDialogSubmit, &mut state);
        assert!((state.parental.weekly_allowance - 15.0).abs() < f64::EPSILON);
    }
}
