// ABOUTME: Central application state - active view, per-screen state, and dialogs

use crate::collaborators::{
    AccountProvisioner, ConsentNotifier, NoopAccountProvisioner, NoopConsentNotifier,
};
use crate::components::onboarding::{OnboardingState, OnboardingStep};
use crate::models::{
    account::{self, DEMO_BALANCE},
    parental::{self, DEMO_WEEKLY_ALLOWANCE},
    CategorySpend, ChildTransaction, EducationalContent, MonthlyFlow, MonthlySpend, Notification,
    ParentalControl, SavingsGoal, Transaction,
};
use crate::validation::FieldError;

/// The five screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Onboarding,
    Dashboard,
    FinancialTools,
    AccountProfile,
    ParentalPortal,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Onboarding => "Onboarding",
            View::Dashboard => "Dashboard",
            View::FinancialTools => "Financial Tools",
            View::AccountProfile => "Account Profile",
            View::ParentalPortal => "Parental Portal",
        }
    }

    /// The four post-onboarding screens, in tab order.
    pub fn main_screens() -> &'static [View] {
        &[
            View::Dashboard,
            View::FinancialTools,
            View::AccountProfile,
            View::ParentalPortal,
        ]
    }
}

/// Dashboard screen state: fixed mock data plus list selection.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub balance: f64,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<SavingsGoal>,
    pub flows: Vec<MonthlyFlow>,
    pub selected_transaction: usize,
}

impl DashboardState {
    fn new() -> Self {
        Self {
            balance: DEMO_BALANCE,
            transactions: account::demo_transactions(),
            goals: account::demo_dashboard_goals(),
            flows: account::demo_monthly_flows(),
            selected_transaction: 0,
        }
    }

    pub fn next_transaction(&mut self) {
        if !self.transactions.is_empty() {
            self.selected_transaction =
                (self.selected_transaction + 1) % self.transactions.len();
        }
    }

    pub fn previous_transaction(&mut self) {
        if !self.transactions.is_empty() {
            self.selected_transaction = self
                .selected_transaction
                .checked_sub(1)
                .unwrap_or(self.transactions.len() - 1);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolsTab {
    Savings,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Name,
    Amount,
    Category,
}

/// Optional categories offered by the add-goal dialog.
pub const GOAL_CATEGORIES: &[&str] = &["Travel", "Gadget", "Event", "Other"];

/// Add-goal dialog on the financial tools screen.
#[derive(Debug, Clone)]
pub struct GoalDialog {
    pub goal_name: String,
    pub target_amount: String,
    pub category: Option<usize>,
    pub focus: GoalField,
    pub errors: Vec<FieldError>,
}

impl GoalDialog {
    pub fn new() -> Self {
        Self {
            goal_name: String::new(),
            target_amount: String::new(),
            category: None,
            focus: GoalField::Name,
            errors: Vec::new(),
        }
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map_or("General", |i| GOAL_CATEGORIES[i])
    }

    pub fn cycle_category(&mut self) {
        self.category = Some(self.category.map_or(0, |i| (i + 1) % GOAL_CATEGORIES.len()));
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            GoalField::Name => GoalField::Amount,
            GoalField::Amount => GoalField::Category,
            GoalField::Category => GoalField::Name,
        };
    }
}

impl Default for GoalDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Financial tools screen state.
#[derive(Debug, Clone)]
pub struct ToolsState {
    pub tab: ToolsTab,
    pub goals: Vec<SavingsGoal>,
    pub breakdown: Vec<CategorySpend>,
    pub content: Vec<EducationalContent>,
    pub selected_goal: usize,
    pub dialog: Option<GoalDialog>,
}

impl ToolsState {
    fn new() -> Self {
        Self {
            tab: ToolsTab::Savings,
            goals: account::demo_tools_goals(),
            breakdown: account::demo_spending_breakdown(),
            content: account::demo_educational_content(),
            selected_goal: 0,
            dialog: None,
        }
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            ToolsTab::Savings => ToolsTab::Insights,
            ToolsTab::Insights => ToolsTab::Savings,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
}

/// Edit-profile dialog.
#[derive(Debug, Clone)]
pub struct ProfileDialog {
    pub username: String,
    pub email: String,
    pub focus: ProfileField,
    pub errors: Vec<FieldError>,
}

impl ProfileDialog {
    pub fn prefilled(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            focus: ProfileField::Username,
            errors: Vec::new(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ProfileField::Username => ProfileField::Email,
            ProfileField::Email => ProfileField::Username,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinChangeField {
    Current,
    New,
    ConfirmNew,
}

/// Change-PIN dialog.
#[derive(Debug, Clone, Default)]
pub struct PinChangeDialog {
    pub current_pin: String,
    pub new_pin: String,
    pub confirm_new_pin: String,
    pub focus: Option<PinChangeField>,
    pub errors: Vec<FieldError>,
}

impl PinChangeDialog {
    pub fn new() -> Self {
        Self {
            focus: Some(PinChangeField::Current),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Some(PinChangeField::Current) => Some(PinChangeField::New),
            Some(PinChangeField::New) => Some(PinChangeField::ConfirmNew),
            _ => Some(PinChangeField::Current),
        };
    }

    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(PinChangeField::Current) => Some(&mut self.current_pin),
            Some(PinChangeField::New) => Some(&mut self.new_pin),
            Some(PinChangeField::ConfirmNew) => Some(&mut self.confirm_new_pin),
            None => None,
        }
    }
}

/// Account profile screen state.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub display_name: String,
    pub username: String,
    pub email: String,
    pub member_since: String,
    pub notifications_enabled: bool,
    pub notifications: Vec<Notification>,
    pub selected_notification: usize,
    pub profile_dialog: Option<ProfileDialog>,
    pub pin_dialog: Option<PinChangeDialog>,
    /// Transient confirmation after a successful PIN change.
    pub status_message: Option<String>,
}

impl ProfileState {
    fn new() -> Self {
        Self {
            display_name: "Alex Ryder".to_string(),
            username: "YouthUser123".to_string(),
            email: "alex.ryder@example.com".to_string(),
            member_since: "January 1, 2024".to_string(),
            notifications_enabled: true,
            notifications: account::demo_notifications(),
            selected_notification: 0,
            profile_dialog: None,
            pin_dialog: None,
            status_message: None,
        }
    }
}

/// Adjust-allowance dialog on the parental portal.
#[derive(Debug, Clone, Default)]
pub struct AllowanceDialog {
    pub input: String,
}

/// Parental portal screen state.
#[derive(Debug, Clone)]
pub struct ParentalState {
    pub child_name: String,
    pub balance: f64,
    pub weekly_allowance: f64,
    pub controls: Vec<ParentalControl>,
    pub activity: Vec<ChildTransaction>,
    pub monthly: Vec<MonthlySpend>,
    pub selected_control: usize,
    pub dialog: Option<AllowanceDialog>,
}

impl ParentalState {
    fn new() -> Self {
        Self {
            child_name: "Alex Ryder".to_string(),
            balance: DEMO_BALANCE,
            weekly_allowance: DEMO_WEEKLY_ALLOWANCE,
            controls: parental::demo_controls(),
            activity: parental::demo_child_activity(),
            monthly: parental::demo_monthly_spend(),
            selected_control: 0,
            dialog: None,
        }
    }

    pub fn next_control(&mut self) {
        if !self.controls.is_empty() {
            self.selected_control = (self.selected_control + 1) % self.controls.len();
        }
    }

    pub fn previous_control(&mut self) {
        if !self.controls.is_empty() {
            self.selected_control = self
                .selected_control
                .checked_sub(1)
                .unwrap_or(self.controls.len() - 1);
        }
    }

    pub fn toggle_selected_control(&mut self) {
        if let Some(control) = self.controls.get_mut(self.selected_control) {
            control.toggle();
        }
    }

    /// Commit the allowance dialog. Non-numeric input falls back to zero,
    /// matching the reference behavior.
    pub fn set_allowance_from_input(&mut self, input: &str) {
        self.weekly_allowance = input.trim().parse::<f64>().unwrap_or(0.0);
    }
}

/// Top-level application state, owned by the single TUI instance.
pub struct AppState {
    pub current_view: View,
    pub should_quit: bool,
    pub help_visible: bool,
    pub onboarding: OnboardingState,
    pub dashboard: DashboardState,
    pub tools: ToolsState,
    pub profile: ProfileState,
    pub parental: ParentalState,
    pub consent_notifier: Box<dyn ConsentNotifier>,
    pub provisioner: Box<dyn AccountProvisioner>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_collaborators(
            Box::new(NoopConsentNotifier),
            Box::new(NoopAccountProvisioner),
        )
    }

    pub fn with_collaborators(
        consent_notifier: Box<dyn ConsentNotifier>,
        provisioner: Box<dyn AccountProvisioner>,
    ) -> Self {
        Self {
            current_view: View::Onboarding,
            should_quit: false,
            help_visible: false,
            onboarding: OnboardingState::new(),
            dashboard: DashboardState::new(),
            tools: ToolsState::new(),
            profile: ProfileState::new(),
            parental: ParentalState::new(),
            consent_notifier,
            provisioner,
        }
    }

    /// Start directly on a main screen, skipping the wizard (demo flag).
    pub fn skip_onboarding(&mut self, screen: View) {
        self.current_view = screen;
    }

    pub fn switch_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Cycle through the main screens in tab order. No-op during onboarding.
    pub fn next_view(&mut self) {
        let screens = View::main_screens();
        if let Some(pos) = screens.iter().position(|v| *v == self.current_view) {
            self.current_view = screens[(pos + 1) % screens.len()];
        }
    }

    pub fn previous_view(&mut self) {
        let screens = View::main_screens();
        if let Some(pos) = screens.iter().position(|v| *v == self.current_view) {
            self.current_view = screens[pos.checked_sub(1).unwrap_or(screens.len() - 1)];
        }
    }

    /// Whether a text field is currently capturing keystrokes. Global
    /// single-letter shortcuts are suspended while this is true.
    pub fn text_input_active(&self) -> bool {
        match self.current_view {
            View::Onboarding => matches!(
                self.onboarding.current_step,
                OnboardingStep::PersonalDetails | OnboardingStep::PinSetup
            ) || self.onboarding.consent.editing_contact,
            View::FinancialTools => self.tools.dialog.is_some(),
            View::AccountProfile => {
                self.profile.profile_dialog.is_some() || self.profile.pin_dialog.is_some()
            }
            View::ParentalPortal => self.parental.dialog.is_some(),
            View::Dashboard => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Onboarding);
        assert!(!state.should_quit);
        assert!(!state.help_visible);
    }

    #[test]
    fn test_view_cycling_skips_onboarding() {
        let mut state = AppState::new();
        state.switch_view(View::Dashboard);
        state.next_view();
        assert_eq!(state.current_view, View::FinancialTools);
        state.previous_view();
        assert_eq!(state.current_view, View::Dashboard);
        state.previous_view();
        assert_eq!(state.current_view, View::ParentalPortal);
    }

    #[test]
    fn test_allowance_fallback_to_zero() {
        let mut state = ParentalState::new();
        state.set_allowance_from_input("12.5");
        assert!((state.weekly_allowance - 12.5).abs() < f64::EPSILON);
        state.set_allowance_from_input("not a number");
        assert!((state.weekly_allowance - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_control_selection_wraps() {
        let mut state = ParentalState::new();
        assert_eq!(state.selected_control, 0);
        state.previous_control();
        assert_eq!(state.selected_control, state.controls.len() - 1);
        state.next_control();
        assert_eq!(state.selected_control, 0);
    }

    #[test]
    fn test_goal_dialog_category_cycle() {
        let mut dialog = GoalDialog::new();
        assert_eq!(dialog.category_label(), "General");
        dialog.cycle_category();
        assert_eq!(dialog.category_label(), "Travel");
        for _ in 0..GOAL_CATEGORIES.len() {
            dialog.cycle_category();
        }
        assert_eq!(dialog.category_label(), "Travel");
    }
}
