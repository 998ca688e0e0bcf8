// ABOUTME: UI components for the TUI interface - one per screen, plus layout and help

pub mod account_profile;
pub mod dashboard;
pub mod financial_tools;
pub mod help;
pub mod layout;
pub mod onboarding;
pub mod parental_portal;
pub mod theme;

pub use account_profile::AccountProfileComponent;
pub use dashboard::DashboardComponent;
pub use financial_tools::FinancialToolsComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
pub use parental_portal::ParentalPortalComponent;
