// ABOUTME: Mock data models backing the demo screens

pub mod account;
pub mod parental;

pub use account::{
    CategorySpend, EducationalContent, MonthlyFlow, Notification, SavingsGoal, Transaction,
    TransactionKind,
};
pub use parental::{ChildTransaction, ControlId, MonthlySpend, ParentalControl};
