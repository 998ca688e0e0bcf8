// ABOUTME: Parental portal mock data models - controls, allowance, child activity

#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlId {
    DailyLimit,
    OnlinePayments,
    AtmWithdrawals,
}

impl ControlId {
    pub fn is_limit(&self) -> bool {
        matches!(self, ControlId::DailyLimit)
    }
}

/// A single parental control toggle, optionally carrying a limit value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentalControl {
    pub id: ControlId,
    pub label: String,
    pub description: String,
    pub active: bool,
    pub limit: Option<f64>,
}

impl ParentalControl {
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "on" } else { "off" }
    }
}

/// A row in the child activity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// One month of child spending for the portal chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub month: &'static str,
    pub spent: u64,
}

/// Starting weekly allowance in the demo.
pub const DEMO_WEEKLY_ALLOWANCE: f64 = 10.0;

pub fn demo_controls() -> Vec<ParentalControl> {
    vec![
        ParentalControl {
            id: ControlId::DailyLimit,
            label: "Daily Spending Limit".to_string(),
            description: "Max amount child can spend per day.".to_string(),
            active: true,
            limit: Some(20.0),
        },
        ParentalControl {
            id: ControlId::OnlinePayments,
            label: "Online Payments".to_string(),
            description: "Allow or block online transactions.".to_string(),
            active: false,
            limit: None,
        },
        ParentalControl {
            id: ControlId::AtmWithdrawals,
            label: "ATM Withdrawals".to_string(),
            description: "Enable or disable cash withdrawals.".to_string(),
            active: true,
            limit: None,
        },
    ]
}

pub fn demo_child_activity() -> Vec<ChildTransaction> {
    vec![
        ChildTransaction {
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap_or_default(),
            description: "Bookstore".to_string(),
            amount: 15.99,
            kind: TransactionKind::Expense,
        },
        ChildTransaction {
            date: NaiveDate::from_ymd_opt(2024, 7, 19).unwrap_or_default(),
            description: "Weekly Allowance".to_string(),
            amount: 10.00,
            kind: TransactionKind::Income,
        },
        ChildTransaction {
            date: NaiveDate::from_ymd_opt(2024, 7, 18).unwrap_or_default(),
            description: "Cinema Ticket".to_string(),
            amount: 8.50,
            kind: TransactionKind::Expense,
        },
    ]
}

pub fn demo_monthly_spend() -> Vec<MonthlySpend> {
    vec![
        MonthlySpend { month: "Jan", spent: 30 },
        MonthlySpend { month: "Feb", spent: 45 },
        MonthlySpend { month: "Mar", spent: 20 },
        MonthlySpend { month: "Apr", spent: 50 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_toggle() {
        let mut control = demo_controls().remove(1);
        assert!(!control.active);
        control.toggle();
        assert!(control.active);
        assert_eq!(control.status_label(), "on");
    }

    #[test]
    fn test_demo_activity_shape() {
        let activity = demo_child_activity();
        assert_eq!(activity.len(), 3);
        assert!(activity[1].kind.is_income());
    }
}
