// ABOUTME: Account-side mock data models for dashboard, tools, and profile screens

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn indicator(&self) -> &'static str {
        match self {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
            TransactionKind::Transfer => "⇄",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, TransactionKind::Income)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub kind: TransactionKind,
    pub category: Option<String>,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: DateTime<Utc>,
        kind: TransactionKind,
        category: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            kind,
            category: category.map(String::from),
        }
    }

    /// Signed display amount, e.g. "+£20.00" or "-£3.50".
    pub fn format_amount(&self) -> String {
        format!("{}£{:.2}", self.kind.indicator(), self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub title: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub description: String,
}

impl SavingsGoal {
    pub fn new(
        title: impl Into<String>,
        current_amount: f64,
        target_amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            current_amount,
            target_amount,
            description: description.into(),
        }
    }

    /// Progress toward the target, clamped to [0, 1] for gauge display.
    pub fn fraction(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount).clamp(0.0, 1.0)
    }

    pub fn format_progress(&self) -> String {
        format!("£{:.0} of £{:.0}", self.current_amount, self.target_amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub read: bool,
    pub age: String,
}

/// One month of income vs. spending for the dashboard chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub month: &'static str,
    pub income: u64,
    pub spending: u64,
}

/// One spending category slice for the insights breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalContent {
    pub title: String,
    pub summary: String,
    pub category: String,
}

/// Demo balance shown on the dashboard and the parental portal.
pub const DEMO_BALANCE: f64 = 66.50;

pub fn demo_transactions() -> Vec<Transaction> {
    let now = Utc::now();
    vec![
        Transaction::new(
            "Pocket Money",
            20.00,
            now,
            TransactionKind::Income,
            Some("Allowance"),
        ),
        Transaction::new(
            "Ice Cream",
            3.50,
            now - Duration::days(1),
            TransactionKind::Expense,
            Some("Food"),
        ),
        Transaction::new(
            "Birthday Gift",
            50.00,
            now - Duration::days(2),
            TransactionKind::Income,
            Some("Gifts"),
        ),
    ]
}

pub fn demo_dashboard_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal::new(
            "New Video Game",
            35.0,
            60.0,
            "Saving up for the latest release!",
        ),
        SavingsGoal::new("Summer Trip Fund", 150.0, 500.0, "Adventure awaits!"),
    ]
}

pub fn demo_tools_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal::new("New Headphones", 75.0, 150.0, "For better music quality"),
        SavingsGoal::new("Concert Tickets", 20.0, 100.0, "My favorite band!"),
    ]
}

pub fn demo_monthly_flows() -> Vec<MonthlyFlow> {
    vec![
        MonthlyFlow { month: "Jan", income: 80, spending: 50 },
        MonthlyFlow { month: "Feb", income: 90, spending: 70 },
        MonthlyFlow { month: "Mar", income: 75, spending: 60 },
        MonthlyFlow { month: "Apr", income: 100, spending: 80 },
    ]
}

pub fn demo_spending_breakdown() -> Vec<CategorySpend> {
    vec![
        CategorySpend { category: "Food".to_string(), amount: 400 },
        CategorySpend { category: "Entertainment".to_string(), amount: 300 },
        CategorySpend { category: "Transport".to_string(), amount: 200 },
        CategorySpend { category: "Shopping".to_string(), amount: 250 },
    ]
}

pub fn demo_educational_content() -> Vec<EducationalContent> {
    vec![
        EducationalContent {
            title: "Understanding Budgets".to_string(),
            summary: "Learn how to create a simple budget to manage your money effectively and save more.".to_string(),
            category: "Budgeting".to_string(),
        },
        EducationalContent {
            title: "The Power of Saving Early".to_string(),
            summary: "Discover why starting to save early can make a big difference in your financial future.".to_string(),
            category: "Saving Tips".to_string(),
        },
    ]
}

pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            title: "New Badge Unlocked!".to_string(),
            message: "You've earned the 'Super Saver' badge.".to_string(),
            read: false,
            age: "2 days ago".to_string(),
        },
        Notification {
            title: "Weekly Summary".to_string(),
            message: "Your weekly spending report is ready.".to_string(),
            read: true,
            age: "5 days ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_fraction_clamped() {
        let goal = SavingsGoal::new("Over", 120.0, 100.0, "past target");
        assert!((goal.fraction() - 1.0).abs() < f64::EPSILON);

        let goal = SavingsGoal::new("Zero target", 10.0, 0.0, "degenerate");
        assert!((goal.fraction() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transaction_amount_formatting() {
        let tx = Transaction::new("Ice Cream", 3.5, Utc::now(), TransactionKind::Expense, None);
        assert_eq!(tx.format_amount(), "-£3.50");

        let tx = Transaction::new("Pocket Money", 20.0, Utc::now(), TransactionKind::Income, None);
        assert_eq!(tx.format_amount(), "+£20.00");
    }

    #[test]
    fn test_demo_data_shapes() {
        assert_eq!(demo_transactions().len(), 3);
        assert_eq!(demo_monthly_flows().len(), 4);
        assert_eq!(demo_spending_breakdown().len(), 4);
    }

    #[test]
    fn test_transaction_serializes_round_trip() {
        let tx = Transaction::new(
            "Ice Cream",
            3.5,
            Utc::now(),
            TransactionKind::Expense,
            Some("Food"),
        );
        let json = serde_json::to_string(&tx).expect("serializes");
        let back: Transaction = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back.id, tx.id);
        assert_eq!(back.description, "Ice Cream");
        assert_eq!(back.kind, TransactionKind::Expense);
    }
}
