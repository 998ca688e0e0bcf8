// ABOUTME: Financial tools screen - savings goals with add-goal dialog, spending insights

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::app::state::{GoalField, ToolsState, ToolsTab};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};

pub struct FinancialToolsComponent;

impl FinancialToolsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ToolsState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10)])
            .split(area);

        let titles = vec![
            Line::from("My Savings"),
            Line::from("Spending Insights"),
        ];
        let selected = match state.tab {
            ToolsTab::Savings => 0,
            ToolsTab::Insights => 1,
        };
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(SUBDUED_BORDER)),
            );
        frame.render_widget(tabs, rows[0]);

        match state.tab {
            ToolsTab::Savings => self.render_savings(frame, rows[1], state),
            ToolsTab::Insights => self.render_insights(frame, rows[1], state),
        }

        if let Some(dialog) = &state.dialog {
            self.render_goal_dialog(frame, area, dialog);
        }
    }

    fn render_savings(&self, frame: &mut Frame, area: Rect, state: &ToolsState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(" Your Savings Goals ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.goals.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No savings goals yet. Press n to create one!",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let mut constraints: Vec<Constraint> =
            state.goals.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(1));
        let goal_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (goal, row) in state.goals.iter().zip(goal_rows.iter()) {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(*row);

            let label = Paragraph::new(Line::from(vec![
                Span::styled(goal.title.clone(), Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!("  {}", goal.description),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]));
            frame.render_widget(label, parts[0]);

            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(SUBDUED_BORDER))
                .ratio(goal.fraction())
                .label(Span::styled(
                    goal.format_progress(),
                    Style::default().fg(SOFT_WHITE),
                ));
            frame.render_widget(gauge, parts[1]);
        }

        if let Some(last) = goal_rows.last() {
            let hint = Paragraph::new(Span::styled(
                "Press n to add a new goal",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, *last);
        }
    }

    fn render_insights(&self, frame: &mut Frame, area: Rect, state: &ToolsState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        self.render_breakdown(frame, columns[0], state);
        self.render_education(frame, columns[1], state);
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, state: &ToolsState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(" Spending Breakdown ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let total: u64 = state.breakdown.iter().map(|c| c.amount).sum();
        let mut lines = vec![Line::from("")];
        for slice in &state.breakdown {
            let share = if total == 0 {
                0.0
            } else {
                slice.amount as f64 / total as f64
            };
            let filled = (share * 20.0).round() as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", slice.category),
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(CORNFLOWER_BLUE),
                ),
                Span::styled(
                    format!(" £{} ({:.0}%)", slice.amount, share * 100.0),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_education(&self, frame: &mut Frame, area: Rect, state: &ToolsState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(" Learn & Grow ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for content in &state.content {
            lines.push(Line::from(vec![
                Span::styled("📖 ", Style::default()),
                Span::styled(
                    content.title.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", content.category),
                    Style::default().fg(CORNFLOWER_BLUE),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                content.summary.clone(),
                Style::default().fg(MUTED_GRAY),
            )));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }), inner);
    }

    fn render_goal_dialog(
        &self,
        frame: &mut Frame,
        area: Rect,
        dialog: &crate::app::state::GoalDialog,
    ) {
        let width = area.width.min(50);
        let height = 16u16.min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(DARK_BG))
            .title(" Create a New Savings Goal ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Name
                Constraint::Length(1), // Name error
                Constraint::Length(2), // Amount
                Constraint::Length(1), // Amount error
                Constraint::Length(2), // Category
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Hint
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_dialog_field(
            frame,
            rows[0],
            "Goal Name",
            &dialog.goal_name,
            dialog.focus == GoalField::Name,
        );
        self.render_dialog_error(frame, rows[1], dialog, "goal_name");
        self.render_dialog_field(
            frame,
            rows[2],
            "Target Amount (£)",
            &dialog.target_amount,
            dialog.focus == GoalField::Amount,
        );
        self.render_dialog_error(frame, rows[3], dialog, "target_amount");

        let category_focused = dialog.focus == GoalField::Category;
        let category = Paragraph::new(Line::from(vec![
            Span::styled("Category: ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                dialog.category_label(),
                if category_focused {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SELECTION_GREEN)
                },
            ),
            Span::styled(
                if category_focused { "  (↑/↓ cycles)" } else { "" },
                Style::default().fg(MUTED_GRAY),
            ),
        ]));
        frame.render_widget(category, rows[4]);

        let hint = Paragraph::new(Span::styled(
            "Tab next field • Enter create goal • Esc cancel",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[6]);
    }

    fn render_dialog_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let display = if focused { format!("{value}│") } else { value.to_string() };
        let field = Paragraph::new(vec![
            Line::from(Span::styled(label.to_string(), Style::default().fg(MUTED_GRAY))),
            Line::from(Span::styled(
                display,
                if focused {
                    Style::default().fg(GOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                },
            )),
        ]);
        frame.render_widget(field, area);
    }

    fn render_dialog_error(
        &self,
        frame: &mut Frame,
        area: Rect,
        dialog: &crate::app::state::GoalDialog,
        field: &str,
    ) {
        if let Some(error) = dialog.errors.iter().find(|e| e.field == field) {
            let widget = Paragraph::new(Span::styled(
                error.message.clone(),
                Style::default().fg(ERROR_RED),
            ));
            frame.render_widget(widget, area);
        }
    }
}

impl Default for FinancialToolsComponent {
    fn default() -> Self {
        Self::new()
    }
}
