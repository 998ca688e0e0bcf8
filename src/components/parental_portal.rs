// ABOUTME: Parental portal screen - child summary, allowance, controls, activity, spending chart

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{AllowanceDialog, ParentalState};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct ParentalPortalComponent;

impl ParentalPortalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ParentalState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Child summary + allowance
                Constraint::Length(7),  // Quick controls
                Constraint::Min(6),     // Activity table
                Constraint::Length(9),  // Monthly spending chart
            ])
            .split(area);

        self.render_summary(frame, rows[0], state);
        self.render_controls(frame, rows[1], state);
        self.render_activity(frame, rows[2], state);
        self.render_chart(frame, rows[3], state);

        if let Some(dialog) = &state.dialog {
            self.render_allowance_dialog(frame, area, dialog);
        }
    }

    fn panel(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &ParentalState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let child_block = self.panel(" Child Account ");
        let child_inner = child_block.inner(columns[0]);
        frame.render_widget(child_block, columns[0]);
        let child = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    state.child_name.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled("'s account", Style::default().fg(MUTED_GRAY)),
            ]),
            Line::from(vec![
                Span::styled("Balance: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("£{:.2}", state.balance),
                    Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Last activity: today", Style::default().fg(MUTED_GRAY)),
            ]),
        ]);
        frame.render_widget(child, child_inner);

        let allowance_block = self.panel(" Weekly Allowance ");
        let allowance_inner = allowance_block.inner(columns[1]);
        frame.render_widget(allowance_block, columns[1]);
        let allowance = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("£{:.2} per week", state.weekly_allowance),
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("[a]", Style::default().fg(GOLD)),
                Span::styled(" adjust allowance", Style::default().fg(MUTED_GRAY)),
            ]),
        ]);
        frame.render_widget(allowance, allowance_inner);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &ParentalState) {
        let block = self.panel(" Quick Controls ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<ListItem> = state
            .controls
            .iter()
            .enumerate()
            .map(|(idx, control)| {
                let selected = idx == state.selected_control;
                let status_color = if control.active { SELECTION_GREEN } else { MUTED_GRAY };
                let mut spans = vec![
                    Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                    Span::styled(
                        if control.active { "[on ] " } else { "[off] " },
                        Style::default().fg(status_color),
                    ),
                    Span::styled(
                        format!("{:<22}", control.label),
                        Style::default().fg(SOFT_WHITE),
                    ),
                    Span::styled(control.description.clone(), Style::default().fg(MUTED_GRAY)),
                ];
                if let Some(limit) = control.limit {
                    spans.push(Span::styled(
                        format!("  (£{limit:.0}/day)"),
                        Style::default().fg(CORNFLOWER_BLUE),
                    ));
                }
                let item = ListItem::new(Line::from(spans));
                if selected {
                    item.style(Style::default().bg(HIGHLIGHT_BG))
                } else {
                    item
                }
            })
            .collect();
        frame.render_widget(List::new(items), inner);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, state: &ParentalState) {
        let block = self.panel(" Recent Activity ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.activity.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No activity to show.",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{:<12}", "Date"), Style::default().fg(MUTED_GRAY)),
            Span::styled(format!("{:<20}", "Description"), Style::default().fg(MUTED_GRAY)),
            Span::styled("Amount", Style::default().fg(MUTED_GRAY)),
        ])];
        for tx in &state.activity {
            let amount_color = if tx.kind.is_income() { SELECTION_GREEN } else { ERROR_RED };
            let sign = if tx.kind.is_income() { "+" } else { "-" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<12}", tx.date.format("%Y-%m-%d")),
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled(
                    format!("{:<20}", tx.description),
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled(
                    format!("{sign}£{:.2}", tx.amount),
                    Style::default().fg(amount_color),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &ParentalState) {
        let block = self.panel(" Monthly Spending ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut chart = BarChart::default()
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(CORNFLOWER_BLUE))
            .value_style(Style::default().fg(SOFT_WHITE));

        for month in &state.monthly {
            let group = BarGroup::default().bars(&[Bar::default()
                .value(month.spent)
                .label(Line::from(Span::styled(
                    month.month,
                    Style::default().fg(MUTED_GRAY),
                )))
                .style(Style::default().fg(CORNFLOWER_BLUE))]);
            chart = chart.data(group);
        }

        frame.render_widget(chart, inner);
    }

    fn render_allowance_dialog(&self, frame: &mut Frame, area: Rect, dialog: &AllowanceDialog) {
        let width = area.width.min(42);
        let height = 7u16.min(area.height);
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
            .title(" Adjust Weekly Allowance ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let field = Paragraph::new(vec![
            Line::from(Span::styled("New amount (£)", Style::default().fg(MUTED_GRAY))),
            Line::from(Span::styled(
                format!("{}│", dialog.input),
                Style::default().fg(GOLD),
            )),
        ]);
        frame.render_widget(field, rows[0]);

        let hint = Paragraph::new(Span::styled(
            "Enter save • Esc cancel",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[1]);
    }
}

impl Default for ParentalPortalComponent {
    fn default() -> Self {
        Self::new()
    }
}
