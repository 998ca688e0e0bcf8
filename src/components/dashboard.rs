// ABOUTME: Dashboard screen - balance, savings goals, recent transactions, spending chart

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, List, ListItem},
    widgets::Paragraph,
    Frame,
};

use crate::app::state::DashboardState;
use crate::components::theme::{
    CORNFLOWER_BLUE, ERROR_RED, GOLD, HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG, SELECTION_GREEN,
    SOFT_WHITE, SUBDUED_BORDER,
};

pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Balance header
                Constraint::Length(8),  // Savings goals
                Constraint::Min(7),     // Transactions
                Constraint::Length(10), // Spending chart
            ])
            .split(area);

        self.render_balance(frame, rows[0], state);
        self.render_goals(frame, rows[1], state);
        self.render_transactions(frame, rows[2], state);
        self.render_chart(frame, rows[3], state);
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

    fn render_balance(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = self.panel(" Account Balance ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled("Welcome Back!  ", Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!("£{:.2}", state.balance),
                    Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Your current available funds. Last updated: just now",
                Style::default().fg(MUTED_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_goals(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = self.panel(" Savings Goals ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.goals.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No savings goals yet!",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let constraints: Vec<Constraint> =
            state.goals.iter().map(|_| Constraint::Length(3)).collect();
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
                .gauge_style(Style::default().fg(SELECTION_GREEN).bg(SUBDUED_BORDER))
                .ratio(goal.fraction())
                .label(Span::styled(
                    goal.format_progress(),
                    Style::default().fg(SOFT_WHITE),
                ));
            frame.render_widget(gauge, parts[1]);
        }
    }

    fn render_transactions(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = self.panel(" Recent Transactions ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.transactions.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled("No transactions yet!", Style::default().fg(MUTED_GRAY))),
                Line::from(Span::styled(
                    "Your activity will appear here.",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = state
            .transactions
            .iter()
            .enumerate()
            .map(|(idx, tx)| {
                let selected = idx == state.selected_transaction;
                let amount_color = if tx.kind.is_income() { SELECTION_GREEN } else { ERROR_RED };
                let line = Line::from(vec![
                    Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                    Span::styled(
                        format!("{:<16}", tx.description),
                        Style::default().fg(SOFT_WHITE),
                    ),
                    Span::styled(
                        format!("{:<12}", tx.category.as_deref().unwrap_or("-")),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    Span::styled(
                        format!("{:<12}", tx.date.format("%Y-%m-%d")),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    Span::styled(tx.format_amount(), Style::default().fg(amount_color)),
                ]);
                let item = ListItem::new(line);
                if selected {
                    item.style(Style::default().bg(HIGHLIGHT_BG))
                } else {
                    item
                }
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = self.panel(" Spending Overview (income vs. spending) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut chart = BarChart::default()
            .bar_width(5)
            .bar_gap(1)
            .group_gap(3)
            .bar_style(Style::default().fg(SELECTION_GREEN))
            .value_style(Style::default().fg(SOFT_WHITE));

        for flow in &state.flows {
            let group = BarGroup::default()
                .label(Line::from(Span::styled(
                    flow.month,
                    Style::default().fg(MUTED_GRAY),
                )))
                .bars(&[
                    Bar::default()
                        .value(flow.income)
                        .style(Style::default().fg(SELECTION_GREEN)),
                    Bar::default()
                        .value(flow.spending)
                        .style(Style::default().fg(ERROR_RED)),
                ]);
            chart = chart.data(group);
        }

        frame.render_widget(chart, inner);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
