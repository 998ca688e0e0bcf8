// ABOUTME: Main layout component routing views to screen components and the menu bar

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{
    AccountProfileComponent, DashboardComponent, FinancialToolsComponent, HelpComponent,
    OnboardingComponent, ParentalPortalComponent,
};
use crate::app::{state::View, AppState};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct LayoutComponent {
    onboarding: OnboardingComponent,
    dashboard: DashboardComponent,
    financial_tools: FinancialToolsComponent,
    account_profile: AccountProfileComponent,
    parental_portal: ParentalPortalComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            onboarding: OnboardingComponent::new(),
            dashboard: DashboardComponent::new(),
            financial_tools: FinancialToolsComponent::new(),
            account_profile: AccountProfileComponent::new(),
            parental_portal: ParentalPortalComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        // The onboarding wizard takes over the full screen
        if state.current_view == View::Onboarding {
            self.onboarding.render(frame, frame.size(), &state.onboarding);
            if state.help_visible {
                self.help.render(frame, frame.size());
            }
            return;
        }

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Screen tab bar
                Constraint::Min(0),    // Active screen
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        self.render_screen_bar(frame, main_layout[0], state);

        match state.current_view {
            View::Onboarding => {}
            View::Dashboard => self.dashboard.render(frame, main_layout[1], &state.dashboard),
            View::FinancialTools => {
                self.financial_tools.render(frame, main_layout[1], &state.tools);
            }
            View::AccountProfile => {
                self.account_profile.render(frame, main_layout[1], &state.profile);
            }
            View::ParentalPortal => {
                self.parental_portal.render(frame, main_layout[1], &state.parental);
            }
        }

        self.render_menu_bar(frame, main_layout[2]);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_screen_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans: Vec<Span> = vec![Span::styled("🌱 ", Style::default().fg(GOLD))];
        for (idx, screen) in View::main_screens().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            }
            let active = *screen == state.current_view;
            spans.push(Span::styled(
                format!("{} ", idx + 1),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                screen.title(),
                if active {
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
        }

        let bar = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(DARK_BG)),
            )
            .alignment(Alignment::Left);
        frame.render_widget(bar, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let spans = vec![
            Span::styled("Tab", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" next screen ", Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" 1-4", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" jump ", Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" ?", Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)),
            Span::styled(" help ", Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" q", Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)),
            Span::styled(" quit", Style::default().fg(MUTED_GRAY)),
        ];

        let menu = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
