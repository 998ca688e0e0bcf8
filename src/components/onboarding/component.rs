// ABOUTME: Onboarding wizard rendering component
// Renders step-based wizard UI with progress header and navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use super::state::{ConsentPath, OnboardingState, OnboardingStep, PersonalField, PinField};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER, WARNING_YELLOW,
};

/// The main onboarding wizard component
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // Header with progress
                Constraint::Min(12),    // Step content
                Constraint::Length(3),  // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_navigation(frame, layout[2], state);
    }

    /// Render the header with title, step dots, and a progress gauge
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step dots
                Constraint::Length(1), // Progress gauge
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🌱 ", Style::default()),
            Span::styled(
                "SproutPay Onboarding",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_step_dots(frame, header_layout[1], state);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(SUBDUED_BORDER))
            .ratio(state.progress())
            .label(Span::styled(
                format!("{}/{}", state.current_step.number(), OnboardingStep::total()),
                Style::default().fg(SOFT_WHITE),
            ));
        frame.render_widget(gauge, header_layout[2]);
    }

    /// Render step progress dots
    fn render_step_dots(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let steps = OnboardingStep::all();
        let current_idx = state.current_step.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(dots, area);
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        match state.current_step {
            OnboardingStep::Welcome => self.render_welcome(frame, area),
            OnboardingStep::PersonalDetails => self.render_personal_details(frame, area, state),
            OnboardingStep::ParentalConsent => self.render_consent(frame, area, state),
            OnboardingStep::IdentityVerification => self.render_identity(frame, area),
            OnboardingStep::PinSetup => self.render_pin_setup(frame, area, state),
            OnboardingStep::Complete => self.render_complete(frame, area),
        }
    }

    fn step_block(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    /// A bordered single-line input with inline error underneath
    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        masked: bool,
        error: Option<&str>,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input box
                Constraint::Length(1), // Error line
            ])
            .split(area);

        let label_widget = Paragraph::new(Span::styled(
            label.to_string(),
            Style::default().fg(SOFT_WHITE),
        ));
        frame.render_widget(label_widget, rows[0]);

        let display = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let display = if focused { format!("{display}│") } else { display };

        let border_color = if error.is_some() {
            ERROR_RED
        } else if focused {
            GOLD
        } else {
            SUBDUED_BORDER
        };

        let input = Paragraph::new(display)
            .style(Style::default().fg(SOFT_WHITE))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(DARK_BG)),
            );
        frame.render_widget(input, rows[1]);

        if let Some(message) = error {
            let error_widget = Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(ERROR_RED),
            ));
            frame.render_widget(error_widget, rows[2]);
        }
    }

    fn render_welcome(&self, frame: &mut Frame, area: Rect) {
        let block = self.step_block(" Get Started ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("👛", Style::default())),
            Line::from(Span::styled(
                "Welcome to Your Financial Journey!",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Let's get your account set up. It's quick and easy!",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Safe & Secure - we prioritize your security every step of the way.",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(" to start onboarding", Style::default().fg(MUTED_GRAY)),
            ]),
        ];

        let welcome = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(welcome, inner);
    }

    fn render_personal_details(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = self.step_block(" Step 1: Personal Details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5), // Full name
                Constraint::Length(5), // Date of birth
                Constraint::Length(1), // Hint
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_input(
            frame,
            rows[0],
            "Full Name (e.g., Alex Doe)",
            &state.personal.full_name,
            state.personal.focus == Some(PersonalField::FullName),
            false,
            state.field_error("full_name"),
        );
        self.render_input(
            frame,
            rows[1],
            "Date of Birth (YYYY-MM-DD)",
            &state.personal.date_of_birth,
            state.personal.focus == Some(PersonalField::DateOfBirth),
            false,
            state.field_error("date_of_birth"),
        );

        let hint = Paragraph::new(Span::styled(
            "Tab switches fields • Enter submits",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[2]);
    }

    fn render_consent(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = self.step_block(" Step 2: Parental Consent ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Alert
                Constraint::Length(5), // Notify option
                Constraint::Length(4), // In-person option
                Constraint::Length(1), // Gate message
                Constraint::Min(0),
            ])
            .split(inner);

        let alert = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("✉ ", Style::default().fg(WARNING_YELLOW)),
                Span::styled(
                    "Parental Approval Needed",
                    Style::default().fg(WARNING_YELLOW).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "We need approval from a parent or guardian to continue.",
                Style::default().fg(SOFT_WHITE),
            )),
        ]);
        frame.render_widget(alert, rows[0]);

        let notify_selected = state.consent.selected == ConsentPath::RemoteNotify;
        let notify_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if notify_selected { GOLD } else { SUBDUED_BORDER }))
            .style(Style::default().bg(if notify_selected { HIGHLIGHT_BG } else { PANEL_BG }))
            .title(" Notify Parent ");
        let notify_inner = notify_block.inner(rows[1]);
        frame.render_widget(notify_block, rows[1]);

        let contact_display = if state.consent.editing_contact {
            format!("{}│", state.consent.guardian_contact)
        } else if state.consent.guardian_contact.is_empty() {
            "parent@example.com".to_string()
        } else {
            state.consent.guardian_contact.clone()
        };
        let contact_style = if state.consent.guardian_contact.is_empty()
            && !state.consent.editing_contact
        {
            Style::default().fg(MUTED_GRAY)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let notify_lines = vec![
            Line::from(Span::styled(
                "Send a consent request to your parent's address:",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(contact_display, contact_style)),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(
                    if state.consent.editing_contact {
                        " sends the request"
                    } else {
                        " edits the address, then sends"
                    },
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(notify_lines), notify_inner);

        let in_person_selected = state.consent.selected == ConsentPath::InPerson;
        let in_person_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if in_person_selected { GOLD } else { SUBDUED_BORDER }))
            .style(Style::default().bg(if in_person_selected { HIGHLIGHT_BG } else { PANEL_BG }))
            .title(" Parent is With Me ");
        let in_person_inner = in_person_block.inner(rows[2]);
        frame.render_widget(in_person_block, rows[2]);

        let checkbox = if state.consent.acknowledged { "[x]" } else { "[ ]" };
        let in_person_lines = vec![
            Line::from(vec![
                Span::styled(checkbox, Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    " I approve this account creation",
                    Style::default().fg(SOFT_WHITE),
                ),
            ]),
            Line::from(vec![
                Span::styled("Space", Style::default().fg(GOLD)),
                Span::styled(" toggles • ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(" approves and continues", Style::default().fg(MUTED_GRAY)),
            ]),
        ];
        frame.render_widget(Paragraph::new(in_person_lines), in_person_inner);

        if let Some(message) = &state.gate_message {
            let gate = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(ERROR_RED),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(gate, rows[3]);
        }
    }

    fn render_identity(&self, frame: &mut Frame, area: Rect) {
        let block = self.step_block(" Step 3: Identity Verification ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("🛡 ", Style::default()),
                Span::styled(
                    "Verify Your Identity",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "This step helps keep your account secure. (Simplified for demo)",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "In a real app, you might upload an ID or answer security questions.",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(
                    " to simulate verification and continue",
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
        ];

        let identity = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(identity, inner);
    }

    fn render_pin_setup(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = self.step_block(" Step 4: Account Setup ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5), // PIN
                Constraint::Length(5), // Confirm PIN
                Constraint::Length(1), // Hint
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_input(
            frame,
            rows[0],
            "Create 4-digit PIN",
            &state.pin.pin,
            state.pin.focus == Some(PinField::Pin),
            true,
            state.field_error("pin"),
        );
        self.render_input(
            frame,
            rows[1],
            "Confirm PIN",
            &state.pin.confirm_pin,
            state.pin.focus == Some(PinField::ConfirmPin),
            true,
            state.field_error("confirm_pin"),
        );

        let hint = Paragraph::new(Span::styled(
            "Tab switches fields • Enter sets PIN and finishes",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[2]);
    }

    fn render_complete(&self, frame: &mut Frame, area: Rect) {
        let block = self.step_block(" Onboarding Complete! ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("🎉", Style::default())),
            Line::from(Span::styled(
                "Welcome aboard! Your account is ready.",
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled(" to go to your Dashboard", Style::default().fg(MUTED_GRAY)),
            ]),
        ];

        let complete = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(complete, inner);
    }

    /// Render navigation footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];

        if state.can_go_back() && !state.is_complete() {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("Esc", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Back", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        }

        let button_text = match state.current_step {
            OnboardingStep::PinSetup => "Set PIN & Finish",
            OnboardingStep::Complete => "Go to Dashboard",
            _ => "Next",
        };
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            format!(" {button_text}"),
            Style::default().fg(SOFT_WHITE),
        ));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Ctrl+C", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Quit", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
