// ABOUTME: Account profile screen - profile details, PIN change, notifications hub

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{PinChangeDialog, PinChangeField, ProfileDialog, ProfileField, ProfileState};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER, WARNING_YELLOW,
};

pub struct AccountProfileComponent;

impl AccountProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ProfileState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Length(6), // Account details
                Constraint::Min(7),    // Notifications
                Constraint::Length(4), // Help & account actions
            ])
            .split(area);

        self.render_header(frame, rows[0], state);
        self.render_details(frame, rows[1], state);
        self.render_notifications(frame, rows[2], state);
        self.render_actions(frame, rows[3]);

        if let Some(dialog) = &state.profile_dialog {
            self.render_profile_dialog(frame, area, dialog);
        } else if let Some(dialog) = &state.pin_dialog {
            self.render_pin_dialog(frame, area, dialog);
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

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &ProfileState) {
        let block = self.panel(" Profile ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("👤 ", Style::default()),
                Span::styled(
                    state.display_name.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", state.email),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            Line::from(vec![
                Span::styled("[e]", Style::default().fg(GOLD)),
                Span::styled(" edit profile  ", Style::default().fg(MUTED_GRAY)),
                Span::styled("[p]", Style::default().fg(GOLD)),
                Span::styled(" change PIN  ", Style::default().fg(MUTED_GRAY)),
                Span::styled("[n]", Style::default().fg(GOLD)),
                Span::styled(" toggle notifications", Style::default().fg(MUTED_GRAY)),
            ]),
        ];
        if let Some(message) = &state.status_message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(SELECTION_GREEN),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, state: &ProfileState) {
        let block = self.panel(" Account Details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled("Username: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(state.username.clone(), Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("Email: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(state.email.clone(), Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("Member Since: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(state.member_since.clone(), Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("Two-Factor Authentication: ", Style::default().fg(MUTED_GRAY)),
                Span::styled("unavailable in demo", Style::default().fg(WARNING_YELLOW)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &ProfileState) {
        let block = self.panel(" Notifications Hub ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(
                if state.notifications_enabled { "[x]" } else { "[ ]" },
                Style::default().fg(SELECTION_GREEN),
            ),
            Span::styled(" Enable Notifications", Style::default().fg(SOFT_WHITE)),
        ]));
        frame.render_widget(toggle, rows[0]);

        if !state.notifications_enabled {
            let disabled = Paragraph::new(Span::styled(
                "Notifications are disabled.",
                Style::default().fg(MUTED_GRAY),
            ));
            frame.render_widget(disabled, rows[1]);
            return;
        }

        if state.notifications.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No new notifications.",
                Style::default().fg(MUTED_GRAY),
            ));
            frame.render_widget(empty, rows[1]);
            return;
        }

        let items: Vec<ListItem> = state
            .notifications
            .iter()
            .enumerate()
            .map(|(idx, notif)| {
                let selected = idx == state.selected_notification;
                let bullet = if notif.read { "○" } else { "●" };
                let bullet_color = if notif.read { MUTED_GRAY } else { CORNFLOWER_BLUE };
                let line = Line::from(vec![
                    Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                    Span::styled(bullet, Style::default().fg(bullet_color)),
                    Span::styled(
                        format!(" {} ", notif.title),
                        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(notif.message.clone(), Style::default().fg(MUTED_GRAY)),
                    Span::styled(
                        format!("  ({})", notif.age),
                        Style::default().fg(SUBDUED_BORDER),
                    ),
                ]);
                let item = ListItem::new(line);
                if selected {
                    item.style(Style::default().bg(HIGHLIGHT_BG))
                } else {
                    item
                }
            })
            .collect();
        frame.render_widget(List::new(items), rows[1]);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel(" Help & Account Actions ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                "FAQs • Contact Support • Terms of Service",
                Style::default().fg(CORNFLOWER_BLUE),
            )),
            Line::from(Span::styled(
                "Account Graduation/Closure and Log Out are demo-only actions.",
                Style::default().fg(MUTED_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn dialog_rect(&self, area: Rect, height: u16) -> Rect {
        let width = area.width.min(46);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_profile_dialog(&self, frame: &mut Frame, area: Rect, dialog: &ProfileDialog) {
        let popup = self.dialog_rect(area, 12);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(DARK_BG))
            .title(" Edit Profile ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_field(
            frame,
            rows[0],
            "Username",
            &dialog.username,
            dialog.focus == ProfileField::Username,
            false,
        );
        self.render_error(frame, rows[1], &dialog.errors, "username");
        self.render_field(
            frame,
            rows[2],
            "Email",
            &dialog.email,
            dialog.focus == ProfileField::Email,
            false,
        );
        self.render_error(frame, rows[3], &dialog.errors, "email");

        let hint = Paragraph::new(Span::styled(
            "Tab next field • Enter save • Esc cancel",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[4]);
    }

    fn render_pin_dialog(&self, frame: &mut Frame, area: Rect, dialog: &PinChangeDialog) {
        let popup = self.dialog_rect(area, 14);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(DARK_BG))
            .title(" Change PIN ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_field(
            frame,
            rows[0],
            "Current PIN",
            &dialog.current_pin,
            dialog.focus == Some(PinChangeField::Current),
            true,
        );
        self.render_error(frame, rows[1], &dialog.errors, "current_pin");
        self.render_field(
            frame,
            rows[2],
            "New PIN",
            &dialog.new_pin,
            dialog.focus == Some(PinChangeField::New),
            true,
        );
        self.render_error(frame, rows[3], &dialog.errors, "new_pin");
        self.render_field(
            frame,
            rows[4],
            "Confirm New PIN",
            &dialog.confirm_new_pin,
            dialog.focus == Some(PinChangeField::ConfirmNew),
            true,
        );
        self.render_error(frame, rows[5], &dialog.errors, "confirm_new_pin");

        let hint = Paragraph::new(Span::styled(
            "Tab next field • Enter change PIN • Esc cancel",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[6]);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        masked: bool,
    ) {
        let display = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let display = if focused { format!("{display}│") } else { display };
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

    fn render_error(
        &self,
        frame: &mut Frame,
        area: Rect,
        errors: &[crate::validation::FieldError],
        field: &str,
    ) {
        if let Some(error) = errors.iter().find(|e| e.field == field) {
            let widget = Paragraph::new(Span::styled(
                error.message.clone(),
                Style::default().fg(ERROR_RED),
            ));
            frame.render_widget(widget, area);
        }
    }
}

impl Default for AccountProfileComponent {
    fn default() -> Self {
        Self::new()
    }
}
