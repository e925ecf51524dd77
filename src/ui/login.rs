//! Login and registration forms.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{centered_rect, field_block, mask, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER};
use crate::app::{LoginField, LoginForm, RegisterField, RegisterForm};
use crate::domain::TextField;

pub const LOGO: [&str; 3] = [
    "┌─┐┌─┐┌┬┐┌─┐  ┬  ┬┌┐┌┌─┐┌─┐",
    "│  │ │ ││├┤   │  │││││ ┬│ │",
    "└─┘└─┘─┴┘└─┘  ┴─┘┴┘└┘└─┘└─┘",
];

/// Terminal cursor `offset` columns into a bordered single-line field.
fn field_cursor(area: Rect, offset: usize) -> (u16, u16) {
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
        .min(area.right().saturating_sub(2));
    (x, area.y.saturating_add(1))
}

/// Render one single-line field and place the terminal cursor in it when focused.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &TextField,
    focused: bool,
    secret: Option<bool>,
) {
    let shown = match secret {
        Some(reveal) => mask(field.text(), reveal),
        None => field.text().to_string(),
    };
    frame.render_widget(
        Paragraph::new(shown).block(field_block(title, focused)),
        area,
    );

    if focused {
        let before: String = field.text().chars().take(field.cursor()).collect();
        let offset = match secret {
            Some(false) => before.chars().count(),
            _ => before.width(),
        };
        frame.set_cursor_position(field_cursor(area, offset));
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, busy: bool, tick: u64) {
    let text = if busy {
        let frame_idx = (tick / 6) as usize % SPINNER_FRAMES.len();
        format!("{} Please wait", SPINNER_FRAMES[frame_idx])
    } else {
        label.to_string()
    };
    let style = if busy {
        Style::default().fg(COLOR_DIM)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        area,
    );
}

fn render_frame(frame: &mut Frame, area: Rect, rows: u16) -> Rect {
    let dialog = centered_rect(area, 48, rows + LOGO.len() as u16 + 4);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let logo_area = Rect::new(inner.x, inner.y, inner.width, LOGO.len() as u16);
    frame.render_widget(
        Paragraph::new(LOGO.join("\n"))
            .style(Style::default().fg(COLOR_HEADER))
            .alignment(Alignment::Center),
        logo_area,
    );
    Rect::new(
        inner.x + 1,
        inner.y + LOGO.len() as u16 + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(LOGO.len() as u16 + 1),
    )
}

fn hint(show_password: bool, switch_to: &str) -> Line<'static> {
    let reveal = if show_password { "hide" } else { "show" };
    Line::from(vec![
        Span::styled(format!("[Ctrl+P] {} password  ", reveal), Style::default().fg(COLOR_DIM)),
        Span::styled(format!("[Ctrl+R] {}", switch_to), Style::default().fg(COLOR_DIM)),
    ])
}

pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm, busy: bool, tick: u64) {
    let body = render_frame(frame, area, 9);
    let [username, password, button, _, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(body);

    render_field(frame, username, "Username", &form.username, form.focus == LoginField::Username, None);
    render_field(
        frame,
        password,
        "Password",
        &form.password,
        form.focus == LoginField::Password,
        Some(form.show_password),
    );
    render_button(frame, button, "[ Sign in ]", form.focus == LoginField::Submit, busy, tick);
    frame.render_widget(
        Paragraph::new(hint(form.show_password, "create an account")).alignment(Alignment::Center),
        help,
    );
}

pub fn render_register(frame: &mut Frame, area: Rect, form: &RegisterForm, busy: bool, tick: u64) {
    let body = render_frame(frame, area, 12);
    let [name, username, password, button, _, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(body);

    render_field(frame, name, "Name", &form.name, form.focus == RegisterField::Name, None);
    render_field(
        frame,
        username,
        "Username",
        &form.username,
        form.focus == RegisterField::Username,
        None,
    );
    render_field(
        frame,
        password,
        "Password",
        &form.password,
        form.focus == RegisterField::Password,
        Some(form.show_password),
    );
    render_button(frame, button, "[ Create account ]", form.focus == RegisterField::Submit, busy, tick);
    frame.render_widget(
        Paragraph::new(hint(form.show_password, "back to sign in"))
            .style(Style::default().fg(COLOR_FOCUS))
            .alignment(Alignment::Center),
        help,
    );
}
