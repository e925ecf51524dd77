//! UI rendering for CodeLingo.
//!
//! Every frame is drawn from [`App`] state alone: a header, the active view,
//! the notification banner and a footer with the keys that apply.

mod helpers;
mod language;
mod lesson;
mod lessons;
mod login;
mod theme;

pub use lesson::NO_REFERENCE;
pub use lessons::lesson_label;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, View};
use crate::notifications::NotificationKind;
use lesson::LessonContext;
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

/// Render the whole UI.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, banner, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    let body = body.inner(Margin::new(1, 0));
    match &app.view {
        View::Login(form) => login::render_login(frame, body, form, app.busy, app.tick_count),
        View::Register(form) => {
            login::render_register(frame, body, form, app.busy, app.tick_count)
        }
        View::LanguageSelection(selection) => {
            language::render_language_selection(frame, body, selection, app.busy, app.tick_count)
        }
        View::Lessons(list) => lessons::render_lessons(
            frame,
            body,
            list,
            app.lessons.target(),
            app.session.target_language.as_deref(),
            app.pending_loads > 0,
        ),
        View::Lesson(view) => {
            let ctx = LessonContext {
                reference: app.lessons.find_known_by_topic(&view.lesson.topic),
                known_language: app.session.known_language.as_deref(),
                target_language: app.session.target_language.as_deref(),
                busy: app.busy,
                tick: app.tick_count,
            };
            lesson::render_lesson(frame, body, view, &ctx);
        }
    }

    render_banner(frame, banner, app);
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "CodeLingo",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if let Some(pair) = app.session.language_pair() {
        spans.push(Span::styled(
            format!("  {} → {}", pair.known, pair.target),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        area,
    );
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let (icon, color) = match notification.kind {
        NotificationKind::Success => ("✓", COLOR_SUCCESS),
        NotificationKind::Error => ("✗", COLOR_ERROR),
    };
    frame.render_widget(
        Paragraph::new(format!(" {} {}", icon, notification.text))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        area,
    );
}

/// Key hints for the active view.
pub fn footer_hints(view: &View) -> &'static str {
    match view {
        View::Login(_) => "Tab next field · Enter sign in · Ctrl+R register · Ctrl+C quit",
        View::Register(_) => "Tab next field · Enter create account · Esc back · Ctrl+C quit",
        View::LanguageSelection(_) => {
            "Tab switch column · ↑↓ move · Enter choose · Ctrl+L log out · Ctrl+C quit"
        }
        View::Lessons(_) => "↑↓ move · Enter open · Ctrl+L log out · Ctrl+C quit",
        View::Lesson(_) => "Tab focus · Ctrl+S check answer · Esc back · Ctrl+L log out",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        Paragraph::new(footer_hints(&app.view)).style(Style::default().fg(COLOR_DIM)),
        area,
    );
}
