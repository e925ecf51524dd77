//! Lesson view: explanation, paired examples, exercise and draft answer.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{field_block, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CODE, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};
use crate::app::{LessonFocus, LessonView};
use crate::models::Lesson;

/// Shown in place of the reference example when the known collection has
/// no lesson with the same topic.
pub const NO_REFERENCE: &str = "No reference example found";

/// Everything the lesson view shows besides the view state itself.
pub struct LessonContext<'a> {
    pub reference: Option<&'a Lesson>,
    pub known_language: Option<&'a str>,
    pub target_language: Option<&'a str>,
    pub busy: bool,
    pub tick: u64,
}

fn code_block<'a>(title: String, code: Option<String>) -> Paragraph<'a> {
    let paragraph = match code {
        Some(code) => Paragraph::new(code).style(Style::default().fg(COLOR_CODE)),
        None => Paragraph::new(NO_REFERENCE).style(Style::default().fg(COLOR_DIM)),
    };
    paragraph.block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    )
}

/// Terminal cursor inside the bordered draft box, clamped to its interior.
fn cursor_position(area: Rect, line: usize, col: usize) -> (u16, u16) {
    let offset = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(offset(col))
        .min(area.right().saturating_sub(2));
    let y = area
        .y
        .saturating_add(1)
        .saturating_add(offset(line))
        .min(area.bottom().saturating_sub(2));
    (x, y)
}

pub fn render_lesson(frame: &mut Frame, area: Rect, view: &LessonView, ctx: &LessonContext) {
    let [title, explanation, examples, exercise, draft, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Max(6),
        Constraint::Min(5),
        Constraint::Max(4),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(view.lesson.topic.as_str())
            .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        title,
    );
    frame.render_widget(
        Paragraph::new(view.lesson.explanation.as_str()).wrap(Wrap { trim: false }),
        explanation,
    );

    let [known_area, target_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(examples);
    frame.render_widget(
        code_block(
            ctx.known_language.unwrap_or("Known language").to_string(),
            ctx.reference.map(Lesson::display_example),
        ),
        known_area,
    );
    frame.render_widget(
        code_block(
            ctx.target_language.unwrap_or("Target language").to_string(),
            Some(view.lesson.display_example()),
        ),
        target_area,
    );

    frame.render_widget(
        Paragraph::new(view.lesson.exercise.as_str())
            .wrap(Wrap { trim: false })
            .block(field_block("Exercise", false)),
        exercise,
    );

    let draft_focused = view.focus == LessonFocus::Draft;
    frame.render_widget(
        Paragraph::new(view.draft.text()).block(field_block("Your answer", draft_focused)),
        draft,
    );
    if draft_focused {
        let (line, col) = view.draft.cursor_line_col();
        frame.set_cursor_position(cursor_position(draft, line, col));
    }

    render_status(frame, status, view, ctx);
}

fn render_status(frame: &mut Frame, area: Rect, view: &LessonView, ctx: &LessonContext) {
    let submit_enabled = !ctx.busy && !view.draft.is_blank();
    let button_style = match (submit_enabled, view.focus == LessonFocus::Submit) {
        (false, _) => Style::default().fg(COLOR_DIM),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(COLOR_ACCENT),
    };
    let button = if ctx.busy {
        let spinner = SPINNER_FRAMES[(ctx.tick / 6) as usize % SPINNER_FRAMES.len()];
        format!("{} Checking", spinner)
    } else {
        "[ Check answer ]".to_string()
    };

    let mut spans = vec![Span::styled(button, button_style), Span::raw("  ")];
    match view.last_check {
        Some(true) => spans.push(Span::styled("✓ Correct", Style::default().fg(COLOR_SUCCESS))),
        Some(false) => spans.push(Span::styled("✗ Incorrect", Style::default().fg(COLOR_ERROR))),
        None => {}
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
