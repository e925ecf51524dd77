//! Lesson list in server order, numbered from 1.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{field_block, truncate_string};
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::LessonList;
use crate::models::Lesson;

/// Display label of the lesson at `index`.
pub fn lesson_label(index: usize, lesson: &Lesson) -> String {
    format!("{}. {}", index + 1, lesson.topic)
}

pub fn render_lessons(
    frame: &mut Frame,
    area: Rect,
    list: &LessonList,
    lessons: &[Lesson],
    language: Option<&str>,
    loading: bool,
) {
    let title = match language {
        Some(language) => format!("{} lessons", language),
        None => "Lessons".to_string(),
    };

    if lessons.is_empty() {
        let text = if loading {
            "Loading lessons..."
        } else {
            "No lessons available."
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(COLOR_DIM))
                .block(field_block(&title, true)),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = lessons
        .iter()
        .enumerate()
        .map(|(i, lesson)| ListItem::new(truncate_string(&lesson_label(i, lesson), width)))
        .collect();

    let mut state = ListState::default();
    state.select(Some(list.selected.min(lessons.len() - 1)));
    let widget = List::new(items)
        .block(field_block(&title, true))
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(widget, area, &mut state);
}
