//! Language picker: two columns over the catalog plus a confirm button.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::helpers::{field_block, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SELECTED};
use crate::app::{LanguageColumn, LanguageSelection};

fn render_column(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selection: &LanguageSelection,
    chosen: Option<usize>,
    cursor: usize,
    focused: bool,
) {
    let items: Vec<ListItem> = selection
        .catalog
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if chosen == Some(i) {
                ListItem::new(format!("✓ {}", name)).style(Style::default().fg(COLOR_SELECTED))
            } else {
                ListItem::new(format!("  {}", name))
            }
        })
        .collect();

    let mut state = ListState::default();
    if focused && !selection.catalog.is_empty() {
        state.select(Some(cursor));
    }
    let list = List::new(items)
        .block(field_block(title, focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_language_selection(
    frame: &mut Frame,
    area: Rect,
    selection: &LanguageSelection,
    busy: bool,
    tick: u64,
) {
    let [heading, columns, button] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Choose the language you know and the language you want to learn")
            .alignment(Alignment::Center),
        heading,
    );

    if selection.loading {
        let spinner = SPINNER_FRAMES[(tick / 6) as usize % SPINNER_FRAMES.len()];
        frame.render_widget(
            Paragraph::new(format!("{} Loading languages...", spinner))
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center),
            columns,
        );
        return;
    }
    if selection.catalog.is_empty() {
        frame.render_widget(
            Paragraph::new("No languages are available yet.")
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center),
            columns,
        );
        return;
    }

    let [known, target] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(columns);
    render_column(
        frame,
        known,
        "I know",
        selection,
        selection.known,
        selection.known_cursor,
        selection.column == LanguageColumn::Known,
    );
    render_column(
        frame,
        target,
        "I want to learn",
        selection,
        selection.target,
        selection.target_cursor,
        selection.column == LanguageColumn::Target,
    );

    let focused = selection.column == LanguageColumn::Confirm;
    let enabled = selection.can_confirm() && !busy;
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(COLOR_DIM),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(COLOR_ACCENT),
    };
    frame.render_widget(
        Paragraph::new("[ Start learning ]")
            .style(style)
            .alignment(Alignment::Center),
        button,
    );
}
