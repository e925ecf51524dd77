//! Helper functions and constants for UI rendering

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

use super::theme::{COLOR_BORDER, COLOR_FOCUS};

/// Spinner frames shown while busy
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Rounded block whose border brightens when focused.
pub fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Password rendering: one bullet per char unless revealed.
pub fn mask(text: &str, reveal: bool) -> String {
    if reveal {
        text.to_string()
    } else {
        "•".repeat(text.chars().count())
    }
}

/// Truncate to `max_len` chars, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
