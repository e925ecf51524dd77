//! Color theme constants for the CodeLingo UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused control
pub const COLOR_FOCUS: Color = Color::White;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Source code blocks
pub const COLOR_CODE: Color = Color::Rgb(200, 200, 160);

// ============================================================================
// Status Colors
// ============================================================================

/// Success banner and correct answers - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error banner and wrong answers
pub const COLOR_ERROR: Color = Color::Red;

/// Chosen language in the picker
pub const COLOR_SELECTED: Color = Color::LightGreen;
