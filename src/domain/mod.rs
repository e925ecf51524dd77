//! Domain objects shared by the state machine and the renderer.
//!
//! - [`TextField`] - Editable text buffer with a char-indexed cursor

pub mod input;

pub use input::TextField;
