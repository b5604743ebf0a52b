//! Input handling utilities
//!
//! Unified text editing for the link input field.

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if app.input_mode {
        app.editor.push_char(c);
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if app.input_mode {
        app.editor.pop_char();
    }
}
