//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the handler for the current
//! screen:
//! - Connect: call-to-action while the wallet session is disconnected
//! - Gallery: link input plus the collection table
//! - Exiting: quit confirmation

use ratatui::crossterm::event::KeyCode;

use super::app::{App, CurrentScreen};
use super::input_handler::{handle_backspace, handle_text_input};

/// Handle keyboard input based on current screen
pub async fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Connect => handle_connect_screen(app, key_code).await,
        CurrentScreen::Gallery => handle_gallery_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

/// Handle connect screen input
async fn handle_connect_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.request_connection().await;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle gallery screen input
fn handle_gallery_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.input_mode {
        match key_code {
            KeyCode::Enter => app.submit_link(),
            KeyCode::Backspace => handle_backspace(app),
            KeyCode::Esc => app.input_mode = false,
            KeyCode::Char(c) => handle_text_input(app, c),
            _ => {}
        }
        return Ok(false);
    }

    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Char('/') => {
            app.input_mode = true;
        }
        // Copy selected URL to clipboard
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(link) = app.get_selected_link()
                && let Ok(mut clipboard) = arboard::Clipboard::new()
            {
                let url = link.url.clone();
                if clipboard.set_text(&url).is_ok() {
                    app.set_status(format!("Copied: {}", url));
                }
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle exiting confirmation input
fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = if app.session.is_connected() {
                CurrentScreen::Gallery
            } else {
                CurrentScreen::Connect
            };
            Ok(false)
        }
        _ => Ok(false),
    }
}
