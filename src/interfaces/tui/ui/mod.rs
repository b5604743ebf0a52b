// UI submodules
mod common;
mod connect_screen;
mod exiting;
mod gallery_screen;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use connect_screen::draw_connect_screen;
pub use exiting::draw_exiting_screen;
pub use gallery_screen::draw_gallery_screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Main content based on current screen
    match app.current_screen {
        CurrentScreen::Connect => draw_connect_screen(frame, app, main_chunks[1]),
        CurrentScreen::Gallery => draw_gallery_screen(frame, app, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
