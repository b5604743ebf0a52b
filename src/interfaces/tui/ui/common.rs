use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{TWITTER_HANDLE, TWITTER_LINK};

/// Draw title bar with version and connection info
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("GifDeck", Style::default().fg(Color::Magenta).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(address) = app.session.address() {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Wallet: {} ", address.short()),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("GIFs: {} ", app.editor.collection().len()),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            "Not connected ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = Paragraph::new(vec![Line::from(spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[WARN] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts and the profile link
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Connect => vec![
            ("Enter", "Connect to Wallet", Color::Green),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Gallery => {
            if app.input_mode {
                vec![
                    ("Enter", "Submit", Color::Green),
                    ("Esc", "Done typing", Color::Red),
                ]
            } else {
                vec![
                    ("Up/Down", "Navigate", Color::Cyan),
                    ("a", "Add GIF", Color::Green),
                    ("y", "Copy URL", Color::Yellow),
                    ("q", "Quit", Color::Magenta),
                ]
            }
        }
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("built by @{}", TWITTER_HANDLE),
        Style::default().fg(Color::Blue),
    ));
    spans.push(Span::styled(
        format!(" {}", TWITTER_LINK),
        Style::default().fg(Color::DarkGray),
    ));

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}

/// Helper to create a centered rect using percentages of the given rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
