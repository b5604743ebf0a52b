use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;

/// Call-to-action panel shown while the wallet session is disconnected
pub fn draw_connect_screen(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "🖼  GIF Deck",
            Style::default().fg(Color::Magenta).bold(),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "View your GIF collection in the metaverse ✨",
            Style::default().fg(Color::Gray),
        )]),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to connect your wallet", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if !app.error_message.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            app.error_message.clone(),
            Style::default().fg(Color::Red),
        )]));
    }

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Connect")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(panel, area);
}
