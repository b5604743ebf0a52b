use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;

/// Connected view: link input field above the collection table
pub fn draw_gallery_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Min(5),    // Gif table
        ])
        .split(area);

    draw_input_field(frame, app, chunks[0]);
    draw_gif_table(frame, app, chunks[1]);
}

fn draw_input_field(frame: &mut Frame, app: &App, area: Rect) {
    let input_style = if app.input_mode {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let pending = app.editor.pending_input();
    let title = if pending.is_empty() {
        "Enter GIF link!".to_string()
    } else {
        format!("Enter GIF link! ({} chars)", pending.len())
    };

    let input = Paragraph::new(pending).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(input_style),
    );
    frame.render_widget(input, area);

    // Visible cursor while typing; counted in chars, clamped to the box
    if app.input_mode {
        let cursor_col = pending.chars().count().min(area.width.saturating_sub(2) as usize);
        frame.set_cursor_position((area.x + 1 + cursor_col as u16, area.y + 1));
    }
}

/// Truncate a URL for display, never splitting a multibyte character
fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(URL_TRUNCATE_LENGTH) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::LinkEditor;
    use crate::interfaces::tui::app::{App, CurrentScreen};
    use crate::wallet::WalletSession;
    use ratatui::{Terminal, backend::TestBackend};

    fn gallery_app() -> App {
        App {
            session: WalletSession::new(None),
            editor: LinkEditor::new(),
            current_screen: CurrentScreen::Gallery,
            input_mode: false,
            selected_index: 0,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    #[test]
    fn test_truncate_url_on_char_boundary() {
        let url = format!("{}é-more", "a".repeat(59));
        let truncated = truncate_url(&url);
        assert_eq!(truncated, format!("{}é...", "a".repeat(59)));

        let short = "http://x.gif";
        assert_eq!(truncate_url(short), short);

        // Exactly at the limit stays untouched
        let exact = "a".repeat(60);
        assert_eq!(truncate_url(&exact), exact);
    }

    #[test]
    fn test_render_long_multibyte_url() {
        let mut app = gallery_app();
        app.editor.update_input(format!("{}é-more", "a".repeat(59)));
        app.editor.submit();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_gallery_screen(f, &mut app, f.area()))
            .unwrap();
    }

    #[test]
    fn test_render_multibyte_pending_input() {
        let mut app = gallery_app();
        app.input_mode = true;
        app.editor.update_input("héllo—🦀".repeat(20));

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_gallery_screen(f, &mut app, f.area()))
            .unwrap();
    }
}

fn draw_gif_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let collection = app.editor.collection();

    if collection.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No GIFs in the deck",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[a]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to add your first link", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("GIF Collection")
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled(
            "#",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Link",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    // Rows are keyed by the append-order id, never by the URL value, so
    // duplicate links stay distinct.
    let mut rows = Vec::with_capacity(collection.len());
    for link in collection.links() {
        let display_url = truncate_url(&link.url);

        rows.push(Row::new(vec![
            Span::styled(
                format!("{}", link.id),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_url, Style::default().fg(Color::Blue)),
        ]));
    }

    let title = format!("GIF Collection ({})", collection.len());

    let table = Table::new(
        rows,
        [Constraint::Length(5), Constraint::Min(20)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index.min(collection.len() - 1)));

    frame.render_stateful_widget(table, area, &mut table_state);
}
