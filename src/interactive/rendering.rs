//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterState;
use crate::game::{Cell, GameStatus};
use crate::output::formatters::{KEYBOARD_ROWS, format_elapsed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.show_share {
        render_share(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = format!(
        "🐾 PURRDLE - {} #{} - {}",
        session.mode(),
        session.public_id(),
        format_elapsed(session.elapsed())
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Hinted => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        LetterState::Revealed => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::DIM),
        LetterState::Empty => Style::default().fg(Color::White),
    }
}

fn row_line(cells: &[Cell], gaps: &[usize]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (pos, cell) in cells.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", cell.letter.unwrap_or('·')),
            state_style(cell.state),
        ));
        spans.push(Span::raw(if gaps.contains(&pos) { "   " } else { " " }));
    }
    Line::from(spans)
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.session.board().len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows * 2 + 2), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let gaps = session.target().gap_after();

    let mut lines = Vec::new();
    for row in session.board() {
        lines.push(row_line(&row, &gaps));
        lines.push(Line::from(""));
    }
    if let Some(solution) = session.solution() {
        lines.push(row_line(&solution, &gaps));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Guess {}/{} ",
                (session.guess_count() + 1).min(session.max_guesses()),
                session.max_guesses()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|ch| {
                        let state = keys.get(&ch).copied().unwrap_or(LetterState::Empty);
                        [Span::styled(format!(" {ch} "), state_style(state)), Span::raw(" ")]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Definitions
            Constraint::Length(3),      // Next definition
            Constraint::Length(3),      // Next letter
            Constraint::Percentage(30), // Messages
            Constraint::Min(6),         // Statistics
        ])
        .split(area);

    render_definitions(f, app, chunks[0]);
    render_hint_gauges(f, app, chunks[1], chunks[2]);
    render_messages(f, app, chunks[3]);
    render_statistics(f, app, chunks[4]);
}

fn render_definitions(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines: Vec<Line> = session
        .visible_definitions()
        .into_iter()
        .enumerate()
        .map(|(i, text)| Line::from(format!("{}. {text}", i + 1)))
        .collect();

    if let Some(example) = session.visible_example() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("\"{example}\""),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    let definitions = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Definitions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(definitions, area);
}

fn render_hint_gauges(f: &mut Frame, app: &App, definition_area: Rect, letter_area: Rect) {
    let session = &app.session;
    let inputs = session.hint_inputs();
    let elapsed = session.elapsed().as_secs_f64();

    let gauges = [
        (
            " Next definition ",
            session.hints().definition_progress(inputs, elapsed),
            definition_area,
        ),
        (
            " Next letter ",
            session
                .hints()
                .letter_progress(inputs, elapsed, &session.known_positions()),
            letter_area,
        ),
    ];

    for (title, progress, area) in gauges {
        let (ratio, label) = match progress {
            Some(p) => (p.clamp(0.0, 1.0), format!("{:.0}%", p * 100.0)),
            None => (1.0, "unlocked".to_string()),
        };
        let gauge = Gauge::default()
            .block(Block::default().title(title).borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(label);
        f.render_widget(gauge, area);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Played {} | Won {} | {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for guesses in 1..=app.session.max_guesses() {
        let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
        let bar_len = count * 20 / max_count;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let statistics = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(statistics, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (help_text, color) = match (app.input_mode, app.session.status()) {
        (InputMode::Finished, GameStatus::Won) => (
            "🎉 s: Share | n: New Word | [ ]: History | q: Quit",
            Color::Green,
        ),
        (InputMode::Finished, _) => ("s: Share | n: New Word | [ ]: History | q: Quit", Color::Red),
        (InputMode::Guessing, _) => (
            "Enter: Submit | Tab: Definition | Shift+Tab: Letter | Ctrl+N: New | [ ]: History | Esc: Quit",
            Color::DarkGray,
        ),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn render_share(f: &mut Frame, app: &App) {
    let text = app.session.share_summary();
    let height = text.lines().count() as u16 + 2;
    let area = centered_rect(40, height, f.area());

    let share = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Share (s to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(share, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordCatalog;
    use crate::commands::GameSetup;
    use crate::config::AppConfig;
    use crate::game::Route;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_without_panicking() {
        let setup = GameSetup::new(WordCatalog::embedded().unwrap(), AppConfig::default()).unwrap();
        let mut app = App::new(&setup, &Route::Daily);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        app.show_share = true;
        terminal.draw(|f| ui(f, &app)).unwrap();

        let mut small = Terminal::new(TestBackend::new(20, 8)).unwrap();
        small.draw(|f| ui(f, &app)).unwrap();
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(40, 12, area);
        assert_eq!(rect, area);
        assert_eq!(centered_rect(10, 4, area), Rect::new(10, 3, 10, 4));
    }
}
