//! TUI rendering with ratatui
//!
//! Board grid with the selected path highlighted, the ranked word list and
//! details for the selection.

use super::app::{App, MessageStyle};
use crate::core::{Cell, Path, Position};
use crate::output::formatters::{create_progress_bar, positions_text, swap_summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board and details
            Constraint::Percentage(55), // Results
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_results(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧙 SPELLCAST SOLVER - Board Browser")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(app.board.size()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_mul(2).saturating_add(2)),
            Constraint::Min(6),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_details(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_path();
    let mut lines = Vec::with_capacity(app.board.size() * 2);

    for y in 0..app.board.size() {
        let spans: Vec<Span> = (0..app.board.size())
            .map(|x| {
                let position = Position::new(x as i32, y as i32);
                match app.board.get(position) {
                    Some(cell) => cell_span(cell, selected),
                    None => Span::raw("  ·   "),
                }
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn cell_span<'a>(cell: &Cell, selected: Option<&Path>) -> Span<'a> {
    let step = selected.and_then(|path| {
        path.steps()
            .iter()
            .enumerate()
            .find(|(_, s)| s.position() == cell.position())
    });

    let mark = if cell.is_double_word() {
        '+'
    } else if cell.multiplier() > 1.0 {
        '*'
    } else {
        ' '
    };

    match step {
        Some((depth, s)) => {
            let bg = if s.is_swapped() { Color::Red } else { Color::Green };
            Span::styled(
                format!(" {}{mark}{:<2} ", s.letter().as_char().to_ascii_uppercase(), depth + 1),
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        }
        None => {
            let fg = if cell.is_double_word() {
                Color::Magenta
            } else if cell.multiplier() > 1.0 {
                Color::Yellow
            } else {
                Color::White
            };
            Span::styled(
                format!(" {}{mark}   ", cell.letter().as_char().to_ascii_uppercase()),
                Style::default().fg(fg),
            )
        }
    }
}

fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Selection ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(path) = app.selected_path() else {
        f.render_widget(Paragraph::new("No words found").block(block), area);
        return;
    };

    let best = app.paths().first().map_or(0.0, Path::total_score);
    let score = path.total_score();
    let bar = create_progress_bar(score, best, 18);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Word:   "),
            Span::styled(
                path.effective_text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Score:  [{bar}] {score}")),
        Line::from(format!("Cells:  {}", positions_text(path))),
    ];

    let mut bonuses = Vec::new();
    if path.has_double_word() {
        bonuses.push("double word".to_string());
    }
    if path.len() >= crate::core::LONG_WORD_LENGTH {
        bonuses.push(format!("+{} long word", crate::core::LONG_WORD_BONUS));
    }
    if !bonuses.is_empty() {
        content.push(Line::from(format!("Bonus:  {}", bonuses.join(", "))));
    }

    if let Some(swaps) = swap_summary(path) {
        content.push(Line::from(vec![
            Span::raw("Swaps:  "),
            Span::styled(swaps, Style::default().fg(Color::Red)),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .paths()
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let swapped = !path.swapped_steps().is_empty();
            let style = if swapped {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{:>4}. {:<12} {:>6}{}",
                i + 1,
                path.effective_text().to_uppercase(),
                path.total_score(),
                if swapped { "  ⇄" } else { "" }
            ))
            .style(style)
        })
        .collect();

    let title = format!(" Results ({}) ", items.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let swaps = Paragraph::new(format!("Swaps: {}", app.config.swap_budget))
        .alignment(Alignment::Center);
    f.render_widget(swaps, chunks[0]);

    let boards = Paragraph::new(format!("Boards: {}", app.boards_dealt))
        .alignment(Alignment::Center);
    f.render_widget(boards, chunks[1]);

    let help = Paragraph::new("q: Quit | ↑/↓ PgUp/PgDn: Browse | r: New Board | +/-: Swaps")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{board_rng, parse_board};
    use crate::commands::SolveConfig;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_results() {
        let words = words_from_slice(&["ranch", "deal"]);
        let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
        let mut app = App::new(board, &words, SolveConfig::default(), board_rng(Some(1)));
        app.solve();

        let text = screen(&app);
        assert!(text.contains("SPELLCAST SOLVER"));
        assert!(text.contains("RANCH"));
        assert!(text.contains("Results"));
    }

    #[test]
    fn draws_without_results() {
        let words: Vec<crate::core::Word> = Vec::new();
        let board = parse_board("ab/cd").unwrap();
        let app = App::new(board, &words, SolveConfig::default(), board_rng(Some(1)));

        let text = screen(&app);
        assert!(text.contains("No words found"));
    }
}
