//! TUI application state and logic

use crate::boards::random_board;
use crate::commands::{SolveConfig, SolveReport, solve_board};
use crate::core::{Board, Path, Word};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Most swaps the budget keys allow
pub const MAX_SWAPS: usize = 3;

/// Application state
pub struct App<'a> {
    pub board: Board,
    pub words: &'a [Word],
    pub config: SolveConfig,
    pub report: Option<SolveReport>,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Deals new boards on `r`
    pub rng: StdRng,
    pub boards_dealt: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(board: Board, words: &'a [Word], config: SolveConfig, rng: StdRng) -> Self {
        Self {
            board,
            words,
            config: SolveConfig {
                swap_budget: config.swap_budget.min(MAX_SWAPS),
                show_progress: false,
                ..config
            },
            report: None,
            selected: 0,
            messages: vec![Message {
                text: "Welcome! Browse the best placements with ↑/↓.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
            boards_dealt: 1,
        }
    }

    /// Search the current board and reset the selection
    pub fn solve(&mut self) {
        self.selected = 0;
        match solve_board(&self.board, self.words, &self.config) {
            Ok(report) => {
                let text = format!(
                    "Found {} paths in {:.3}s ({} swaps allowed)",
                    report.paths.len(),
                    report.duration.as_secs_f64(),
                    self.config.swap_budget
                );
                let style = if report.paths.is_empty() {
                    MessageStyle::Error
                } else {
                    MessageStyle::Success
                };
                self.report = Some(report);
                self.add_message(&text, style);
            }
            Err(e) => {
                self.report = None;
                self.add_message(&format!("Search failed: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Ranked paths of the last solve
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        match &self.report {
            Some(report) => &report.paths,
            None => &[],
        }
    }

    #[must_use]
    pub fn selected_path(&self) -> Option<&Path> {
        self.paths().get(self.selected)
    }

    pub fn select_next(&mut self, by: usize) {
        let last = self.paths().len().saturating_sub(1);
        self.selected = (self.selected + by).min(last);
    }

    pub fn select_previous(&mut self, by: usize) {
        self.selected = self.selected.saturating_sub(by);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.paths().len().saturating_sub(1);
    }

    /// Deal a fresh random board of the same size and solve it
    pub fn new_board(&mut self) {
        self.board = random_board(self.board.size(), &mut self.rng);
        self.boards_dealt += 1;
        self.add_message("Dealt a new board", MessageStyle::Info);
        self.solve();
    }

    /// Change the swap budget by one and solve again
    pub fn change_swaps(&mut self, increase: bool) {
        let budget = self.config.swap_budget;
        let next = if increase {
            (budget + 1).min(MAX_SWAPS)
        } else {
            budget.saturating_sub(1)
        };

        if next == budget {
            self.add_message(
                &format!("Swap budget stays at {budget} (0-{MAX_SWAPS})"),
                MessageStyle::Error,
            );
            return;
        }

        self.config.swap_budget = next;
        self.solve();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(1),
            KeyCode::PageDown => self.select_next(PAGE_SIZE),
            KeyCode::PageUp => self.select_previous(PAGE_SIZE),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('r') => self.new_board(),
            KeyCode::Char('+' | '=') => self.change_swaps(true),
            KeyCode::Char('-') => self.change_swaps(false),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.solve();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
