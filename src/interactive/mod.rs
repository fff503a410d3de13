//! Interactive TUI for browsing a board's best placements

mod app;
mod rendering;

pub use app::{App, MAX_SWAPS, Message, MessageStyle, PAGE_SIZE, run_tui};
