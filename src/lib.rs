//! Spellcast Solver
//!
//! Finds every placement of dictionary words on a square letter board,
//! moving between the eight neighbouring cells, optionally swapping a few
//! letters, and ranks the placements by score.
//!
//! # Quick Start
//!
//! ```rust
//! use spellcast_solver::boards::parse_board;
//! use spellcast_solver::search::{rank, search};
//! use spellcast_solver::wordlists::loader::words_from_slice;
//!
//! let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
//! let words = words_from_slice(&["ranch", "lane", "deal"]);
//!
//! let mut paths = search(&board, &words, 1).unwrap();
//! rank(&mut paths);
//! println!("best: {} ({})", paths[0].effective_text(), paths[0].total_score());
//! ```

// Core domain types
pub mod core;

// Backtracking word search
pub mod search;

// Board parsing and generation
pub mod boards;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
