//! Word lists for board search
//!
//! Provides the embedded dictionary compiled into the binary, file loading
//! and the per-board playable filter.

mod embedded;
mod filter;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use filter::{DEFAULT_MIN_WORD_LENGTH, playable};

use crate::core::Word;

/// The embedded dictionary as [`Word`]s
#[must_use]
pub fn embedded_words() -> Vec<Word> {
    loader::words_from_slice(WORDS)
}
