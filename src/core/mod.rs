//! Core domain types
//!
//! The fundamental value types of the solver: validated words and
//! feedback tiles, plus the feedback simulator. Everything here is pure
//! and has clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Tile};
pub use word::{WORD_LEN, Word, WordError};
