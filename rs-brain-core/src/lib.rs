//! Second-order word transition ("Markov brain") builder.
//!
//! This crate turns a text corpus into a transition table including:
//! - Corpus loading with a UTF-8 / Windows-1252 decoding fallback
//! - Line filtering (English-content heuristic, command lines, links)
//! - Pair-key to successor accumulation over a sliding window of three words
//! - Persistence of the table as an indented JSON brain file
//!
//! Generation from a brain is handled by a separate component.

/// Transition table, line filters and the brain builder.
pub mod model;

/// I/O utilities (corpus loading, brain paths, brain files).
pub mod io;

/// Library error type.
pub mod error;

pub use error::{BrainError, BrainResult};
