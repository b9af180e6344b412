//! Top-level module for brain construction.
//!
//! This module provides:
//! - The second-order transition table (`TransitionTable`)
//! - Line filters (English heuristic, command and link detection, line splitting)
//! - Training configuration (`TrainingOptions`)
//! - The line-by-line table builder (`BrainBuilder`)

/// Pair-key to successor-list mapping.
///
/// Append-only, insertion-ordered, serialized as a plain JSON object.
pub mod transition_table;

/// Pure line predicates and the line splitter.
pub mod filter;

/// Training configuration (English threshold, link skipping).
pub mod training_options;

/// Applies the filters to corpus lines and accumulates the table.
pub mod brain_builder;

pub use brain_builder::{BrainBuilder, LineOutcome, SkipReason, TrainingStats, build_brain};
pub use filter::is_mostly_english;
pub use training_options::TrainingOptions;
pub use transition_table::TransitionTable;
