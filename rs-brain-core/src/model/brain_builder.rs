use log::debug;

use super::filter::{contains_link, is_command, is_mostly_english, split_lines, split_words};
use super::training_options::TrainingOptions;
use super::transition_table::{TransitionTable, WINDOW_SIZE};

/// Reason a corpus line was left out of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
	/// Below the English heuristic threshold (or no letters at all).
	NotEnglish,
	/// Starts with `!` once trimmed.
	Command,
	/// Carries a link while link skipping is enabled.
	Link,
	/// Fewer than three words.
	TooShort,
}

/// Outcome of feeding one line to the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
	/// The line was kept and produced this many observations.
	Kept(usize),
	Skipped(SkipReason),
}

/// Per-run line counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingStats {
	pub lines_read: usize,
	pub lines_kept: usize,
	pub skipped_not_english: usize,
	pub skipped_command: usize,
	pub skipped_link: usize,
	pub skipped_too_short: usize,
}

impl TrainingStats {
	fn count(&mut self, outcome: LineOutcome) {
		self.lines_read += 1;
		match outcome {
			LineOutcome::Kept(_) => self.lines_kept += 1,
			LineOutcome::Skipped(SkipReason::NotEnglish) => self.skipped_not_english += 1,
			LineOutcome::Skipped(SkipReason::Command) => self.skipped_command += 1,
			LineOutcome::Skipped(SkipReason::Link) => self.skipped_link += 1,
			LineOutcome::Skipped(SkipReason::TooShort) => self.skipped_too_short += 1,
		}
	}
}

/// Builds a [`TransitionTable`] from corpus lines.
///
/// # Behavior
/// Each line goes through the filters in order:
/// 1. English heuristic (`is_mostly_english` with the configured threshold)
/// 2. Command lines (`!` prefix after trimming)
/// 3. Link lines, only when `skip_links` is set
/// 4. Word count (at least three whitespace-separated words)
///
/// Words of a kept line are taken verbatim (no case folding, no punctuation
/// stripping) and every window of three consecutive words is recorded.
/// The builder only ever appends.
#[derive(Debug, Default)]
pub struct BrainBuilder {
	options: TrainingOptions,
	table: TransitionTable,
	stats: TrainingStats,
}

impl BrainBuilder {
	pub fn new(options: TrainingOptions) -> Self {
		Self {
			options,
			table: TransitionTable::new(),
			stats: TrainingStats::default(),
		}
	}

	/// Classifies a line without touching the table.
	fn classify<'l>(&self, line: &'l str) -> Result<Vec<&'l str>, SkipReason> {
		if !is_mostly_english(line, self.options.threshold()) {
			return Err(SkipReason::NotEnglish);
		}
		if is_command(line) {
			return Err(SkipReason::Command);
		}
		if self.options.skip_links && contains_link(line) {
			return Err(SkipReason::Link);
		}

		let words = split_words(line);
		if words.len() < WINDOW_SIZE {
			return Err(SkipReason::TooShort);
		}
		Ok(words)
	}

	/// Feeds a single line.
	pub fn add_line(&mut self, line: &str) -> LineOutcome {
		let outcome = match self.classify(line) {
			Ok(words) => LineOutcome::Kept(self.table.add_words(&words)),
			Err(reason) => LineOutcome::Skipped(reason),
		};
		self.stats.count(outcome);
		outcome
	}

	/// Feeds a whole corpus, line by line.
	pub fn add_text(&mut self, text: &str) {
		for line in split_lines(text) {
			self.add_line(line);
		}
		debug!("Training stats: {:?}", self.stats);
	}

	pub fn stats(&self) -> &TrainingStats {
		&self.stats
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Consumes the builder and returns the table.
	pub fn into_table(self) -> TransitionTable {
		self.table
	}
}

/// Builds the transition table of a corpus in one pass.
pub fn build_brain(text: &str, options: &TrainingOptions) -> TransitionTable {
	let mut builder = BrainBuilder::new(options.clone());
	builder.add_text(text);
	builder.into_table()
}
