use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator placed between the two words of a pair-key.
pub const KEY_SEPARATOR: char = '|';

/// Number of consecutive words in one observation (two-word key + successor).
pub const WINDOW_SIZE: usize = 3;

/// Second-order word transition table.
///
/// The `TransitionTable` maps a pair of consecutive words (joined by
/// [`KEY_SEPARATOR`]) to every word observed right after that pair.
///
/// # Responsibilities
/// - Accumulate successors for each pair, in arrival order
/// - Slide a window of [`WINDOW_SIZE`] words over a tokenized line
/// - Serialize as a plain `{ "a|b": ["c", ...] }` mapping
///
/// # Invariants
/// - Every key has at least one successor
/// - Duplicated successors are kept (frequency is the repetition count)
/// - Keys iterate (and serialize) in first-insertion order
/// - Entries are never removed or rewritten
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TransitionTable {
	transitions: IndexMap<String, Vec<String>>,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the key for a pair of consecutive words.
	///
	/// Example: `("the", "cat")` → `"the|cat"`
	pub fn pair_key(first: &str, second: &str) -> String {
		let mut key = String::with_capacity(first.len() + second.len() + 1);
		key.push_str(first);
		key.push(KEY_SEPARATOR);
		key.push_str(second);
		key
	}

	/// Splits a key back into its two words.
	///
	/// Splits on the first separator, so a second word containing `|`
	/// comes back whole. Returns `None` if the key has no separator.
	pub fn split_key(key: &str) -> Option<(&str, &str)> {
		key.split_once(KEY_SEPARATOR)
	}

	/// Records one observation of `successor` following `first second`.
	pub fn record(&mut self, first: &str, second: &str, successor: &str) {
		self.transitions
			.entry(Self::pair_key(first, second))
			.or_default()
			.push(successor.to_owned());
	}

	/// Adds every window of three consecutive words.
	///
	/// For words `[A, B, C, D]` this records `A|B → C` then `B|C → D`.
	/// Returns the number of observations recorded (0 if fewer than
	/// [`WINDOW_SIZE`] words are given).
	pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) -> usize {
		if words.len() < WINDOW_SIZE {
			return 0;
		}

		for window in words.windows(WINDOW_SIZE) {
			self.record(window[0].as_ref(), window[1].as_ref(), window[2].as_ref());
		}
		words.len() - WINDOW_SIZE + 1
	}

	/// Returns the successors observed after `first second`.
	pub fn successors(&self, first: &str, second: &str) -> Option<&[String]> {
		self.get(&Self::pair_key(first, second))
	}

	/// Returns the successors stored under a raw pair-key.
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.transitions.get(key).map(Vec::as_slice)
	}

	/// Number of distinct pair-keys.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of recorded observations (successor entries).
	pub fn transition_count(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Iterates `(key, successors)` in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.transitions.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.transitions.keys().map(String::as_str)
	}
}
