use crate::error::{BrainError, BrainResult};
use crate::model::filter::DEFAULT_ENGLISH_THRESHOLD;

/// Parameters controlling which corpus lines feed the transition table.
///
/// # Invariants
/// - `threshold` is always within `[0.0, 1.0]`
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingOptions {
	/// Minimum ASCII-letter ratio for a line to be considered English.
	threshold: f64,

	/// Whether lines carrying links (`http`, `.com`, `.net`, `.org`) are skipped.
	pub skip_links: bool,
}

impl Default for TrainingOptions {
	fn default() -> Self {
		Self {
			threshold: DEFAULT_ENGLISH_THRESHOLD,
			skip_links: false,
		}
	}
}

impl TrainingOptions {
	/// Creates options with the given threshold and link skipping disabled.
	///
	/// # Errors
	/// Returns [`BrainError::InvalidThreshold`] if the value is outside `[0.0, 1.0]`.
	pub fn new(threshold: f64) -> BrainResult<Self> {
		let mut options = Self::default();
		options.set_threshold(threshold)?;
		Ok(options)
	}

	/// Returns the English heuristic threshold.
	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Sets the English heuristic threshold (0.0..=1.0).
	///
	/// # Errors
	/// Returns [`BrainError::InvalidThreshold`] if the value is outside the valid range
	/// (NaN included).
	pub fn set_threshold(&mut self, threshold: f64) -> BrainResult<()> {
		if !(0.0..=1.0).contains(&threshold) {
			return Err(BrainError::InvalidThreshold(threshold));
		}
		self.threshold = threshold;
		Ok(())
	}
}
