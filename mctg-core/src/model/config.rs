use serde::{Deserialize, Serialize};

/// Longest context considered when learning and generating.
///
/// # Variants
/// - `Unbounded`: use every context the sample (or the generated string) offers.
/// - `UpTo(k)`: use contexts of length `1..=k`. `k` must be at least 1.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxOrder {
	Unbounded,
	UpTo(usize),
}

impl MaxOrder {
	/// Clamps the order to the `available` number of characters.
	pub fn clamp(self, available: usize) -> usize {
		match self {
			MaxOrder::Unbounded => available,
			MaxOrder::UpTo(k) => k.min(available),
		}
	}
}

impl Default for MaxOrder {
	fn default() -> Self {
		MaxOrder::UpTo(4)
	}
}

/// Settings of a `MarkovChain`.
///
/// # Fields
/// - `case_sensitive`: keep `"Ann"` and `"ann"` in distinct buckets.
/// - `max_markov_size`: longest context learned and blended.
/// - `enable_warnings`: log skipped samples.
/// - `debug_mode`: trace every generation step (no effect on results).
/// - `min_size_retries`: how many times a result shorter than the shortest
///   sample is drawn again. `0` disables the check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
	pub case_sensitive: bool,
	pub max_markov_size: MaxOrder,
	pub enable_warnings: bool,
	pub debug_mode: bool,
	pub min_size_retries: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			case_sensitive: false,
			max_markov_size: MaxOrder::default(),
			enable_warnings: false,
			debug_mode: false,
			min_size_retries: 0,
		}
	}
}

impl Config {
	/// Returns the character as stored in the tables.
	///
	/// Case-insensitive configurations keep the first char of the lowercase
	/// mapping, so a context keeps one char per position. The word end is
	/// never folded.
	pub(crate) fn fold(&self, c: char) -> char {
		if self.case_sensitive || c == crate::model::WORD_END {
			return c;
		}
		c.to_lowercase().next().unwrap_or(c)
	}
}
