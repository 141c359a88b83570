use std::collections::BTreeMap;

use serde::Serialize;

use super::state::State;

/// Continuation table for contexts of a single order `k`.
///
/// # Responsibilities
/// - Record, for each `k`-character context of a sample, the character following it
/// - Normalize every context into a probability distribution
/// - Look up the distribution following a context
///
/// # Invariants
/// - `k` is always >= 1
/// - Each state in `states` is keyed by a context of exactly `k` characters
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NGramTable {
	/// Context length.
	k: usize,

	/// Mapping from a context to its corresponding state.
	states: BTreeMap<String, State>,
}

impl NGramTable {
	/// Creates an empty table for contexts of length `k` (`k >= 1`).
	pub fn new(k: usize) -> Self {
		debug_assert!(k >= 1, "context order must be >= 1");
		Self { k, states: BTreeMap::new() }
	}

	pub fn order(&self) -> usize {
		self.k
	}

	/// Records every `k`-character context of `sample` with its following character.
	///
	/// `sample` is expected to be already case-folded and to end with the word end.
	/// Samples shorter than `k + 1` leave the table untouched.
	pub fn add_sample(&mut self, sample: &[char]) {
		if sample.len() <= self.k {
			return;
		}

		for window in sample.windows(self.k + 1) {
			let key: String = window[..self.k].iter().collect();
			let next_char = window[self.k];

			self.states
				.entry(key)
				.or_insert_with_key(|key| State::new(key))
				.add_transition(next_char);
		}
	}

	/// Returns the continuations observed after `context`.
	///
	/// Returns `None` if the context was never seen.
	pub fn continuations(&self, context: &str) -> Option<&BTreeMap<char, f64>> {
		self.states.get(context).map(State::transitions)
	}

	/// Returns the state of `context`, if any.
	pub fn state(&self, context: &str) -> Option<&State> {
		self.states.get(context)
	}

	/// Iterates over all the contexts of this table.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.values()
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Divides every continuation count by its context's appearances.
	pub(crate) fn normalize(&mut self) {
		for state in self.states.values_mut() {
			state.normalize();
		}
	}
}
