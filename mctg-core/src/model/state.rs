use std::collections::BTreeMap;

use serde::Serialize;

/// Represents a context of the Markov chain.
///
/// A `State` corresponds to a `k`-character context (`key`) and stores every
/// character observed right after it.
///
/// Before finalization, `transitions` holds raw occurrence counts and
/// `appearances` their sum. After finalization, `transitions` holds the
/// probability of each continuation.
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - `appearances` equals the number of recorded transitions
/// - Once normalized, the transition weights sum to 1.0
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct State {
	/// Context (k characters).
	key: String,
	/// Number of times the context was seen followed by a character.
	appearances: usize,
	/// Continuations indexed by the next character.
	/// Example: { 'e' => 42.0, 'a' => 3.0 }
	transitions: BTreeMap<char, f64>,
}

impl State {
	/// Creates a new empty state for the given context.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			appearances: 0,
			transitions: BTreeMap::new(),
		}
	}

	/// Records an occurrence of `next_char` after this context.
	pub fn add_transition(&mut self, next_char: char) {
		*self.transitions.entry(next_char).or_insert(0.0) += 1.0;
		self.appearances += 1;
	}

	/// Turns occurrence counts into probabilities.
	///
	/// Must be called once per training batch: a second call divides
	/// probabilities again.
	pub(crate) fn normalize(&mut self) {
		if self.appearances == 0 {
			return;
		}
		let appearances = self.appearances as f64;
		for weight in self.transitions.values_mut() {
			*weight /= appearances;
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn appearances(&self) -> usize {
		self.appearances
	}

	/// Continuations of this context, counts or probabilities depending on
	/// whether training was finalized.
	pub fn transitions(&self) -> &BTreeMap<char, f64> {
		&self.transitions
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transitions_accumulate() {
		let mut state = State::new("a");
		state.add_transition('b');
		state.add_transition('b');
		state.add_transition('c');

		assert_eq!(state.key(), "a");
		assert_eq!(state.appearances(), 3);
		assert_eq!(state.transitions().get(&'b'), Some(&2.0));
		assert_eq!(state.transitions().get(&'c'), Some(&1.0));
	}

	#[test]
	fn normalize_produces_probabilities() {
		let mut state = State::new("a");
		for c in ['b', 'b', 'c', 'd'] {
			state.add_transition(c);
		}
		state.normalize();

		assert_eq!(state.transitions().get(&'b'), Some(&0.5));
		assert_eq!(state.transitions().get(&'c'), Some(&0.25));
		let total: f64 = state.transitions().values().sum();
		assert!((total - 1.0).abs() < 1e-12);
	}
}
