use std::collections::BTreeMap;

use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use super::WORD_END;
use super::markov_chain::MarkovChain;
use super::random_choice::pick_weighted;
use crate::error::{MarkovError, Result};

/// Progress of a single generation.
///
/// `Seeding` draws the first character, `Extending` appends one character
/// per step until the word end is drawn or the longest learned sample size
/// is reached. Both terminal phases are successful outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GenerationPhase {
	Seeding,
	Extending,
	TerminatedBySentinel,
	TerminatedByLengthCap,
}

/// Why a generation stopped.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
	/// The word end was drawn.
	Sentinel,
	/// The longest learned sample size was reached first.
	LengthCap,
}

/// A generated string and how its generation ended.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	/// Generated string, word end excluded.
	pub text: String,
	pub termination: Termination,
}

impl Generation {
	/// Length in chars, counting the word end when it was drawn.
	///
	/// Comparable with the learned sample sizes.
	pub fn span(&self) -> usize {
		let end = match self.termination {
			Termination::Sentinel => 1,
			Termination::LengthCap => 0,
		};
		self.text.chars().count() + end
	}
}

impl<R: Rng> MarkovChain<R> {
	/// Generates a new string from the finalized tables.
	///
	/// # Errors
	/// - `UntrainedGeneration` if no sample was recorded.
	/// - `NotFinalized` if training was not finalized.
	/// - `NoContinuationFound` if no learned context matches the generated tail.
	pub fn generate(&mut self) -> Result<String> {
		Ok(self.generate_detailed()?.text)
	}

	/// Generates `count` strings, stopping at the first error.
	pub fn generate_many(&mut self, count: usize) -> Result<Vec<String>> {
		(0..count).map(|_| self.generate()).collect()
	}

	/// Generates a new string and reports how the generation ended.
	///
	/// If `min_size_retries` is set, a result shorter than the shortest
	/// learned sample is drawn again, at most `min_size_retries` times.
	/// The last attempt is returned whatever its size.
	pub fn generate_detailed(&mut self) -> Result<Generation> {
		if self.samples_analysed == 0 {
			return Err(MarkovError::UntrainedGeneration);
		}
		if !self.finalized {
			return Err(MarkovError::NotFinalized);
		}

		let min_size = self.sizes.min.unwrap_or(0);
		let mut generation = self.draw()?;
		let mut nb_try = self.config.min_size_retries;
		while nb_try > 0 && generation.span() < min_size {
			generation = self.draw()?;
			nb_try -= 1;
		}

		Ok(generation)
	}

	/// Runs one generation, from seeding to termination.
	fn draw(&mut self) -> Result<Generation> {
		let max_size = self.sizes.max.unwrap_or(0);
		let mut result: Vec<char> = Vec::with_capacity(max_size);
		let mut phase = GenerationPhase::Seeding;

		let termination = loop {
			phase = match phase {
				GenerationPhase::Seeding => {
					let first = pick_weighted(&self.starting_characters, &mut self.rng)
						.ok_or(MarkovError::UntrainedGeneration)?;
					result.push(first);
					if self.config.debug_mode {
						debug!("Generation steps:");
						debug!("{}", first);
					}
					GenerationPhase::Extending
				}
				GenerationPhase::Extending if result.len() >= max_size => {
					GenerationPhase::TerminatedByLengthCap
				}
				GenerationPhase::Extending => {
					let selections = self.blend(&result)?;
					let next = pick_weighted(&selections, &mut self.rng).ok_or_else(|| {
						MarkovError::NoContinuationFound { context: result.iter().collect() }
					})?;
					result.push(next);

					if next == WORD_END {
						GenerationPhase::TerminatedBySentinel
					} else {
						if self.config.debug_mode {
							debug!("Now len(result) = {}.", result.len());
							debug!(" > {}", next);
						}
						GenerationPhase::Extending
					}
				}
				GenerationPhase::TerminatedBySentinel => break Termination::Sentinel,
				GenerationPhase::TerminatedByLengthCap => break Termination::LengthCap,
			};
		};

		if result.last() == Some(&WORD_END) {
			result.pop();
		}

		Ok(Generation { text: result.into_iter().collect(), termination })
	}

	/// Blends the continuations of every learned suffix of `result`.
	///
	/// For each order `k` from `min(len, max order)` down to 1, the
	/// continuations of the last `k` characters are summed entry-wise. The
	/// sum is then divided by the number of matching orders, so each order
	/// weighs the same whatever its length or how many samples informed it.
	///
	/// # Errors
	/// Returns `NoContinuationFound` if no suffix of `result` was learned.
	fn blend(&self, result: &[char]) -> Result<BTreeMap<char, f64>> {
		let mut selections: BTreeMap<char, f64> = BTreeMap::new();
		let mut selection_amount = 0;

		for k in (1..=self.config.max_markov_size.clamp(result.len())).rev() {
			let context: String = result[result.len() - k..].iter().collect();
			let Some(continuations) = self.ngrams.get(&k).and_then(|table| table.continuations(&context))
			else {
				continue;
			};

			if self.config.debug_mode {
				trace!("Taking mappings from {:?} with k = {}.", context, k);
			}
			for (next_char, weight) in continuations {
				*selections.entry(*next_char).or_insert(0.0) += weight;
			}
			selection_amount += 1;
		}

		if selection_amount == 0 {
			return Err(MarkovError::NoContinuationFound { context: result.iter().collect() });
		}

		let amount = selection_amount as f64;
		for weight in selections.values_mut() {
			*weight /= amount;
		}

		if self.config.debug_mode {
			trace!("With selections: {:?}", selections);
		}
		Ok(selections)
	}
}
