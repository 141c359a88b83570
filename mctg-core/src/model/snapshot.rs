use std::collections::BTreeMap;

use serde::Serialize;

use super::ngram_table::NGramTable;
use super::size_stats::SizeStats;

/// Read-only view over everything a `MarkovChain` learned.
///
/// Values are raw counts until training is finalized, probabilities after.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ModelSnapshot<'a> {
	pub samples_analysed: usize,
	pub finalized: bool,
	pub sizes: &'a SizeStats,
	pub starting_characters: &'a BTreeMap<char, f64>,
	pub ngrams: &'a BTreeMap<usize, NGramTable>,
}

impl<'a> ModelSnapshot<'a> {
	/// Continuations learned after `context`, looked up in the table of its length.
	pub fn continuations(&self, context: &str) -> Option<&'a BTreeMap<char, f64>> {
		let k = context.chars().count();
		self.ngrams.get(&k)?.continuations(context)
	}

	/// Number of times `context` was followed by a character.
	pub fn appearances(&self, context: &str) -> Option<usize> {
		let k = context.chars().count();
		self.ngrams.get(&k)?.state(context).map(|state| state.appearances())
	}

	/// Longest context order learned so far.
	pub fn max_order(&self) -> usize {
		self.ngrams.keys().next_back().copied().unwrap_or(0)
	}

	/// Total number of contexts, all orders included.
	pub fn context_count(&self) -> usize {
		self.ngrams.values().map(NGramTable::len).sum()
	}
}
