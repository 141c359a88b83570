//! Property-based tests for the Markov chain.
//!
//! Verifies that finalized distributions are probability distributions,
//! that generation always terminates without leaking the word end, and that
//! training one sample at a time matches batch training.

use mctg_core::{Config, MarkovChain, MaxOrder, WORD_END};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const TOLERANCE: f64 = 1e-9;

/// Strategy generating small corpora of name-like lines.
fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-eA-E]{0,8}\n?", 1..24)
}

/// Strategy generating every kind of max order.
fn max_order() -> impl Strategy<Value = MaxOrder> {
	prop_oneof![Just(MaxOrder::Unbounded), (1usize..6).prop_map(MaxOrder::UpTo)]
}

fn config(case_sensitive: bool, max_markov_size: MaxOrder) -> Config {
	Config { case_sensitive, max_markov_size, ..Config::default() }
}

proptest! {
	/// Every finalized distribution sums to 1.
	#[test]
	fn finalized_distributions_sum_to_one(
		samples in corpus(),
		case_sensitive in any::<bool>(),
		order in max_order(),
	) {
		let mut chain = MarkovChain::with_rng(config(case_sensitive, order), StdRng::seed_from_u64(0)).unwrap();
		let report = chain.train_all(&samples).unwrap();
		prop_assume!(report.recorded > 0);
		chain.finalize_training().unwrap();

		let snapshot = chain.inspect();
		let start: f64 = snapshot.starting_characters.values().sum();
		prop_assert!((start - 1.0).abs() < TOLERANCE, "start sums to {}", start);

		for table in snapshot.ngrams.values() {
			for state in table.states() {
				prop_assert_eq!(state.key().chars().count(), table.order());
				let total: f64 = state.transitions().values().sum();
				prop_assert!((total - 1.0).abs() < TOLERANCE, "{:?} sums to {}", state.key(), total);
			}
		}
	}

	/// Contexts never exceed the configured order nor the longest sample.
	#[test]
	fn orders_are_bounded(samples in corpus(), order in max_order()) {
		let mut chain = MarkovChain::with_rng(config(false, order), StdRng::seed_from_u64(0)).unwrap();
		let report = chain.train_all(&samples).unwrap();
		prop_assume!(report.recorded > 0);

		let snapshot = chain.inspect();
		let longest = snapshot.sizes.max.unwrap();
		prop_assert!(snapshot.max_order() <= order.clamp(longest - 1));
		prop_assert_eq!(snapshot.samples_analysed, report.recorded);
	}

	/// Generation terminates within the longest sample size, word end excluded.
	#[test]
	fn generation_terminates_without_word_end(
		samples in corpus(),
		order in max_order(),
		seed in any::<u64>(),
	) {
		let mut chain = MarkovChain::with_rng(config(false, order), StdRng::seed_from_u64(seed)).unwrap();
		let report = chain.train_all(&samples).unwrap();
		prop_assume!(report.recorded > 0);
		chain.finalize_training().unwrap();

		let max = chain.inspect().sizes.max.unwrap();
		for _ in 0..8 {
			let generation = chain.generate_detailed().unwrap();
			prop_assert!(!generation.text.contains(WORD_END));
			prop_assert!(generation.span() <= max);
		}
	}

	/// Feeding samples one at a time yields the same tables as a batch.
	#[test]
	fn one_by_one_matches_batch(samples in corpus(), case_sensitive in any::<bool>()) {
		let mut one_by_one = MarkovChain::with_rng(config(case_sensitive, MaxOrder::default()), StdRng::seed_from_u64(0)).unwrap();
		for sample in &samples {
			let _ = one_by_one.train(sample);
		}

		let mut batch = MarkovChain::with_rng(config(case_sensitive, MaxOrder::default()), StdRng::seed_from_u64(0)).unwrap();
		batch.train_all(&samples).unwrap();

		prop_assert_eq!(one_by_one.inspect(), batch.inspect());
	}
}
