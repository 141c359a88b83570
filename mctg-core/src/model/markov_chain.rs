use std::collections::BTreeMap;
use std::io::BufRead;
use std::iter;
use std::path::Path;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::WORD_END;
use super::config::{Config, MaxOrder};
use super::ngram_table::NGramTable;
use super::size_stats::SizeStats;
use super::snapshot::ModelSnapshot;
use crate::error::{MarkovError, Result};
use crate::io::{open_samples, raw_lines, strip_separator};

/// Outcome of a batch training call.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingReport {
	/// Samples recorded in the tables.
	pub recorded: usize,
	/// Samples too short to be learned.
	pub skipped: usize,
}

/// Variable-order Markov chain over characters.
///
/// This struct manages:
/// - `ngrams`: one continuation table per context order `k`.
/// - `starting_characters`: how often each character opens a sample.
/// - `sizes`: min/max/average sample length, the max bounding generation.
/// - `rng`: the random source used by generation.
///
/// # Lifecycle
/// - `train*` accumulates raw counts, any number of times.
/// - `finalize_training` turns counts into probabilities, exactly once.
/// - `generate*` draws strings from the probabilities, any number of times.
/// - `reset` discards everything learned, so training can start over.
///
/// Instances are independent: each owns its tables and its random source.
#[derive(Debug)]
pub struct MarkovChain<R = StdRng> {
	pub(super) config: Config,
	pub(super) rng: R,
	pub(super) samples_analysed: usize,
	pub(super) starting_characters: BTreeMap<char, f64>,
	pub(super) ngrams: BTreeMap<usize, NGramTable>,
	pub(super) sizes: SizeStats,
	pub(super) finalized: bool,
}

impl MarkovChain<StdRng> {
	/// Creates an empty chain whose random source is seeded from the OS.
	///
	/// # Errors
	/// Returns `InvalidMaxOrder` if the configuration asks for contexts of length 0.
	pub fn new(config: Config) -> Result<Self> {
		Self::with_rng(config, StdRng::from_os_rng())
	}
}

impl<R: Rng> MarkovChain<R> {
	/// Creates an empty chain drawing from `rng`.
	///
	/// Pass a seeded generator (ex. `StdRng::seed_from_u64`) to reproduce
	/// the same sequence of generations.
	///
	/// # Errors
	/// Returns `InvalidMaxOrder` if the configuration asks for contexts of length 0.
	pub fn with_rng(config: Config, rng: R) -> Result<Self> {
		if config.max_markov_size == MaxOrder::UpTo(0) {
			return Err(MarkovError::InvalidMaxOrder);
		}

		Ok(Self {
			config,
			rng,
			samples_analysed: 0,
			starting_characters: BTreeMap::new(),
			ngrams: BTreeMap::new(),
			sizes: SizeStats::default(),
			finalized: false,
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Number of samples recorded since the last reset.
	pub fn samples_analysed(&self) -> usize {
		self.samples_analysed
	}

	pub fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// Discards every learned table and statistic.
	///
	/// The configuration and the random source are kept.
	pub fn reset(&mut self) {
		self.samples_analysed = 0;
		self.starting_characters.clear();
		self.ngrams.clear();
		self.sizes = SizeStats::default();
		self.finalized = false;
	}

	/// Turns a raw line into the characters actually learned.
	///
	/// - Removes the trailing line separator
	/// - Drops any embedded word end (reserved)
	/// - Folds the case if the chain is case-insensitive
	/// - Appends the word end
	fn normalize_sample(&self, raw: &str) -> Vec<char> {
		strip_separator(raw)
			.chars()
			.filter(|c| *c != WORD_END)
			.map(|c| self.config.fold(c))
			.chain(iter::once(WORD_END))
			.collect()
	}

	/// Records one raw sample.
	///
	/// # Behavior
	/// - Updates the size statistics and the starting character counts.
	/// - For every order `k` in `1..=min(max order, size - 1)`, records each
	///   `k`-character context with the character following it.
	///
	/// # Errors
	/// - `InvalidSampleSkipped` if the sample is shorter than 2 characters with
	///   its word end. Nothing is recorded.
	/// - `AlreadyFinalized` if the tables already hold probabilities.
	pub fn train(&mut self, sample: &str) -> Result<()> {
		if self.finalized {
			return Err(MarkovError::AlreadyFinalized);
		}

		let chars = self.normalize_sample(sample);
		let size = chars.len();
		if size < 2 {
			if self.config.enable_warnings {
				warn!("Invalid sample size found for {:?}. Skipping.", sample);
			}
			return Err(MarkovError::InvalidSampleSkipped { sample: sample.to_owned() });
		}

		self.sizes.consider(size);
		*self.starting_characters.entry(chars[0]).or_insert(0.0) += 1.0;

		for k in 1..=self.config.max_markov_size.clamp(size - 1) {
			self.ngrams
				.entry(k)
				.or_insert_with(|| NGramTable::new(k))
				.add_sample(&chars);
		}

		self.samples_analysed += 1;
		Ok(())
	}

	/// Records every sample of `samples`.
	///
	/// Samples too short to be learned are counted as skipped; any other
	/// error stops the batch.
	pub fn train_all<I, S>(&mut self, samples: I) -> Result<TrainingReport>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut report = TrainingReport::default();
		for sample in samples {
			self.tally(sample.as_ref(), &mut report)?;
		}
		Ok(report)
	}

	/// Records every line of `reader`, separators included.
	///
	/// # Errors
	/// Read failures are returned as `MarkovError::Io`.
	pub fn train_reader<B: BufRead>(&mut self, reader: B) -> Result<TrainingReport> {
		let mut report = TrainingReport::default();
		for line in raw_lines(reader) {
			self.tally(&line?, &mut report)?;
		}
		Ok(report)
	}

	/// Trains on `sample`, recovering from a skipped sample.
	fn tally(&mut self, sample: &str, report: &mut TrainingReport) -> Result<()> {
		match self.train(sample) {
			Ok(()) => report.recorded += 1,
			Err(MarkovError::InvalidSampleSkipped { .. }) => report.skipped += 1,
			Err(e) => return Err(e),
		}
		Ok(())
	}

	/// Resets the chain, learns every line of a file and finalizes training.
	///
	/// # Errors
	/// - `Io` if the file cannot be opened or read.
	/// - `DivisionUndefined` if the file holds no valid sample.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<TrainingReport> {
		self.reset();
		let report = self.train_reader(open_samples(&filepath)?)?;
		self.finalize_training()?;
		debug!(
			"Sampled {} ({} samples analysed, {} skipped)",
			filepath.as_ref().display(),
			report.recorded,
			report.skipped
		);
		Ok(report)
	}

	/// Turns the accumulated counts into probabilities.
	///
	/// - The size sum becomes the average size.
	/// - Starting character counts are divided by the number of samples.
	/// - Continuation counts are divided by their context's appearances.
	///
	/// Must run exactly once per training batch.
	///
	/// # Errors
	/// - `AlreadyFinalized` if called twice without a reset in between.
	/// - `DivisionUndefined` if no sample was recorded.
	pub fn finalize_training(&mut self) -> Result<()> {
		if self.finalized {
			return Err(MarkovError::AlreadyFinalized);
		}
		if self.samples_analysed == 0 {
			return Err(MarkovError::DivisionUndefined);
		}

		let samples = self.samples_analysed as f64;
		self.sizes.finalize(self.samples_analysed);
		for weight in self.starting_characters.values_mut() {
			*weight /= samples;
		}
		for table in self.ngrams.values_mut() {
			table.normalize();
		}

		self.finalized = true;
		debug!(
			"Training finalized: {} samples, {} orders, sizes {:?}..{:?}",
			self.samples_analysed,
			self.ngrams.len(),
			self.sizes.min,
			self.sizes.max
		);
		Ok(())
	}

	/// Returns a read-only view over the learned tables and statistics.
	pub fn inspect(&self) -> ModelSnapshot<'_> {
		ModelSnapshot {
			samples_analysed: self.samples_analysed,
			finalized: self.finalized,
			sizes: &self.sizes,
			starting_characters: &self.starting_characters,
			ngrams: &self.ngrams,
		}
	}
}
