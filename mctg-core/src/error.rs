use thiserror::Error;

/// Errors raised while training on samples or generating from a trained chain.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The sample is shorter than two characters once the word end is appended.
	///
	/// Recovered locally by batch training: the sample is counted as skipped
	/// and nothing is recorded.
	#[error("invalid sample size for {sample:?}, skipping")]
	InvalidSampleSkipped { sample: String },

	/// Finalization was requested before any sample was recorded.
	#[error("cannot finalize training: no samples were analysed")]
	DivisionUndefined,

	/// No learned context matches the tail of the string being generated.
	#[error("no continuation learned for context {context:?}")]
	NoContinuationFound { context: String },

	/// Generation was requested before any sample was recorded.
	#[error("cannot generate: no samples were analysed")]
	UntrainedGeneration,

	/// Generation was requested on raw counts.
	#[error("cannot generate: training has not been finalized")]
	NotFinalized,

	/// The tables already hold probabilities; reset before training again.
	#[error("training is already finalized, reset before training again")]
	AlreadyFinalized,

	#[error("max markov size must be at least 1")]
	InvalidMaxOrder,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
