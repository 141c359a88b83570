//! Markov chain text generation library.
//!
//! This crate learns character-transition statistics from sample strings
//! and generates new strings from them:
//! - Variable-order contexts, bounded by `MaxOrder`
//! - One-shot normalization of the accumulated counts
//! - Generation blending every matching context order with equal weight
//! - Injectable random source for reproducible generation
//!
//! ```no_run
//! use mctg_core::{Config, MarkovChain};
//!
//! let mut chain = MarkovChain::new(Config::default())?;
//! chain.train_all(["marie\n", "martin\n", "manon\n"])?;
//! chain.finalize_training()?;
//! println!("{}", chain.generate()?);
//! # Ok::<(), mctg_core::MarkovError>(())
//! ```

/// Error type shared by the whole crate.
pub mod error;

/// Core Markov chain models and generation logic.
pub mod model;

/// Line-oriented sample sources.
pub mod io;

pub use error::{MarkovError, Result};
pub use model::config::{Config, MaxOrder};
pub use model::generator::{Generation, Termination};
pub use model::markov_chain::{MarkovChain, TrainingReport};
pub use model::snapshot::ModelSnapshot;
pub use model::WORD_END;
