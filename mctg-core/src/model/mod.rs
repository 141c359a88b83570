//! Top-level module for the Markov chain text generator.
//!
//! This module provides a variable-order character Markov chain, including:
//! - Per-context continuation counts (`State`)
//! - Per-order continuation tables (`NGramTable`)
//! - The chain itself: training, finalization and inspection (`MarkovChain`)
//! - Blended multi-order generation (`generator`)
//! - Weighted sampling (`random_choice`)

/// Configuration of a chain, including the longest context order.
pub mod config;

/// Blended variable-order generation.
///
/// Draws the first character from the starting characters, then extends the
/// string by blending the continuations of every learned suffix.
pub mod generator;

/// The chain: sample ingestion, finalization and inspection.
pub mod markov_chain;

/// Continuation table for a single context order.
pub mod ngram_table;

/// Weighted draw over a probability distribution.
pub mod random_choice;

/// Running min/max/average of sample sizes.
pub mod size_stats;

/// Read-only view over a chain.
pub mod snapshot;

/// Continuations of a single context.
pub mod state;

/// Reserved character appended to every sample, marking the end of a word.
///
/// Drawing it stops the generation; it never appears in a generated string.
pub const WORD_END: char = '\0';
