use log::info;
use mctg_core::{Config, MarkovChain, MaxOrder};

/// Capitalizes the first letter of every word, lowercasing the others.
fn title_case(word: &str) -> String {
	let mut result = String::with_capacity(word.len());
	let mut start_of_word = true;
	for c in word.chars() {
		if start_of_word {
			result.extend(c.to_uppercase());
		} else {
			result.extend(c.to_lowercase());
		}
		start_of_word = !c.is_alphabetic();
	}
	result
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// RUST_LOG=debug shows the generation steps
	env_logger::init();

	// Sample file, one sample per line
	let path = std::env::args().nth(1).unwrap_or_else(|| "./data/names.txt".to_owned());

	// Same defaults as the command line tool: case-insensitive, contexts up to 4 chars
	let config = Config {
		max_markov_size: MaxOrder::UpTo(4),
		enable_warnings: true,
		debug_mode: log::log_enabled!(log::Level::Debug),
		..Config::default()
	};

	let mut chain = MarkovChain::new(config)?;

	// Reset, learn every line and finalize
	let report = chain.train_file(&path)?;
	println!("Input file sampled ({} samples analysed).", report.recorded);
	if report.skipped > 0 {
		info!("{} samples skipped", report.skipped);
	}

	let snapshot = chain.inspect();
	println!("Average size: {:.2}", snapshot.sizes.average);
	println!("    min: {:?}", snapshot.sizes.min);
	println!("    max: {:?}", snapshot.sizes.max);
	println!("Contexts learned: {} (up to {} chars)", snapshot.context_count(), snapshot.max_order());

	// Generate 10 words
	for (i, word) in chain.generate_many(10)?.iter().enumerate() {
		println!("Generated word {}: {}", i + 1, title_case(word));
	}

	Ok(())
}
