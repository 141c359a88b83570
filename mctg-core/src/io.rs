use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a sample file for line-by-line reading.
pub fn open_samples<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Iterator over the lines of a reader, line separators included.
///
/// Unlike `BufRead::lines`, the trailing `\n` / `\r\n` is kept so samples
/// reach the chain exactly as they were read.
pub struct RawLines<B> {
	reader: B,
}

/// Returns an iterator over the raw lines of `reader`.
pub fn raw_lines<B: BufRead>(reader: B) -> RawLines<B> {
	RawLines { reader }
}

impl<B: BufRead> Iterator for RawLines<B> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		let mut line = String::new();
		match self.reader.read_line(&mut line) {
			Ok(0) => None,
			Ok(_) => Some(Ok(line)),
			Err(e) => Some(Err(e)),
		}
	}
}

/// Removes one trailing line separator (`\n` or `\r\n`), if present.
pub(crate) fn strip_separator(line: &str) -> &str {
	match line.strip_suffix('\n') {
		Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped),
		None => line,
	}
}
