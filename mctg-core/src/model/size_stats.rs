use serde::Serialize;

/// Running statistics over sample lengths (word end included, in chars).
///
/// `average` accumulates the sum of lengths while training and becomes the
/// mean once `finalize` is called.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SizeStats {
	pub min: Option<usize>,
	pub max: Option<usize>,
	pub average: f64,
}

impl SizeStats {
	pub fn consider(&mut self, size: usize) {
		if self.min.is_none_or(|min| size < min) {
			self.min = Some(size);
		}
		if self.max.is_none_or(|max| size > max) {
			self.max = Some(size);
		}
		self.average += size as f64;
	}

	pub(crate) fn finalize(&mut self, samples: usize) {
		self.average /= samples as f64;
	}
}
