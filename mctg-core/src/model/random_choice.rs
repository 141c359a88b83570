use std::collections::BTreeMap;

use rand::Rng;

/// Draws one key of `distribution` with a probability equal to its weight.
///
/// Weights must be non-negative and sum to ~1.0. A threshold is drawn in
/// `[0, 1)`; entries are scanned in key order and the first one whose
/// weight covers the remaining threshold is returned, otherwise its weight
/// is subtracted from the threshold.
///
/// If rounding leaves a remainder once every entry has been visited, the
/// last entry is returned.
///
/// Returns `None` only if the distribution is empty.
pub fn pick_weighted<K, R>(distribution: &BTreeMap<K, f64>, rng: &mut R) -> Option<K>
where
	K: Copy + Ord,
	R: Rng + ?Sized,
{
	let mut threshold: f64 = rng.random();

	let mut fallback = None;
	for (key, weight) in distribution {
		if threshold <= *weight {
			return Some(*key);
		}
		threshold -= weight;
		fallback = Some(*key);
	}

	fallback
}
