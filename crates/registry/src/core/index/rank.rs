//! Ranking among types that share a regexp.

use std::cmp::Ordering;

/// Position of a definition within every regexp set it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rank {
	pub preferred: bool,
	/// Definition sequence within one registry.
	pub ordinal: u32,
}

/// Orders ranks head-first.
///
/// Precedence hierarchy:
/// 1. Preference (preferential first)
/// 2. Ordinal (earlier definition first)
///
/// Ordinals are unique per registry, so this is a total order.
pub(crate) fn cmp_rank(a: &Rank, b: &Rank) -> Ordering {
	b.preferred.cmp(&a.preferred).then_with(|| a.ordinal.cmp(&b.ordinal))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_preferred_sorts_first() {
		let preferred = Rank { preferred: true, ordinal: 9 };
		let plain = Rank { preferred: false, ordinal: 0 };
		assert_eq!(cmp_rank(&preferred, &plain), Ordering::Less);
		assert_eq!(cmp_rank(&plain, &preferred), Ordering::Greater);
	}

	#[test]
	fn test_ordinal_breaks_ties() {
		let first = Rank { preferred: false, ordinal: 1 };
		let second = Rank { preferred: false, ordinal: 2 };
		assert_eq!(cmp_rank(&first, &second), Ordering::Less);
		assert_eq!(cmp_rank(&first, &first), Ordering::Equal);
	}
}
