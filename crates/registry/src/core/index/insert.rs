//! Definition checks and ranked insertion.
//!
//! # Role
//!
//! [`plan`] performs every check a definition must pass before any map is touched,
//! which keeps [`super::ParameterTypeRegistry::define`] all-or-nothing.

use std::cmp::Ordering;

use rustc_hash::FxHashMap as HashMap;

use super::Entry;
use super::rank::cmp_rank;
use crate::core::def::ParameterType;
use crate::core::error::RegistrationError;

/// Validates `def` against the current maps and returns the distinct regexps to index.
pub(super) fn plan(
	by_name: &HashMap<String, Entry>,
	by_regexp: &HashMap<String, Vec<Entry>>,
	def: &ParameterType,
) -> Result<Vec<String>, RegistrationError> {
	if by_name.contains_key(def.name()) {
		return Err(RegistrationError::DuplicateName { name: def.name().to_string() });
	}

	let mut regexps: Vec<String> = Vec::with_capacity(def.regexps().len());
	for regexp in def.regexps() {
		if regexps.contains(regexp) {
			continue;
		}
		if def.prefer_for_regexp_match()
			&& let Some(head) = by_regexp.get(regexp).and_then(|set| set.first())
			&& head.rank.preferred
		{
			return Err(RegistrationError::AmbiguousPreference {
				pattern: regexp.clone(),
				existing: head.def.name().to_string(),
				incoming: def.name().to_string(),
			});
		}
		regexps.push(regexp.clone());
	}
	Ok(regexps)
}

/// Inserts `entry` into a set kept sorted by [`cmp_rank`].
pub(super) fn insert_ranked(set: &mut Vec<Entry>, entry: Entry) {
	let at = set.partition_point(|existing| cmp_rank(&existing.rank, &entry.rank) == Ordering::Less);
	set.insert(at, entry);
}
