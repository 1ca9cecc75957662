//! Registry invariants, each with a runnable check.
//!
//! Every `inv_*` function states one contract of [`super::ParameterTypeRegistry`];
//! the matching `test_*` wrapper runs it under `cargo test`.

#![allow(dead_code)]

use std::collections::BTreeSet;

#[cfg(test)]
use pretty_assertions::assert_eq;
#[cfg(test)]
use proptest::prelude::*;

use super::test_fixtures::{CountingGenerator, empty_registry, expression_for, make_def};
use crate::NumberFormat;
use crate::core::{ParameterTypeRegistry, RegistrationError};

/// Invariant: a defined name is lookup-able, and redefining it fails without replacing it.
pub(crate) fn inv_duplicate_name_keeps_first() {
	let mut registry = empty_registry();
	registry.define(make_def("color", &["red|blue"], false)).unwrap();
	assert_eq!(registry.lookup_by_type_name("color").unwrap().regexps(), &["red|blue".to_string()]);

	let err = registry.define(make_def("color", &["green"], true)).unwrap_err();
	assert_eq!(err, RegistrationError::DuplicateName { name: "color".into() });

	let kept = registry.lookup_by_type_name("color").unwrap();
	assert_eq!(kept.regexps(), &["red|blue".to_string()]);
	assert_eq!(registry.types_for_regexp("green").count(), 0);
	assert_eq!(registry.len(), 1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_duplicate_name_keeps_first() {
	inv_duplicate_name_keeps_first()
}

/// Invariant: a second preferential type on a regexp is rejected and leaves no trace.
pub(crate) fn inv_second_preferential_rejected_atomically() {
	let mut registry = empty_registry();
	registry.define(make_def("first", &[r"\w+"], true)).unwrap();

	let err = registry.define(make_def("second", &[r"\w+"], true)).unwrap_err();
	assert_eq!(
		err,
		RegistrationError::AmbiguousPreference {
			pattern: r"\w+".into(),
			existing: "first".into(),
			incoming: "second".into(),
		}
	);
	assert!(registry.lookup_by_type_name("second").is_none());
	let names: Vec<&str> = registry.parameter_types().map(|def| def.name()).collect();
	assert_eq!(names, vec!["first"]);
	let indexed: Vec<&str> = registry.types_for_regexp(r"\w+").map(|def| def.name()).collect();
	assert_eq!(indexed, vec!["first"]);
}

#[cfg_attr(test, test)]
pub(crate) fn test_second_preferential_rejected_atomically() {
	inv_second_preferential_rejected_atomically()
}

/// Invariant: a regexp with a single candidate resolves to it, preferential or not.
pub(crate) fn inv_single_candidate_resolves() {
	let generator = CountingGenerator::default();
	let mut registry = empty_registry().with_generator(generator.clone());
	registry.define(make_def("plain", &["a"], false)).unwrap();
	registry.define(make_def("pref", &["b"], true)).unwrap();

	for (regexp, expected) in [("a", "plain"), ("b", "pref")] {
		let def = registry
			.lookup_by_regexp(regexp, &expression_for(regexp), "I have it things")
			.unwrap()
			.unwrap();
		assert_eq!(def.name(), expected);
	}
	assert_eq!(generator.calls(), 0);
}

#[cfg_attr(test, test)]
pub(crate) fn test_single_candidate_resolves() {
	inv_single_candidate_resolves()
}

/// Invariant: a preferential type wins every regexp it shares with non-preferential ones,
/// regardless of definition order.
pub(crate) fn inv_preferred_wins_shared_regexp() {
	for preferred_at in 0..4 {
		let mut registry = empty_registry();
		for idx in 0..4 {
			let preferred = idx == preferred_at;
			registry.define(make_def(&format!("t{idx}"), &["shared"], preferred)).unwrap();
		}
		let winner = registry
			.lookup_by_regexp("shared", &expression_for("shared"), "I have shared things")
			.unwrap()
			.unwrap();
		assert_eq!(winner.name(), format!("t{preferred_at}"));
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_preferred_wins_shared_regexp() {
	inv_preferred_wins_shared_regexp()
}

/// Invariant: without a preferential type, a shared regexp is ambiguous and the error
/// lists exactly the indexed candidates.
pub(crate) fn inv_unpreferred_shared_regexp_is_ambiguous() {
	let mut registry = empty_registry();
	registry.define(make_def("one", &["dup", "other"], false)).unwrap();
	registry.define(make_def("two", &["dup"], false)).unwrap();
	registry.define(make_def("three", &["dup"], false)).unwrap();

	let err = registry
		.lookup_by_regexp("dup", &expression_for("dup"), "I have dup things")
		.unwrap_err();
	assert_eq!(err.regexp, "dup");
	assert_eq!(err.candidates, vec!["one", "two", "three"]);
	assert!(err.suggestions.is_empty());

	// The registry is unchanged and still resolves unshared regexps.
	assert_eq!(registry.len(), 3);
	let other = registry
		.lookup_by_regexp("other", &expression_for("other"), "I have other things")
		.unwrap()
		.unwrap();
	assert_eq!(other.name(), "one");
}

#[cfg_attr(test, test)]
pub(crate) fn test_unpreferred_shared_regexp_is_ambiguous() {
	inv_unpreferred_shared_regexp_is_ambiguous()
}

/// Invariant: the regexp index holds exactly the defined types, under exactly their regexps.
pub(crate) fn inv_index_matches_definitions(registry: &ParameterTypeRegistry) {
	let mut from_index = BTreeSet::new();
	for regexp in registry.regexps() {
		for def in registry.types_for_regexp(regexp) {
			assert!(def.regexps().iter().any(|r| r == regexp), "{} indexed under foreign /{regexp}/", def.name());
			from_index.insert((regexp.to_string(), def.name().to_string()));
		}
	}

	let mut from_defs = BTreeSet::new();
	for def in registry.parameter_types() {
		assert!(std::ptr::eq(registry.lookup_by_type_name(def.name()).unwrap(), def));
		for regexp in def.regexps() {
			from_defs.insert((regexp.clone(), def.name().to_string()));
		}
	}
	assert_eq!(from_index, from_defs);

	for regexp in registry.regexps() {
		let preferred = registry.types_for_regexp(regexp).filter(|def| def.prefer_for_regexp_match()).count();
		assert!(preferred <= 1, "/{regexp}/ has {preferred} preferential types");
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_index_matches_definitions() {
	inv_index_matches_definitions(&ParameterTypeRegistry::new(NumberFormat::ENGLISH));
}

/// Built-ins: the integer regexp resolves to `int` although four other types share it.
#[cfg_attr(test, test)]
pub(crate) fn test_builtin_integer_resolves_to_int() {
	let registry = ParameterTypeRegistry::default();
	let shared: Vec<&str> = registry.types_for_regexp(r"-?\d+").map(|def| def.name()).collect();
	assert_eq!(shared, vec!["int", "bigint", "bigdecimal", "short", "long"]);

	let expression = expression_for(r"-?\d+");
	let def = registry
		.lookup_by_regexp(r"-?\d+", &expression, "I have 12 cucumbers")
		.unwrap()
		.unwrap();
	assert_eq!(def.name(), "int");
	assert_eq!(def.transform::<i32>(&[Some("12")]), Ok(12));
}

/// Built-ins: a custom non-preferential type on the decimal regexp does not make it ambiguous.
#[cfg_attr(test, test)]
pub(crate) fn test_custom_decimal_type_keeps_preferred_owner() {
	let mut registry = ParameterTypeRegistry::default();
	registry.define(make_def("currency", &[r"-?\d*[\.,]\d+"], false)).unwrap();

	let shared: Vec<&str> = registry.types_for_regexp(r"-?\d*[\.,]\d+").map(|def| def.name()).collect();
	assert_eq!(shared, vec!["double", "float", "currency"]);

	let def = registry
		.lookup_by_regexp(r"-?\d*[\.,]\d+", &expression_for(r"-?\d*[\.,]\d+"), "I have 1.5 things")
		.unwrap()
		.unwrap();
	assert_eq!(def.name(), "double");
}

/// Built-ins: a second preferential type on `\w+` fails; the first one stays.
#[cfg_attr(test, test)]
pub(crate) fn test_two_custom_preferred_word_types() {
	let mut registry = ParameterTypeRegistry::default();
	registry.define(make_def("identifier", &[r"\w+"], true)).unwrap();
	assert!(matches!(
		registry.define(make_def("token", &[r"\w+"], true)),
		Err(RegistrationError::AmbiguousPreference { .. })
	));

	assert!(registry.lookup_by_type_name("identifier").is_some());
	assert!(registry.lookup_by_type_name("token").is_none());
	let owner = registry
		.lookup_by_regexp(r"\w+", &expression_for(r"\w+"), "I have some things")
		.unwrap()
		.unwrap();
	assert_eq!(owner.name(), "identifier");
}

#[cfg(test)]
fn arb_defs() -> impl Strategy<Value = Vec<(usize, Vec<usize>, bool)>> {
	// (name index, regexp indexes, preferred)
	prop::collection::vec((0..12usize, prop::collection::vec(0..4usize, 1..3), any::<bool>()), 0..16)
}

#[cfg(test)]
proptest! {
	/// Enumeration yields exactly the accepted definitions, whatever the definition order.
	#[test]
	fn prop_enumeration_matches_accepted(defs in arb_defs()) {
		let mut registry = empty_registry();
		let mut accepted = BTreeSet::new();
		for (name_idx, regexp_idxs, preferred) in defs {
			let name = format!("t{name_idx}");
			let regexps: Vec<String> = regexp_idxs.iter().map(|idx| format!("r{idx}")).collect();
			let regexps: Vec<&str> = regexps.iter().map(String::as_str).collect();
			if registry.define(make_def(&name, &regexps, preferred)).is_ok() {
				accepted.insert(name);
			}
		}

		let enumerated: BTreeSet<String> = registry.parameter_types().map(|def| def.name().to_string()).collect();
		prop_assert_eq!(&enumerated, &accepted);
		// Restartable: a second traversal sees the same set.
		let again: BTreeSet<String> = registry.parameter_types().map(|def| def.name().to_string()).collect();
		prop_assert_eq!(&again, &accepted);
		prop_assert_eq!(registry.len(), accepted.len());
		inv_index_matches_definitions(&registry);
	}

	/// Lookup never returns a non-preferential type when a preferential one shares the regexp.
	#[test]
	fn prop_lookup_respects_preference(defs in arb_defs()) {
		let mut registry = empty_registry();
		for (name_idx, regexp_idxs, preferred) in defs {
			let regexps: Vec<String> = regexp_idxs.iter().map(|idx| format!("r{idx}")).collect();
			let regexps: Vec<&str> = regexps.iter().map(String::as_str).collect();
			let _ = registry.define(make_def(&format!("t{name_idx}"), &regexps, preferred));
		}

		let regexps: Vec<String> = registry.regexps().map(str::to_string).collect();
		for regexp in regexps {
			let candidates: Vec<&str> = registry.types_for_regexp(&regexp).map(|def| def.name()).collect();
			let preferred = registry.types_for_regexp(&regexp).find(|def| def.prefer_for_regexp_match());
			match registry.lookup_by_regexp(&regexp, &expression_for(&regexp), "I have r things") {
				Ok(Some(winner)) => {
					if let Some(preferred) = preferred {
						prop_assert_eq!(winner.name(), preferred.name());
					} else {
						prop_assert_eq!(candidates.len(), 1);
					}
				}
				Ok(None) => prop_assert!(false, "indexed regexp /{}/ resolved to nothing", regexp),
				Err(err) => {
					prop_assert!(preferred.is_none());
					prop_assert_eq!(err.candidates, candidates.iter().map(|name| name.to_string()).collect::<Vec<_>>());
				}
			}
		}
	}
}
