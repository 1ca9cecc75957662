#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Name table and regexp index for parameter types.
//!
//! # Mental Model
//!
//! 1. **Define:** [`ParameterTypeRegistry::define`] validates an incoming type against
//!    both maps, then adopts it into the name table and into the ranked set of every
//!    regexp it lists. Either every map changes or none does.
//! 2. **Resolve:** [`ParameterTypeRegistry::lookup_by_regexp`] reads the ranked set for
//!    a regexp and returns its head, or fails if the head is not preferential and has
//!    company.
//!
//! # Precedence Contract
//!
//! Within the set for one regexp:
//! 1. **Preference:** preferential types sort before the rest.
//! 2. **Definition order:** earlier definitions sort before later ones.
//!
//! - Enforced in: [`rank::cmp_rank`], [`insert::insert_ranked`]
//! - Tested by: [`invariants::test_preferred_wins_shared_regexp`]
//! - Failure symptom: a non-preferential type wins a regexp it shares with a
//!   preferential one, or the candidate order in ambiguity errors drifts.
//!
//! # Invariants
//!
//! - Names are unique.
//!   - Enforced in: [`insert::plan`]
//!   - Tested by: [`invariants::test_duplicate_name_keeps_first`]
//! - At most one preferential type per regexp.
//!   - Enforced in: [`insert::plan`]
//!   - Tested by: [`invariants::test_second_preferential_rejected_atomically`]
//! - The regexp index holds exactly the defined types.
//!   - Enforced in: [`ParameterTypeRegistry::define`] (plan before mutate)
//!   - Tested by: [`invariants::test_index_matches_definitions`]
//!
//! # Concurrency
//!
//! Definition takes `&mut self` and lookups take `&self`, so definitions cannot
//! interleave with lookups. A fully built registry can be shared across threads.

mod insert;
mod lookup;
mod rank;

use std::fmt;
use std::sync::Arc;

use cukex_number_format::NumberFormat;
use regex::Regex;
use rustc_hash::FxHashMap as HashMap;

use self::rank::Rank;
use super::def::ParameterType;
use super::error::{AmbiguousPatternError, RegistrationError};
use crate::generator::{ExpressionGenerator, NoSuggestions};

/// A definition together with its position in regexp sets.
#[derive(Clone)]
pub(crate) struct Entry {
	pub(crate) rank: Rank,
	pub(crate) def: Arc<ParameterType>,
}

/// Registry of parameter types keyed by name and by regexp.
pub struct ParameterTypeRegistry {
	by_name: HashMap<String, Entry>,
	by_regexp: HashMap<String, Vec<Entry>>,
	next_ordinal: u32,
	number_format: NumberFormat,
	generator: Arc<dyn ExpressionGenerator>,
}

impl ParameterTypeRegistry {
	/// Creates a registry with no types defined.
	pub fn empty(number_format: NumberFormat) -> Self {
		Self {
			by_name: HashMap::default(),
			by_regexp: HashMap::default(),
			next_ordinal: 0,
			number_format,
			generator: Arc::new(NoSuggestions),
		}
	}

	/// Creates a registry seeded with the built-in types.
	pub fn try_new(number_format: NumberFormat) -> Result<Self, RegistrationError> {
		let mut registry = Self::empty(number_format);
		crate::builtins::seed(&mut registry)?;
		Ok(registry)
	}

	/// Creates a registry seeded with the built-in types.
	pub fn new(number_format: NumberFormat) -> Self {
		// Built-in names are distinct and the two preferential built-ins (`int`,
		// `double`) own disjoint regexps, so seeding an empty registry cannot conflict.
		match Self::try_new(number_format) {
			Ok(registry) => registry,
			Err(err) => unreachable!("built-in parameter types conflict in an empty registry: {err}"),
		}
	}

	/// Creates a seeded registry whose number types read numbers the way `locale` writes them.
	pub fn for_locale(locale: &str) -> Self {
		Self::new(NumberFormat::for_locale(locale))
	}

	/// Replaces the generator consulted on ambiguous lookups.
	pub fn with_generator(mut self, generator: impl ExpressionGenerator + 'static) -> Self {
		self.generator = Arc::new(generator);
		self
	}

	/// Format used by the built-in decimal converters.
	pub fn number_format(&self) -> NumberFormat {
		self.number_format
	}

	/// Defines a new parameter type.
	///
	/// Fails without modifying the registry if the name is taken, or if the type is
	/// preferential and one of its regexps already has a preferential owner.
	pub fn define(&mut self, def: ParameterType) -> Result<(), RegistrationError> {
		let regexps = match insert::plan(&self.by_name, &self.by_regexp, &def) {
			Ok(regexps) => regexps,
			Err(err) => {
				tracing::warn!(name = def.name(), error = %err, "parameter type rejected");
				return Err(err);
			}
		};

		let entry = Entry {
			rank: Rank {
				preferred: def.prefer_for_regexp_match(),
				ordinal: self.next_ordinal,
			},
			def: Arc::new(def),
		};
		self.next_ordinal += 1;

		for regexp in regexps {
			insert::insert_ranked(self.by_regexp.entry(regexp).or_default(), entry.clone());
		}
		tracing::debug!(
			name = entry.def.name(),
			regexps = entry.def.regexps().len(),
			preferred = entry.rank.preferred,
			"parameter type defined"
		);
		self.by_name.insert(entry.def.name().to_string(), entry);
		Ok(())
	}

	/// Looks up a type by its name.
	pub fn lookup_by_type_name(&self, name: &str) -> Option<&ParameterType> {
		self.by_name.get(name).map(|entry| entry.def.as_ref())
	}

	/// Returns the type that owns `regexp`.
	///
	/// `expression` is the compiled expression the fragment was taken from and `text`
	/// the step text being matched; both only feed the ambiguity diagnostic. Returns
	/// `Ok(None)` when nothing is indexed under `regexp`.
	pub fn lookup_by_regexp(&self, regexp: &str, expression: &Regex, text: &str) -> Result<Option<&ParameterType>, AmbiguousPatternError> {
		lookup::resolve(self, regexp, expression, text)
	}

	/// Iterates over every defined type in no particular order.
	pub fn parameter_types(&self) -> impl Iterator<Item = &ParameterType> + '_ {
		self.by_name.values().map(|entry| entry.def.as_ref())
	}

	/// Iterates over the types indexed under `regexp`, highest rank first.
	pub fn types_for_regexp(&self, regexp: &str) -> impl Iterator<Item = &ParameterType> + '_ {
		self.by_regexp.get(regexp).into_iter().flatten().map(|entry| entry.def.as_ref())
	}

	/// Iterates over every indexed regexp in no particular order.
	pub fn regexps(&self) -> impl Iterator<Item = &str> + '_ {
		self.by_regexp.keys().map(String::as_str)
	}

	/// Returns the number of defined types.
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	/// Returns true if no types are defined.
	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}
}

impl Default for ParameterTypeRegistry {
	fn default() -> Self {
		Self::new(NumberFormat::default())
	}
}

impl fmt::Debug for ParameterTypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ParameterTypeRegistry")
			.field("types", &self.by_name.len())
			.field("regexps", &self.by_regexp.len())
			.field("number_format", &self.number_format)
			.finish_non_exhaustive()
	}
}

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(any(test, doc))]
pub(crate) mod test_fixtures;
