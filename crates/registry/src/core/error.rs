use std::fmt;

use crate::config::ConfigError;
use crate::generator::GeneratedExpression;

/// Reasons a [`crate::ParameterType`] cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
	/// The name contains a character with meaning in expressions or regexps.
	#[error("illegal character {ch:?} in parameter type name {name:?}")]
	IllegalName { name: String, ch: char },
	/// The definition lists no regexps.
	#[error("parameter type {{{name}}} must have at least one regexp")]
	NoPatterns { name: String },
}

/// Registration failures. The registry is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
	/// A type with this name is already defined.
	#[error("there is already a parameter type with name {name}")]
	DuplicateName { name: String },
	/// Both the incoming type and the current winner of `pattern` are preferential.
	#[error(
		"there can only be one preferential parameter type per regexp; the regexp /{pattern}/ is used for two preferential parameter types, {{{existing}}} and {{{incoming}}}"
	)]
	AmbiguousPreference {
		pattern: String,
		existing: String,
		incoming: String,
	},
}

/// Failure raised by a converter while turning captured text into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
	/// The text is not well-formed for the target type.
	#[error("cannot convert {text:?} to {kind}: {reason}")]
	Invalid {
		kind: &'static str,
		text: String,
		reason: String,
	},
	/// No capture group held any text.
	#[error("no captured text to convert")]
	MissingGroup,
	/// The caller asked for a different value type than the converter produces.
	#[error("parameter type {{{name}}} produces {produced}, not {requested}")]
	KindMismatch {
		name: String,
		produced: &'static str,
		requested: &'static str,
	},
}

impl ConversionError {
	pub fn invalid(kind: &'static str, text: &str, reason: impl fmt::Display) -> Self {
		Self::Invalid {
			kind,
			text: text.to_string(),
			reason: reason.to_string(),
		}
	}
}

/// A regexp shared by several parameter types, none of them preferential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousPatternError {
	/// The regexp fragment that was looked up.
	pub regexp: String,
	/// Source of the full compiled expression the fragment came from.
	pub expression: String,
	/// Names of every type indexed under `regexp`, in rank order.
	pub candidates: Vec<String>,
	/// Alternative expressions that would disambiguate the match.
	pub suggestions: Vec<GeneratedExpression>,
}

impl fmt::Display for AmbiguousPatternError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Your Regular Expression /{}/", self.expression)?;
		writeln!(f, "matches multiple parameter types with regexp /{}/:", self.regexp)?;
		for name in &self.candidates {
			writeln!(f, "   {{{name}}}")?;
		}
		writeln!(f)?;
		writeln!(f, "I couldn't decide which one to use. You have two options:")?;
		writeln!(f)?;
		writeln!(f, "1) Use a placeholder expression instead of a Regular Expression. Try one of these:")?;
		for suggestion in &self.suggestions {
			writeln!(f, "   {}", suggestion.source())?;
		}
		writeln!(f)?;
		writeln!(f, "2) Make one of the parameter types preferential and continue to use a Regular Expression.")
	}
}

impl std::error::Error for AmbiguousPatternError {}

/// Any error surfaced by the registry layer.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error(transparent)]
	Definition(#[from] DefinitionError),

	#[error(transparent)]
	Registration(#[from] RegistrationError),

	#[error(transparent)]
	AmbiguousPattern(#[from] AmbiguousPatternError),

	#[error(transparent)]
	Config(#[from] ConfigError),
}
