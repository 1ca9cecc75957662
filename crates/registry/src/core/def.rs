//! Parameter type definitions.
//!
//! A definition is immutable once built. Its converter is stored type-erased so the
//! registry can hold types producing different values side by side; callers recover
//! the concrete value with [`ParameterType::transform`].

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use super::error::{ConversionError, DefinitionError};

/// Type-erased converter output.
pub type ParameterValue = Box<dyn Any + Send + Sync>;

type ConvertFn = dyn Fn(&[Option<&str>]) -> Result<ParameterValue, ConversionError> + Send + Sync;

/// Characters that would be misread inside an expression or a regexp.
const ILLEGAL_NAME_CHARS: &[char] = &['(', ')', '[', ']', '{', '}', '$', '.', '|', '?', '*', '+'];

/// Tag identifying the Rust type a converter produces.
#[derive(Clone, Copy)]
pub struct ValueKind {
	id: TypeId,
	name: &'static str,
}

impl ValueKind {
	pub fn of<T: Any>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Rust type name, for diagnostics only.
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn is<T: Any>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for ValueKind {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for ValueKind {}

impl fmt::Debug for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// A named set of regexps plus a converter for what they capture.
///
/// Fresh definitions are used for snippets and are not preferential; see
/// [`with_snippets`](Self::with_snippets) and [`preferential`](Self::preferential).
#[derive(Clone)]
pub struct ParameterType {
	name: String,
	regexps: Vec<String>,
	kind: ValueKind,
	convert: Arc<ConvertFn>,
	use_for_snippets: bool,
	prefer_for_regexp_match: bool,
}

impl ParameterType {
	/// Defines a type whose converter reads a single piece of text.
	///
	/// The converter receives the first capture group that matched. Callers resolving
	/// a regexp without groups pass the whole match as the only group.
	pub fn new<T, F>(name: impl Into<String>, regexps: impl IntoIterator<Item = impl Into<String>>, convert: F) -> Result<Self, DefinitionError>
	where
		T: Any + Send + Sync,
		F: Fn(&str) -> Result<T, ConversionError> + Send + Sync + 'static,
	{
		let def = Self::single(name, regexps, convert);
		def.validate()?;
		Ok(def)
	}

	/// Defines a type whose converter sees every capture group.
	pub fn with_groups<T, F>(
		name: impl Into<String>,
		regexps: impl IntoIterator<Item = impl Into<String>>,
		convert: F,
	) -> Result<Self, DefinitionError>
	where
		T: Any + Send + Sync,
		F: Fn(&[Option<&str>]) -> Result<T, ConversionError> + Send + Sync + 'static,
	{
		let def = Self::from_parts(
			name.into(),
			regexps.into_iter().map(Into::into).collect(),
			ValueKind::of::<T>(),
			Arc::new(move |groups: &[Option<&str>]| convert(groups).map(|value| Box::new(value) as ParameterValue)),
		);
		def.validate()?;
		Ok(def)
	}

	/// Unvalidated single-text constructor for definitions known to be well-formed.
	pub(crate) fn single<T, F>(name: impl Into<String>, regexps: impl IntoIterator<Item = impl Into<String>>, convert: F) -> Self
	where
		T: Any + Send + Sync,
		F: Fn(&str) -> Result<T, ConversionError> + Send + Sync + 'static,
	{
		Self::from_parts(
			name.into(),
			regexps.into_iter().map(Into::into).collect(),
			ValueKind::of::<T>(),
			Arc::new(move |groups: &[Option<&str>]| {
				let text = groups.iter().copied().flatten().next().ok_or(ConversionError::MissingGroup)?;
				convert(text).map(|value| Box::new(value) as ParameterValue)
			}),
		)
	}

	fn from_parts(name: String, regexps: Vec<String>, kind: ValueKind, convert: Arc<ConvertFn>) -> Self {
		Self {
			name,
			regexps,
			kind,
			convert,
			use_for_snippets: true,
			prefer_for_regexp_match: false,
		}
	}

	fn validate(&self) -> Result<(), DefinitionError> {
		if let Some(ch) = self.name.chars().find(|ch| ILLEGAL_NAME_CHARS.contains(ch)) {
			return Err(DefinitionError::IllegalName {
				name: self.name.clone(),
				ch,
			});
		}
		if self.regexps.is_empty() {
			return Err(DefinitionError::NoPatterns { name: self.name.clone() });
		}
		Ok(())
	}

	/// Sets whether snippet generators should offer this type.
	pub fn with_snippets(mut self, on: bool) -> Self {
		self.use_for_snippets = on;
		self
	}

	/// Sets whether this type owns regexps it shares with non-preferential types.
	pub fn preferential(mut self, on: bool) -> Self {
		self.prefer_for_regexp_match = on;
		self
	}

	/// Name used in `{name}` placeholders.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Regexps in the order they were given.
	pub fn regexps(&self) -> &[String] {
		&self.regexps
	}

	/// Rust type the converter produces.
	pub fn value_kind(&self) -> ValueKind {
		self.kind
	}

	/// Whether snippet generators offer this type.
	pub fn use_for_snippets(&self) -> bool {
		self.use_for_snippets
	}

	/// Whether this type wins regexps it shares with non-preferential types.
	pub fn prefer_for_regexp_match(&self) -> bool {
		self.prefer_for_regexp_match
	}

	/// Runs the converter and returns the type-erased value.
	pub fn transform_any(&self, groups: &[Option<&str>]) -> Result<ParameterValue, ConversionError> {
		(self.convert)(groups)
	}

	/// Runs the converter and downcasts to `T`.
	pub fn transform<T: Any>(&self, groups: &[Option<&str>]) -> Result<T, ConversionError> {
		if !self.kind.is::<T>() {
			return Err(self.kind_mismatch::<T>());
		}
		self.transform_any(groups)?
			.downcast::<T>()
			.map(|value| *value)
			.map_err(|_| self.kind_mismatch::<T>())
	}

	fn kind_mismatch<T: Any>(&self) -> ConversionError {
		ConversionError::KindMismatch {
			name: self.name.clone(),
			produced: self.kind.name(),
			requested: std::any::type_name::<T>(),
		}
	}
}

impl fmt::Debug for ParameterType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ParameterType")
			.field("name", &self.name)
			.field("regexps", &self.regexps)
			.field("kind", &self.kind)
			.field("use_for_snippets", &self.use_for_snippets)
			.field("prefer_for_regexp_match", &self.prefer_for_regexp_match)
			.finish_non_exhaustive()
	}
}
