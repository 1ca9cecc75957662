//! Built-in parameter types.
//!
//! Every registry built with [`ParameterTypeRegistry::new`] is seeded through [`seed`].
//! Numeric types share their regexps; `int` and `double` are preferential so plain
//! regexp lookups of those shapes resolve without ambiguity.

mod convert;

pub use bigdecimal::BigDecimal;
pub use bigdecimal::num_bigint::BigInt;

use crate::core::{ParameterType, ParameterTypeRegistry, RegistrationError};

/// Optional minus sign followed by digits, and bare digits.
pub const INTEGER_REGEXPS: &[&str] = &[r"-?\d+", r"\d+"];
/// Digits around a `.` or `,` separator.
pub const FLOAT_REGEXPS: &[&str] = &[r"-?\d*[\.,]\d+"];
/// Two hex digits after `0x` or `0X`.
pub const HEX_REGEXPS: &[&str] = &[r"0[xX][0-9a-fA-F]{2}"];
pub const WORD_REGEXPS: &[&str] = &[r"\w+"];
/// Double- or single-quoted text with backslash escapes.
pub const STRING_REGEXPS: &[&str] = &[r#""([^"\\]*(\\.[^"\\]*)*)"|'([^'\\]*(\\.[^'\\]*)*)'"#];

/// Builds the built-in definitions, reading decimals with the registry's number format.
pub fn definitions(registry: &ParameterTypeRegistry) -> Vec<ParameterType> {
	let format = registry.number_format();
	vec![
		builtin("bigint", INTEGER_REGEXPS, convert::parse::<BigInt>),
		builtin("bigdecimal", INTEGER_REGEXPS, convert::parse::<BigDecimal>),
		builtin("byte", HEX_REGEXPS, convert::hex_byte),
		builtin("short", INTEGER_REGEXPS, convert::parse::<i16>),
		builtin("int", INTEGER_REGEXPS, convert::parse::<i32>)
			.with_snippets(true)
			.preferential(true),
		builtin("long", INTEGER_REGEXPS, convert::parse::<i64>),
		builtin("float", FLOAT_REGEXPS, move |text: &str| convert::float(format, text)),
		builtin("double", FLOAT_REGEXPS, move |text: &str| convert::double(format, text))
			.with_snippets(true)
			.preferential(true),
		builtin("word", WORD_REGEXPS, convert::word),
		builtin("string", STRING_REGEXPS, convert::quoted).with_snippets(true),
	]
}

/// Defines every built-in type on `registry`.
pub fn seed(registry: &mut ParameterTypeRegistry) -> Result<(), RegistrationError> {
	let defs = definitions(registry);
	let count = defs.len();
	for def in defs {
		registry.define(def)?;
	}
	tracing::debug!(count, number_format = ?registry.number_format(), "seeded built-in parameter types");
	Ok(())
}

fn builtin<T, F>(name: &str, regexps: &[&str], convert: F) -> ParameterType
where
	T: std::any::Any + Send + Sync,
	F: Fn(&str) -> Result<T, crate::core::ConversionError> + Send + Sync + 'static,
{
	ParameterType::single(name, regexps.iter().copied(), convert)
		.with_snippets(false)
		.preferential(false)
}

#[cfg(test)]
mod tests;
