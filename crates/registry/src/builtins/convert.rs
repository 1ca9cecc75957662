//! Converters behind the built-in types.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use cukex_number_format::NumberFormat;

use crate::core::ConversionError;

pub(super) fn parse<T>(text: &str) -> Result<T, ConversionError>
where
	T: FromStr,
	T::Err: Display,
{
	text.parse::<T>().map_err(|err| ConversionError::invalid(type_name::<T>(), text, err))
}

pub(super) fn hex_byte(text: &str) -> Result<u8, ConversionError> {
	let digits = text
		.strip_prefix("0x")
		.or_else(|| text.strip_prefix("0X"))
		.ok_or_else(|| ConversionError::invalid("u8", text, "missing 0x prefix"))?;
	u8::from_str_radix(digits, 16).map_err(|err| ConversionError::invalid("u8", text, err))
}

pub(super) fn float(format: NumberFormat, text: &str) -> Result<f32, ConversionError> {
	format.parse_f32(text).map_err(|err| ConversionError::invalid("f32", text, err))
}

pub(super) fn double(format: NumberFormat, text: &str) -> Result<f64, ConversionError> {
	format.parse_f64(text).map_err(|err| ConversionError::invalid("f64", text, err))
}

pub(super) fn word(text: &str) -> Result<String, ConversionError> {
	Ok(text.to_string())
}

/// Un-escapes quote delimiters inside a quoted string's body.
pub(super) fn quoted(body: &str) -> Result<String, ConversionError> {
	Ok(body.replace("\\\"", "\"").replace("\\'", "'"))
}
