//! Locale-aware decimal number parsing.
//!
//! A [`NumberFormat`] captures the symbols that differ between locales when numbers
//! are written in prose: decimal separator, grouping separator, minus sign. Locale
//! tags resolve through the CLDR tables of `num-format`.
//!
//! Parsing is strict: anything other than digits, one decimal separator, grouping
//! separators before it, and a leading minus sign is rejected.
//!
//! Grouping separators are dropped rather than validated, so under an English
//! format `1,5` reads as `15`.

use num_format::Locale;
use thiserror::Error;

/// Errors produced while parsing locale-formatted numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberFormatError {
	/// The input was empty.
	#[error("cannot parse an empty number")]
	Empty,
	/// The input contained a character that is not part of the format.
	#[error("unexpected character {ch:?} in number {text:?}")]
	UnexpectedChar {
		/// Offending character.
		ch: char,
		/// Full input.
		text: String,
	},
	/// The input had separators or a sign but no digits.
	#[error("number {0:?} contains no digits")]
	NoDigits(String),
	/// The normalized text was rejected by the float parser.
	#[error("invalid number {text:?}: {reason}")]
	Invalid {
		/// Full input.
		text: String,
		/// Parser message.
		reason: String,
	},
}

/// Separator symbols used to read decimal numbers for one locale.
///
/// Symbols are strings because some locales spell them with more than one
/// character, e.g. a direction mark before the minus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
	/// Symbol between the integer and fractional part.
	pub decimal_separator: &'static str,
	/// Symbol between digit groups of the integer part.
	pub grouping_separator: &'static str,
	/// Symbol for negative numbers, accepted in addition to ASCII `-`.
	pub minus_sign: &'static str,
}

impl NumberFormat {
	/// English-style format: `1,234.5`.
	pub const ENGLISH: Self = Self::new(".", ",");

	/// Builds a format with an ASCII minus sign.
	pub const fn new(decimal_separator: &'static str, grouping_separator: &'static str) -> Self {
		Self {
			decimal_separator,
			grouping_separator,
			minus_sign: "-",
		}
	}

	/// Resolves a locale tag such as `en`, `de-DE`, `fr_CA` or `de-CH` against CLDR data.
	///
	/// Subtags the data does not know are dropped from the end, so `de-DE` reads as
	/// `de`. Unknown languages fall back to [`NumberFormat::ENGLISH`].
	pub fn for_locale(tag: &str) -> Self {
		let subtags = canonical_subtags(tag);
		for len in (1..=subtags.len()).rev() {
			if let Ok(locale) = Locale::from_name(subtags[..len].join("-")) {
				return Self::from(locale);
			}
		}
		tracing::debug!(locale = tag, "unknown locale, using english number format");
		Self::ENGLISH
	}

	/// Parses a double-precision number written in this format.
	pub fn parse_f64(&self, text: &str) -> Result<f64, NumberFormatError> {
		let normalized = self.normalize(text)?;
		normalized.parse::<f64>().map_err(|err| NumberFormatError::Invalid {
			text: text.to_string(),
			reason: err.to_string(),
		})
	}

	/// Parses a single-precision number written in this format.
	pub fn parse_f32(&self, text: &str) -> Result<f32, NumberFormatError> {
		let normalized = self.normalize(text)?;
		normalized.parse::<f32>().map_err(|err| NumberFormatError::Invalid {
			text: text.to_string(),
			reason: err.to_string(),
		})
	}

	/// Rewrites `text` into the form Rust's float parser accepts.
	fn normalize(&self, text: &str) -> Result<String, NumberFormatError> {
		if text.is_empty() {
			return Err(NumberFormatError::Empty);
		}

		let mut out = String::with_capacity(text.len() + 1);
		let mut seen_decimal = false;
		let mut seen_digit = false;
		let mut rest = text;

		if let Some(sign) = [self.minus_sign, "-"].into_iter().find(|sign| !sign.is_empty() && rest.starts_with(sign)) {
			out.push('-');
			rest = &rest[sign.len()..];
		}

		while let Some(ch) = rest.chars().next() {
			let skip = if ch.is_ascii_digit() {
				seen_digit = true;
				out.push(ch);
				ch.len_utf8()
			} else if !seen_decimal && !self.decimal_separator.is_empty() && rest.starts_with(self.decimal_separator) {
				seen_decimal = true;
				out.push('.');
				self.decimal_separator.len()
			} else if !seen_decimal && let Some(len) = self.grouping_len(rest, ch) {
				len
			} else {
				return Err(NumberFormatError::UnexpectedChar {
					ch,
					text: text.to_string(),
				});
			};
			rest = &rest[skip..];
		}

		if !seen_digit {
			return Err(NumberFormatError::NoDigits(text.to_string()));
		}
		Ok(out)
	}

	/// Byte length of the grouping separator at the start of `rest`, if one is there.
	///
	/// A whitespace separator matches any whitespace character.
	fn grouping_len(&self, rest: &str, ch: char) -> Option<usize> {
		if self.grouping_separator.is_empty() {
			return None;
		}
		if rest.starts_with(self.grouping_separator) {
			return Some(self.grouping_separator.len());
		}
		let whitespace_grouping = self.grouping_separator.chars().all(char::is_whitespace);
		(whitespace_grouping && ch.is_whitespace()).then_some(ch.len_utf8())
	}
}

impl From<Locale> for NumberFormat {
	fn from(locale: Locale) -> Self {
		Self {
			decimal_separator: locale.decimal(),
			grouping_separator: locale.separator(),
			minus_sign: locale.minus_sign(),
		}
	}
}

/// Splits a tag on `-` or `_` and cases each subtag the way CLDR names are spelled.
fn canonical_subtags(tag: &str) -> Vec<String> {
	tag.split(['-', '_'])
		.filter(|part| !part.is_empty())
		.enumerate()
		.map(|(idx, part)| match (idx, part.len()) {
			(0, _) => part.to_ascii_lowercase(),
			(_, 4) if part.is_ascii() => {
				let mut script = part.to_ascii_lowercase();
				script[..1].make_ascii_uppercase();
				script
			}
			_ => part.to_ascii_uppercase(),
		})
		.collect()
}

impl Default for NumberFormat {
	fn default() -> Self {
		Self::ENGLISH
	}
}

#[cfg(test)]
mod tests;
