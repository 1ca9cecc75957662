//! Regexp ownership resolution.

use regex::Regex;

use super::ParameterTypeRegistry;
use crate::core::def::ParameterType;
use crate::core::error::AmbiguousPatternError;

pub(super) fn resolve<'r>(
	registry: &'r ParameterTypeRegistry,
	regexp: &str,
	expression: &Regex,
	text: &str,
) -> Result<Option<&'r ParameterType>, AmbiguousPatternError> {
	let Some(set) = registry.by_regexp.get(regexp) else {
		tracing::trace!(regexp, "no parameter type for regexp");
		return Ok(None);
	};
	let Some(head) = set.first() else {
		return Ok(None);
	};
	let candidates = set.len();

	if candidates > 1 && !head.rank.preferred {
		// Building the error runs the generator; keep it off the happy path.
		tracing::debug!(regexp, candidates, "ambiguous regexp lookup");
		let suggestions = registry.generator.generate_expressions(registry, text);
		return Err(AmbiguousPatternError {
			regexp: regexp.to_string(),
			expression: expression.as_str().to_string(),
			candidates: set.iter().map(|entry| entry.def.name().to_string()).collect(),
			suggestions,
		});
	}

	tracing::trace!(regexp, winner = head.def.name(), candidates, "resolved regexp");
	Ok(Some(head.def.as_ref()))
}
