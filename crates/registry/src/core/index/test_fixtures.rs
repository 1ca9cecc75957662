#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use regex::Regex;

use crate::core::{ParameterType, ParameterTypeRegistry};
use crate::generator::{ExpressionGenerator, GeneratedExpression};
use crate::NumberFormat;

/// String-valued type over `regexps`.
pub(crate) fn make_def(name: &str, regexps: &[&str], preferred: bool) -> ParameterType {
	ParameterType::new(name, regexps.iter().copied(), |text: &str| Ok(text.to_string()))
		.expect("fixture definitions are valid")
		.preferential(preferred)
}

pub(crate) fn empty_registry() -> ParameterTypeRegistry {
	ParameterTypeRegistry::empty(NumberFormat::ENGLISH)
}

/// Expression compiled around a single regexp, as a matcher would pass it.
pub(crate) fn expression_for(regexp: &str) -> Regex {
	Regex::new(&format!("^I have ({regexp}) things$")).expect("fixture regexps compile")
}

/// Generator that counts its invocations and proposes one fixed expression.
#[derive(Clone, Default)]
pub(crate) struct CountingGenerator {
	pub calls: Arc<AtomicUsize>,
}

impl CountingGenerator {
	pub(crate) fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl ExpressionGenerator for CountingGenerator {
	fn generate_expressions(&self, registry: &ParameterTypeRegistry, text: &str) -> Vec<GeneratedExpression> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let mut names: Vec<String> = registry.parameter_types().map(|def| def.name().to_string()).collect();
		names.sort_unstable();
		names
			.into_iter()
			.map(|name| GeneratedExpression::new(format!("{text} {{{name}}}"), vec![name]))
			.collect()
	}
}
