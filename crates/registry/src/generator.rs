//! Seam to the expression generator used for ambiguity diagnostics.
//!
//! The registry never generates expressions itself. When a regexp lookup is
//! ambiguous it asks the configured [`ExpressionGenerator`] for alternatives and
//! attaches them to the [`crate::AmbiguousPatternError`].

use crate::core::ParameterTypeRegistry;

/// A placeholder expression proposed for some source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExpression {
	source: String,
	parameter_type_names: Vec<String>,
}

impl GeneratedExpression {
	pub fn new(source: impl Into<String>, parameter_type_names: Vec<String>) -> Self {
		Self {
			source: source.into(),
			parameter_type_names,
		}
	}

	/// Expression text, e.g. `I have {int} cucumbers`.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Names of the parameter types used by the expression, in order.
	pub fn parameter_type_names(&self) -> &[String] {
		&self.parameter_type_names
	}
}

/// Proposes expressions matching `text`.
///
/// Only called on the ambiguous lookup path. The registry is passed by shared
/// reference so implementations can enumerate types but cannot define new ones.
pub trait ExpressionGenerator: Send + Sync {
	fn generate_expressions(&self, registry: &ParameterTypeRegistry, text: &str) -> Vec<GeneratedExpression>;
}

impl<F> ExpressionGenerator for F
where
	F: Fn(&ParameterTypeRegistry, &str) -> Vec<GeneratedExpression> + Send + Sync,
{
	fn generate_expressions(&self, registry: &ParameterTypeRegistry, text: &str) -> Vec<GeneratedExpression> {
		self(registry, text)
	}
}

/// Generator that never suggests anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggestions;

impl ExpressionGenerator for NoSuggestions {
	fn generate_expressions(&self, _registry: &ParameterTypeRegistry, _text: &str) -> Vec<GeneratedExpression> {
		Vec::new()
	}
}
