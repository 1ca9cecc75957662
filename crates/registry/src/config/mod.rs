//! Declarative registry setup.
//!
//! A [`RegistryConfig`] is read from TOML and turned into a seeded
//! [`ParameterTypeRegistry`] by [`ParameterTypeRegistry::from_config`]:
//!
//! ```toml
//! locale = "de-DE"
//! builtins = true
//!
//! [[parameter_type]]
//! name = "color"
//! patterns = ["red|blue|yellow"]
//! prefer_for_regexp_match = true
//! ```
//!
//! Types declared this way capture text and convert it to a `String`.

use serde::{Deserialize, Serialize};

use crate::core::{DefinitionError, ParameterType, ParameterTypeRegistry, RegistryError};
use crate::NumberFormat;

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Locale tag that selects the number format, e.g. `en` or `fr-FR`.
	pub locale: String,
	/// Seed the registry with the built-in types.
	pub builtins: bool,
	/// Additional types, defined in order after the built-ins.
	#[serde(rename = "parameter_type")]
	pub parameter_types: Vec<ParameterTypeConfig>,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			locale: default_locale(),
			builtins: true,
			parameter_types: Vec::new(),
		}
	}
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_true() -> bool {
	true
}

impl RegistryConfig {
	/// Parses a configuration document.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	pub fn number_format(&self) -> NumberFormat {
		NumberFormat::for_locale(&self.locale)
	}
}

/// A string-valued parameter type declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterTypeConfig {
	pub name: String,
	pub patterns: Vec<String>,
	#[serde(default = "default_true")]
	pub use_for_snippets: bool,
	#[serde(default)]
	pub prefer_for_regexp_match: bool,
}

impl ParameterTypeConfig {
	/// Builds the declared type. The converter returns the captured text unchanged.
	pub fn to_parameter_type(&self) -> Result<ParameterType, DefinitionError> {
		Ok(ParameterType::new(&self.name, &self.patterns, |text: &str| Ok(text.to_string()))?
			.with_snippets(self.use_for_snippets)
			.preferential(self.prefer_for_regexp_match))
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

impl ParameterTypeRegistry {
	/// Builds a registry from `config`.
	///
	/// Stops at the first declared type that is invalid or conflicts with one
	/// already defined.
	pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
		let number_format = config.number_format();
		let mut registry = if config.builtins {
			Self::try_new(number_format)?
		} else {
			Self::empty(number_format)
		};

		for entry in &config.parameter_types {
			registry.define(entry.to_parameter_type()?)?;
		}
		tracing::debug!(locale = %config.locale, types = registry.len(), "registry built from config");
		Ok(registry)
	}
}

#[cfg(test)]
mod tests;
