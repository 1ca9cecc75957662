//! Parameter type registry for placeholder expressions.
//!
//! A [`ParameterType`] names one or more regexp fragments together with a converter
//! that turns captured text into a typed value. The [`ParameterTypeRegistry`] indexes
//! every type by name and by each of its regexps, and decides which type owns a
//! regexp when several share it.
//!
//! # Ownership rules
//!
//! - Names are unique.
//! - At most one *preferential* type may be indexed under a given regexp; this is
//!   enforced when a type is defined.
//! - Several non-preferential types may share a regexp freely. Asking the registry
//!   which of them owns that regexp fails with an [`AmbiguousPatternError`] that
//!   carries suggested alternative expressions from the configured
//!   [`ExpressionGenerator`].
//!
//! # Example
//!
//! ```rust
//! use cukex_registry::ParameterTypeRegistry;
//! use regex::Regex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ParameterTypeRegistry::for_locale("en");
//! let expression = Regex::new(r"^I have (-?\d+) cucumbers$")?;
//! let int = registry
//!     .lookup_by_regexp(r"-?\d+", &expression, "I have 12 cucumbers")?
//!     .ok_or("int is built in")?;
//! assert_eq!(int.name(), "int");
//! let count: i32 = int.transform(&[Some("12")])?;
//! assert_eq!(count, 12);
//! # Ok(())
//! # }
//! ```

pub mod builtins;
pub mod config;
pub mod core;
pub mod generator;

pub use config::{ConfigError, ParameterTypeConfig, RegistryConfig};
pub use crate::core::{
	AmbiguousPatternError, ConversionError, DefinitionError, ParameterType, ParameterTypeRegistry, ParameterValue,
	RegistrationError, RegistryError, ValueKind,
};
pub use cukex_number_format::{NumberFormat, NumberFormatError};
pub use generator::{ExpressionGenerator, GeneratedExpression, NoSuggestions};
