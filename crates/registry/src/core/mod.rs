//! Parameter type definitions, errors and the registry index.

pub mod def;
pub mod error;
pub mod index;

pub use def::{ParameterType, ParameterValue, ValueKind};
pub use error::{AmbiguousPatternError, ConversionError, DefinitionError, RegistrationError, RegistryError};
pub use index::ParameterTypeRegistry;
