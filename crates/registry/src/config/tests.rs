use pretty_assertions::assert_eq;

use super::*;
use crate::core::RegistrationError;

const CONFIG: &str = r#"
locale = "de-DE"

[[parameter_type]]
name = "color"
patterns = ["red|blue|yellow"]
prefer_for_regexp_match = true

[[parameter_type]]
name = "shade"
patterns = ["light|dark"]
use_for_snippets = false
"#;

#[test]
fn test_defaults() {
	let config = RegistryConfig::from_toml_str("").unwrap();
	assert_eq!(config, RegistryConfig::default());
	assert_eq!(config.locale, "en");
	assert!(config.builtins);
	assert!(config.parameter_types.is_empty());
}

#[test]
fn test_parse_parameter_types() {
	let config = RegistryConfig::from_toml_str(CONFIG).unwrap();
	assert_eq!(config.locale, "de-DE");
	assert_eq!(
		config.parameter_types,
		vec![
			ParameterTypeConfig {
				name: "color".into(),
				patterns: vec!["red|blue|yellow".into()],
				use_for_snippets: true,
				prefer_for_regexp_match: true,
			},
			ParameterTypeConfig {
				name: "shade".into(),
				patterns: vec!["light|dark".into()],
				use_for_snippets: false,
				prefer_for_regexp_match: false,
			},
		]
	);
}

#[test]
fn test_unknown_field_rejected() {
	let err = RegistryConfig::from_toml_str("locale = \"en\"\nlocal = \"fr\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_config_seeds_and_defines() {
	let config = RegistryConfig::from_toml_str(CONFIG).unwrap();
	let registry = ParameterTypeRegistry::from_config(&config).unwrap();

	assert_eq!(registry.len(), 12);
	assert_eq!(registry.number_format(), NumberFormat::for_locale("de-DE"));

	let color = registry.lookup_by_type_name("color").unwrap();
	assert!(color.prefer_for_regexp_match());
	assert_eq!(color.transform::<String>(&[Some("blue")]), Ok("blue".to_string()));
	assert!(!registry.lookup_by_type_name("shade").unwrap().use_for_snippets());

	let double = registry.lookup_by_type_name("double").unwrap();
	assert_eq!(double.transform::<f64>(&[Some("1,5")]), Ok(1.5));
}

#[test]
fn test_from_config_without_builtins() {
	let config = RegistryConfig::from_toml_str("builtins = false\n[[parameter_type]]\nname = \"int\"\npatterns = [\"one|two\"]\n").unwrap();
	let registry = ParameterTypeRegistry::from_config(&config).unwrap();
	assert_eq!(registry.len(), 1);
	assert_eq!(registry.lookup_by_type_name("int").unwrap().regexps(), &["one|two".to_string()]);
}

#[test]
fn test_from_config_reports_conflicts() {
	let config = RegistryConfig::from_toml_str("[[parameter_type]]\nname = \"int\"\npatterns = [\"x\"]\n").unwrap();
	let err = ParameterTypeRegistry::from_config(&config).unwrap_err();
	assert!(matches!(err, RegistryError::Registration(RegistrationError::DuplicateName { ref name }) if name == "int"));

	let config = RegistryConfig::from_toml_str("[[parameter_type]]\nname = \"a(b)\"\npatterns = [\"x\"]\n").unwrap();
	let err = ParameterTypeRegistry::from_config(&config).unwrap_err();
	assert!(matches!(err, RegistryError::Definition(DefinitionError::IllegalName { .. })));
}
