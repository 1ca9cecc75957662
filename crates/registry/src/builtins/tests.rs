use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

use super::*;
use crate::NumberFormat;
use crate::core::ConversionError;

/// Captures `text` with `regexp` the way an expression matcher would hand groups to a converter.
fn groups<'t>(regexp: &str, text: &'t str) -> Vec<Option<&'t str>> {
	let re = Regex::new(&format!("^(?:{regexp})$")).unwrap();
	let caps = re.captures(text).unwrap_or_else(|| panic!("/{regexp}/ should match {text:?}"));
	if caps.len() == 1 {
		vec![caps.get(0).map(|m| m.as_str())]
	} else {
		caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect()
	}
}

fn builtin_type<'r>(registry: &'r ParameterTypeRegistry, name: &str) -> &'r ParameterType {
	registry.lookup_by_type_name(name).unwrap_or_else(|| panic!("{name} should be built in"))
}

#[test]
fn test_seed_defines_all_builtins() {
	let registry = ParameterTypeRegistry::default();
	let mut names: Vec<&str> = registry.parameter_types().map(ParameterType::name).collect();
	names.sort_unstable();
	assert_eq!(
		names,
		vec!["bigdecimal", "bigint", "byte", "double", "float", "int", "long", "short", "string", "word"]
	);
}

#[test]
fn test_seed_twice_fails_on_first_duplicate() {
	let mut registry = ParameterTypeRegistry::default();
	assert_eq!(
		seed(&mut registry),
		Err(RegistrationError::DuplicateName { name: "bigint".into() })
	);
	assert_eq!(registry.len(), 10);
}

#[rstest]
#[case("en")]
#[case("de-CH")]
#[case("sv")]
#[case("xx")]
fn test_seeding_empty_registry_never_conflicts(#[case] locale: &str) {
	let registry = ParameterTypeRegistry::try_new(NumberFormat::for_locale(locale)).unwrap();
	assert_eq!(registry.len(), definitions(&registry).len());

	let preferred: Vec<&ParameterType> = registry.parameter_types().filter(|def| def.prefer_for_regexp_match()).collect();
	assert_eq!(preferred.len(), 2);
	assert!(preferred[0].regexps().iter().all(|regexp| !preferred[1].regexps().contains(regexp)));
}

#[test]
fn test_decimal_converters_use_cldr_symbols() {
	let registry = ParameterTypeRegistry::for_locale("sv");
	let double = builtin_type(&registry, "double");
	assert_eq!(double.transform::<f64>(&[Some("\u{2212}1,5")]), Ok(-1.5));
}

#[rstest]
#[case("bigint", INTEGER_REGEXPS, false, false)]
#[case("bigdecimal", INTEGER_REGEXPS, false, false)]
#[case("byte", HEX_REGEXPS, false, false)]
#[case("short", INTEGER_REGEXPS, false, false)]
#[case("int", INTEGER_REGEXPS, true, true)]
#[case("long", INTEGER_REGEXPS, false, false)]
#[case("float", FLOAT_REGEXPS, false, false)]
#[case("double", FLOAT_REGEXPS, true, true)]
#[case("word", WORD_REGEXPS, false, false)]
#[case("string", STRING_REGEXPS, false, true)]
fn test_builtin_flags(#[case] name: &str, #[case] regexps: &[&str], #[case] preferred: bool, #[case] snippets: bool) {
	let registry = ParameterTypeRegistry::default();
	let def = builtin_type(&registry, name);
	assert_eq!(def.regexps(), regexps);
	assert_eq!(def.prefer_for_regexp_match(), preferred);
	assert_eq!(def.use_for_snippets(), snippets);
}

#[test]
fn test_integer_converters() {
	let registry = ParameterTypeRegistry::default();
	let text = groups(INTEGER_REGEXPS[0], "-12");

	assert_eq!(builtin_type(&registry, "short").transform::<i16>(&text), Ok(-12));
	assert_eq!(builtin_type(&registry, "int").transform::<i32>(&text), Ok(-12));
	assert_eq!(builtin_type(&registry, "long").transform::<i64>(&text), Ok(-12));
	assert_eq!(builtin_type(&registry, "bigint").transform::<BigInt>(&text), Ok(BigInt::from(-12)));
	assert_eq!(
		builtin_type(&registry, "bigdecimal").transform::<BigDecimal>(&text),
		Ok(BigDecimal::from(-12))
	);
}

#[test]
fn test_bigint_exceeds_long() {
	let registry = ParameterTypeRegistry::default();
	let huge = "123456789012345678901234567890";
	let text = groups(INTEGER_REGEXPS[1], huge);

	let value = builtin_type(&registry, "bigint").transform::<BigInt>(&text).unwrap();
	assert_eq!(value.to_string(), huge);
	assert!(matches!(
		builtin_type(&registry, "long").transform::<i64>(&text),
		Err(ConversionError::Invalid { kind: "i64", .. })
	));
}

#[test]
fn test_int_overflow_is_conversion_error() {
	let registry = ParameterTypeRegistry::default();
	let err = builtin_type(&registry, "int").transform::<i32>(&[Some("99999999999")]).unwrap_err();
	assert!(matches!(err, ConversionError::Invalid { kind: "i32", ref text, .. } if text == "99999999999"));
}

#[rstest]
#[case("0xFF", 255)]
#[case("0X0a", 10)]
#[case("0x00", 0)]
fn test_byte_converter(#[case] input: &str, #[case] expected: u8) {
	let registry = ParameterTypeRegistry::default();
	let text = groups(HEX_REGEXPS[0], input);
	assert_eq!(builtin_type(&registry, "byte").transform::<u8>(&text), Ok(expected));
}

#[rstest]
#[case("en", "1.5", 1.5)]
#[case("en", "-.25", -0.25)]
#[case("de", "1,5", 1.5)]
fn test_decimal_converters(#[case] locale: &str, #[case] input: &str, #[case] expected: f64) {
	let registry = ParameterTypeRegistry::for_locale(locale);
	let text = groups(FLOAT_REGEXPS[0], input);
	assert_eq!(builtin_type(&registry, "double").transform::<f64>(&text), Ok(expected));
	assert_eq!(builtin_type(&registry, "float").transform::<f32>(&text), Ok(expected as f32));
}

#[test]
fn test_number_format_follows_registry() {
	let registry = ParameterTypeRegistry::new(NumberFormat::for_locale("de-DE"));
	assert_eq!(registry.number_format(), NumberFormat::new(",", "."));
}

#[test]
fn test_word_converter() {
	let registry = ParameterTypeRegistry::default();
	let text = groups(WORD_REGEXPS[0], "banana");
	assert_eq!(builtin_type(&registry, "word").transform::<String>(&text), Ok("banana".to_string()));
}

#[rstest]
#[case(r#""hello""#, "hello")]
#[case(r#""""#, "")]
#[case(r#""say \"hi\"""#, r#"say "hi""#)]
#[case(r"'it\'s'", "it's")]
#[case(r#"'mixed "quotes"'"#, r#"mixed "quotes""#)]
fn test_string_converter(#[case] input: &str, #[case] expected: &str) {
	let registry = ParameterTypeRegistry::default();
	let text = groups(STRING_REGEXPS[0], input);
	assert_eq!(builtin_type(&registry, "string").transform::<String>(&text), Ok(expected.to_string()));
}
