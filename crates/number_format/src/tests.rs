use rstest::rstest;

use super::*;

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

#[rstest]
#[case("en", ".", ",", "-")]
#[case("en-US", ".", ",", "-")]
#[case("de", ",", ".", "-")]
#[case("de_DE", ",", ".", "-")]
#[case("de-CH", ".", "’", "-")]
#[case("de-ch", ".", "’", "-")]
#[case("de-AT", ",", NBSP, "-")]
#[case("fr", ",", NNBSP, "-")]
#[case("fr-CA", ",", NBSP, "-")]
#[case("sv", ",", NBSP, "\u{2212}")]
#[case("", ".", ",", "-")]
#[case("xx", ".", ",", "-")]
fn test_for_locale(#[case] tag: &str, #[case] decimal: &str, #[case] grouping: &str, #[case] minus: &str) {
	let format = NumberFormat::for_locale(tag);
	assert_eq!(format.decimal_separator, decimal);
	assert_eq!(format.grouping_separator, grouping);
	assert_eq!(format.minus_sign, minus);
}

#[rstest]
#[case("en", "1.5", 1.5)]
#[case("en", ".5", 0.5)]
#[case("en", "-.5", -0.5)]
#[case("en", "1,5", 15.0)]
#[case("en", "1,234.25", 1234.25)]
#[case("de", "1,5", 1.5)]
#[case("de", "1.234,5", 1234.5)]
#[case("de-CH", "1’234.5", 1234.5)]
#[case("de-AT", "1\u{a0}234,5", 1234.5)]
#[case("de-AT", "1 234,5", 1234.5)]
#[case("sv", "\u{2212}1,5", -1.5)]
#[case("sv", "-1,5", -1.5)]
#[case("fr", "1\u{202f}234,5", 1234.5)]
#[case("fr", "1\u{a0}234,5", 1234.5)]
#[case("fr", "1 234,5", 1234.5)]
#[case("he", "\u{200e}-1.5", -1.5)]
fn test_parse_f64(#[case] tag: &str, #[case] text: &str, #[case] expected: f64) {
	let format = NumberFormat::for_locale(tag);
	assert_eq!(format.parse_f64(text), Ok(expected));
}

#[test]
fn test_parse_f32() {
	assert_eq!(NumberFormat::ENGLISH.parse_f32("-3.25"), Ok(-3.25_f32));
}

#[test]
fn test_custom_minus_sign() {
	let format = NumberFormat {
		minus_sign: "\u{2212}",
		..NumberFormat::new(",", NBSP)
	};
	assert_eq!(format.parse_f64("\u{2212}2,5"), Ok(-2.5));
	assert_eq!(format.parse_f64("-2,5"), Ok(-2.5));
}

#[test]
fn test_rejects_malformed_input() {
	let format = NumberFormat::ENGLISH;
	assert_eq!(format.parse_f64(""), Err(NumberFormatError::Empty));
	assert_eq!(format.parse_f64("."), Err(NumberFormatError::NoDigits(".".into())));
	assert_eq!(
		format.parse_f64("1.2.3"),
		Err(NumberFormatError::UnexpectedChar {
			ch: '.',
			text: "1.2.3".into(),
		})
	);
	assert!(matches!(format.parse_f64("1-2"), Err(NumberFormatError::UnexpectedChar { ch: '-', .. })));
	assert!(matches!(format.parse_f64("1.2,3"), Err(NumberFormatError::UnexpectedChar { ch: ',', .. })));
	assert!(matches!(format.parse_f64("1 234"), Err(NumberFormatError::UnexpectedChar { ch: ' ', .. })));
}
