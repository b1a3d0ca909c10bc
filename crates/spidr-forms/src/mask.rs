//! Input masks
//!
//! A mask turns raw keystrokes into the display form that is stored in
//! [`FormState`](crate::FormState). Masks are applied to the whole input
//! value on every change, so pasted or partially edited text is normalized
//! the same way as typed text.

use serde::{Deserialize, Serialize};

/// Separator inserted between digit groups
pub const SEPARATOR: char = '-';

/// Maximum number of digits kept in a phone number
pub const PHONE_DIGITS: usize = 10;

/// Maximum number of digits kept in a PIN
pub const PIN_DIGITS: usize = 16;

const PIN_GROUP: usize = 4;

/// Formatting applied to a field's raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMask {
	/// Value is stored unmodified
	#[default]
	None,
	/// `DDD-DDD-DDDD`, built up progressively
	Phone,
	/// `DDDD-DDDD-DDDD-DDDD`, built up progressively
	Pin,
}

impl InputMask {
	/// Apply the mask to a raw input value
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::InputMask;
	///
	/// assert_eq!(InputMask::Phone.apply("(123) 456"), "123-456");
	/// assert_eq!(InputMask::Pin.apply("12345678"), "1234-5678");
	/// assert_eq!(InputMask::None.apply(" Kai "), " Kai ");
	/// ```
	pub fn apply(&self, raw: &str) -> String {
		match self {
			InputMask::None => raw.to_string(),
			InputMask::Phone => format_phone(raw),
			InputMask::Pin => format_pin(raw),
		}
	}
}

/// Keep at most `cap` ASCII digits from `raw`
fn digits(raw: &str, cap: usize) -> String {
	raw.chars().filter(char::is_ascii_digit).take(cap).collect()
}

/// Format a phone number as digits accumulate.
///
/// Up to three digits are shown bare; a separator follows the area code
/// once a fourth digit arrives and the exchange once a seventh arrives.
///
/// # Examples
///
/// ```
/// use spidr_forms::mask::format_phone;
///
/// assert_eq!(format_phone("123"), "123");
/// assert_eq!(format_phone("1234"), "123-4");
/// assert_eq!(format_phone("1234567"), "123-456-7");
/// assert_eq!(format_phone("123-456-78901234"), "123-456-7890");
/// ```
pub fn format_phone(raw: &str) -> String {
	let d = digits(raw, PHONE_DIGITS);
	match d.len() {
		0..=3 => d,
		4..=6 => format!("{}{SEPARATOR}{}", &d[..3], &d[3..]),
		_ => format!("{}{SEPARATOR}{}{SEPARATOR}{}", &d[..3], &d[3..6], &d[6..]),
	}
}

/// Format a PIN in groups of four digits.
///
/// A separator is placed between groups only, so the value never ends with
/// one. A partial last group is kept as typed.
///
/// # Examples
///
/// ```
/// use spidr_forms::mask::format_pin;
///
/// assert_eq!(format_pin("1234"), "1234");
/// assert_eq!(format_pin("12345"), "1234-5");
/// assert_eq!(format_pin("1234-5678-9012-3456-7"), "1234-5678-9012-3456");
/// ```
pub fn format_pin(raw: &str) -> String {
	let d = digits(raw, PIN_DIGITS);
	let mut out = String::with_capacity(d.len() + d.len() / PIN_GROUP);
	for (i, c) in d.chars().enumerate() {
		if i > 0 && i % PIN_GROUP == 0 {
			out.push(SEPARATOR);
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("1", "1")]
	#[case("12", "12")]
	#[case("123", "123")]
	#[case("1234", "123-4")]
	#[case("123456", "123-456")]
	#[case("1234567", "123-456-7")]
	#[case("1234567890", "123-456-7890")]
	#[case("12345678901", "123-456-7890")]
	#[case("abc", "")]
	#[case("+1 (555) 010-9999", "155-501-0999")]
	fn test_format_phone(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(format_phone(raw), expected);
	}

	#[rstest]
	fn test_format_phone_backspace_over_separator() {
		// Arrange: user deletes the last digit of "123-4"
		let edited = "123-";

		// Act
		let formatted = format_phone(edited);

		// Assert
		assert_eq!(formatted, "123");
	}

	#[rstest]
	#[case("", "")]
	#[case("123", "123")]
	#[case("1234", "1234")]
	#[case("12345", "1234-5")]
	#[case("12345678", "1234-5678")]
	#[case("1234567890123456", "1234-5678-9012-3456")]
	#[case("12345678901234567890", "1234-5678-9012-3456")]
	#[case("1234-", "1234")]
	#[case("pin: 9999 8888", "9999-8888")]
	fn test_format_pin(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(format_pin(raw), expected);
	}

	#[rstest]
	fn test_non_ascii_digits_are_stripped() {
		// Fullwidth and Arabic-Indic digits are not ASCII digits
		assert_eq!(format_phone("１２３٤"), "");
		assert_eq!(format_pin("１２３٤5"), "5");
	}

	#[rstest]
	fn test_input_mask_none_passes_through() {
		assert_eq!(InputMask::None.apply("a@b.com "), "a@b.com ");
		assert_eq!(InputMask::default(), InputMask::None);
	}
}
