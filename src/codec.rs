//! Conversion between 64-bit words and base-36 digit strings.
//!
//! The text form is big-endian, case-insensitive on input, and canonical on
//! output: uppercase, with no leading zeros except for the value zero itself,
//! which is `"0"`.



//		Modules

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;



//		Constants

/// The number base used for the text form.
pub const BASE: u64 = 36;

/// The maximum number of digits in the text form.
pub const MAX_LENGTH: usize = 13;

/// The place values, `36^i`, least significant first.
pub const POWERS: [u64; MAX_LENGTH] = powers();

/// The largest accumulator value that does not set the sign bit.
const SIGN_LIMIT: u64 = i64::MAX as u64;



//		Functions

//		decode																	
/// Decodes a base-36 digit string into its value.
/// 
/// The length is checked first, then each digit from left to right, with the
/// first offending character reported. After each digit the running total is
/// checked for having set the sign bit of the storage word.
/// 
/// Note that the overflow check only catches accumulation that sets the sign
/// bit. A wrap that lands back in the non-negative range is accepted as-is,
/// e.g. `"4000000000000"` decodes to `506781279576915968`.
/// 
/// # Parameters
/// 
/// * `text` - The digits to decode.
/// 
/// # Errors
/// 
/// * [`ConversionError::OutOfRange`] if the text is empty, longer than
///   [`MAX_LENGTH`], or accumulates past the sign bit. The full input is
///   included.
/// * [`ConversionError::InvalidDigit`] for the first character that is not
///   `0-9`, `A-Z`, or `a-z`.
/// 
pub fn decode(text: &str) -> Result<u64, ConversionError> {
	let length = text.len();
	if length == 0 || length > MAX_LENGTH {
		return Err(ConversionError::OutOfRange(text.to_owned()));
	}
	
	let mut value = 0_u64;
	for (place, c) in (0..length).rev().zip(text.chars()) {
		let digit = digit_value(c).ok_or(ConversionError::InvalidDigit(c))?;
		
		#[expect(clippy::indexing_slicing, reason = "Place is bounded by MAX_LENGTH")]
		let power = POWERS[place];
		value     = value.wrapping_add(u64::from(digit).wrapping_mul(power));
		
		if value > SIGN_LIMIT {
			return Err(ConversionError::OutOfRange(text.to_owned()));
		}
	}
	
	Ok(value)
}

//		encode																	
/// Encodes a value as its canonical base-36 digit string.
/// 
/// Every [`u64`] fits within [`MAX_LENGTH`] digits, so this never fails. Zero
/// is encoded as `"0"`.
/// 
/// Note that words above [`i64::MAX`] still encode, but the text will not pass
/// [`decode()`]. Use [`BigBase36`](crate::BigBase36) where the text has to be
/// read back.
/// 
/// # Parameters
/// 
/// * `value` - The value to encode.
/// 
#[must_use]
#[expect(clippy::arithmetic_side_effects, reason = "Powers are never zero")]
#[expect(clippy::integer_division,        reason = "Intentional")]
pub fn encode(value: u64) -> String {
	let mut text      = String::with_capacity(MAX_LENGTH);
	let mut remaining = value;
	let mut leading   = true;
	
	for (place, &power) in POWERS.iter().enumerate().rev() {
		#[expect(clippy::cast_possible_truncation, reason = "Digit is below BASE")]
		let digit  = (remaining / power) as u8;
		remaining %= power;
		
		leading = leading && digit == 0 && place > 0;
		if !leading {
			//	Digits are always below BASE
			if let Some(symbol) = digit_symbol(digit) {
				text.push(symbol);
			}
		}
	}
	
	text
}

//		digit_value																
/// Returns the value of a digit symbol, ignoring case.
/// 
/// Only the ASCII characters `0-9`, `A-Z`, and `a-z` are digits.
#[must_use]
#[expect(clippy::arithmetic_side_effects, reason = "Matched as ASCII")]
pub const fn digit_value(c: char) -> Option<u8> {
	match c {
		'0'..='9' => Some(c as u8 - b'0'),
		'A'..='Z' => Some(c as u8 - b'A' + 10),
		'a'..='z' => Some(c as u8 - b'a' + 10),
		_         => None,
	}
}

//		digit_symbol															
/// Returns the canonical (uppercase) symbol for a digit value.
/// 
/// As with [`char::from_digit()`], [`None`] is returned if the digit is not
/// below 36.
/// 
#[must_use]
#[expect(clippy::arithmetic_side_effects, reason = "Range already checked")]
pub const fn digit_symbol(digit: u8) -> Option<char> {
	match digit {
		0..=9   => Some((b'0' + digit) as char),
		10..=35 => Some((b'A' + digit - 10) as char),
		_       => None,
	}
}

//		powers																	
/// Builds the place value table at compile time.
#[expect(clippy::arithmetic_side_effects, reason = "36^12 fits in a u64")]
#[expect(clippy::indexing_slicing,        reason = "Bounded by the loop")]
const fn powers() -> [u64; MAX_LENGTH] {
	let mut table = [1_u64; MAX_LENGTH];
	let mut i     = 1;
	while i < MAX_LENGTH {
		table[i] = table[i - 1] * BASE;
		i += 1;
	}
	table
}
