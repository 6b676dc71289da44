//! Binary wire format.
//!
//! On the binary protocol the value travels as its canonical digit string
//! followed by a single NUL byte. The protocol layer adds the length prefix
//! around the payload, so only the payload is handled here. Receiving applies
//! exactly the same validation as parsing text.



//		Modules

#[cfg(test)]
#[path = "tests/wire.rs"]
mod tests;



//		Packages

use crate::{
	BigBase36,
	errors::WireError,
};
use bytes::{BufMut, BytesMut};
use core::str;
use tracing::debug;



//		Constants

/// The byte that ends the string in a message.
pub const TERMINATOR: u8 = 0;



//		Functions

//		read																	
/// Reads a value from a binary message payload.
/// 
/// The payload must be exactly one NUL-terminated UTF-8 string, with nothing
/// after the terminator.
/// 
/// # Errors
/// 
/// * [`WireError::MissingTerminator`] if there is no NUL byte.
/// * [`WireError::TrailingData`] if anything follows the NUL byte.
/// * [`WireError::InvalidUtf8`] if the string is not UTF-8.
/// * [`WireError::Conversion`] if the digits are rejected.
/// 
pub fn read(raw: &[u8]) -> Result<BigBase36, WireError> {
	let Some(end) = raw.iter().position(|&b| b == TERMINATOR) else {
		debug!(length = raw.len(), "Rejected message without terminator");
		return Err(WireError::MissingTerminator);
	};
	let (digits, rest) = raw.split_at(end);
	let trailing       = rest.len().saturating_sub(1);
	if trailing > 0 {
		debug!(trailing, "Rejected message with trailing data");
		return Err(WireError::TrailingData(trailing));
	}
	Ok(str::from_utf8(digits)?.parse::<BigBase36>()?)
}

//		write																	
/// Appends the canonical text of a value to a message payload.
/// 
/// Only a [`BigBase36`] can be written, so the text is always accepted by
/// [`read()`].
pub fn write(value: BigBase36, out: &mut BytesMut) {
	let text = value.to_string();
	out.reserve(text.len().saturating_add(1));
	out.put_slice(text.as_bytes());
	out.put_u8(TERMINATOR);
}
