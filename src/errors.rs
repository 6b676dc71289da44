//! Contains error types used throughout the library.



//		Packages

use core::str::Utf8Error;
use thiserror::Error as ThisError;
use tokio_postgres::error::SqlState;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// The messages match those reported by the database type, so they can be
/// surfaced to users unchanged.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is not a valid digit. Only `0-9`, `A-Z`, and `a-z`
	/// are accepted.
	#[error(r#"value "{0}" is not a valid digit for type bigbase36"#)]
	InvalidDigit(char),
	
	/// The incoming value is empty, is longer than 13 digits, or accumulates
	/// to something that does not fit in the signed storage word.
	#[error(r#"value "{0}" is out of range for type bigbase36"#)]
	OutOfRange(String),
}

//󰭅		ConversionError															
impl ConversionError {
	//		sql_state															
	/// The SQLSTATE a database host would raise for this error.
	#[must_use]
	pub fn sql_state(&self) -> SqlState {
		match self {
			Self::InvalidDigit(_) => SqlState::SYNTAX_ERROR,
			Self::OutOfRange(_)   => SqlState::NUMERIC_VALUE_OUT_OF_RANGE,
		}
	}
}

//		WireError																
/// Represents failures when reading the binary wire format.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum WireError {
	/// The payload decoded, but its digits were rejected.
	#[error(transparent)]
	Conversion(#[from] ConversionError),
	
	/// The payload is not valid UTF-8.
	#[error("Invalid UTF-8 in message: {0}")]
	InvalidUtf8(#[from] Utf8Error),
	
	/// The payload has no NUL terminator.
	#[error("Invalid string in message")]
	MissingTerminator,
	
	/// There are bytes left over after the terminator.
	#[error("Invalid message format: {0} trailing bytes")]
	TrailingData(usize),
}
