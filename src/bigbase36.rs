//! Custom BigBase36 type.



//		Modules

#[cfg(test)]
#[path = "tests/bigbase36.rs"]
mod tests;



//		Packages

use crate::{
	codec::{MAX_LENGTH, decode, encode},
	errors::ConversionError,
	wire,
};
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Display, Formatter, self},
	ops::Deref,
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use tracing::trace;



//		Constants

/// The name of the database type that uses the binary wire format.
pub const TYPE_NAME: &str = "bigbase36";



//		Structs

//		BigBase36																
/// A 64-bit unsigned integer whose text form is base-36.
/// 
/// The value is held as a plain [`u64`], and is shown and parsed as a string
/// of up to 13 base-36 digits, e.g. `42` is `"16"` and [`i64::MAX`] is
/// `"1Y2P0IJ32E8E7"`. Parsing is case-insensitive, and display is always the
/// canonical form: uppercase, with no leading zeros.
/// 
/// # Range
/// 
/// Although 13 base-36 digits could describe more than a [`u64`] holds, the
/// storage word in the database is signed, and parsing rejects any value that
/// would set the sign bit. The range is therefore `0` to [`i64::MAX`], the same
/// as an unsigned 63-bit integer. Constructing a value outside this range
/// fails, so every instance displays as text that parses back to the same
/// value.
/// 
/// # Conversion
/// 
/// This type can be converted to and from any of the following:
/// 
///   - [`String`] and [`str`], via [`Display`] and [`FromStr`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`]
///   - [`i64`], [`i128`]
/// 
/// Where the conversion is lossless, [`From`] is implemented, and where it is
/// potentially lossy, [`TryFrom`] is implemented.
/// 
/// # Database
/// 
/// [`FromSql`] and [`ToSql`] accept the custom `bigbase36` type, which uses
/// the binary wire format from the [`wire`](crate::wire) module, the text
/// types, which use the canonical text, and `INT8`, which holds the raw word.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BigBase36(u64);

//󰭅		BigBase36																
impl BigBase36 {
	/// The minimum value for a `BigBase36`.
	pub const MIN: Self = Self(0);
	
	/// The maximum value for a `BigBase36`.
	pub const MAX: Self = Self(i64::MAX as u64);
	
	/// The maximum number of digits in the text form.
	pub const MAX_LENGTH: usize = MAX_LENGTH;
	
	//		new																	
	/// Creates a new value.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::OutOfRange`] if the value is greater than
	/// [`MAX`](Self::MAX).
	/// 
	pub fn new(value: u64) -> Result<Self, ConversionError> {
		(value <= Self::MAX.0).then_some(Self(value)).ok_or_else(|| ConversionError::OutOfRange(value.to_string()))
	}
	
	//		as_u64																
	/// Represents the internal value as an unsigned 64-bit integer.
	#[must_use]
	pub const fn as_u64(&self) -> u64 {
		self.0
	}
	
	//		as_i64																
	/// Represents the internal value as a signed 64-bit integer.
	#[expect(clippy::cast_possible_wrap, reason = "Safe, as fully managed")]
	#[must_use]
	pub const fn as_i64(&self) -> i64 {
		self.0 as i64
	}
	
	//		accepts_type														
	/// Whether the database type can be read from and written to.
	fn accepts_type(ty: &Type) -> bool {
		Self::is_text_type(ty) || *ty == Type::INT8 || ty.name() == TYPE_NAME
	}
	
	//		is_text_type														
	/// Whether the database type takes the text cast path.
	fn is_text_type(ty: &Type) -> bool {
		matches!(*ty, Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN)
	}
	
	//		invalid_type														
	/// Builds the error for a database type that is not supported.
	fn invalid_type(ty: &Type) -> Box<dyn Error + Sync + Send> {
		Box::new(IoError::new(
			IoErrorKind::InvalidData,
			format!("Invalid type for bigbase36: {ty}"),
		))
	}
}

//󰭅		Deref																	
impl Deref for BigBase36 {
	type Target = u64;
	
	//		deref																
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for BigBase36 {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Accept the text form, and plain numbers for convenience
			deserializer.deserialize_any(BigBase36Visitor)
		} else {
			deserializer.deserialize_u64(BigBase36Visitor)
		}
	}
}

//󰭅		Display																	
impl Display for BigBase36 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad(&encode(self.0))
	}
}

//󰭅		From: u8 -> BigBase36													
impl From<u8> for BigBase36 {
	//		from																
	fn from(v: u8) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: u16 -> BigBase36													
impl From<u16> for BigBase36 {
	//		from																
	fn from(v: u16) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: u32 -> BigBase36													
impl From<u32> for BigBase36 {
	//		from																
	fn from(v: u32) -> Self {
		Self(u64::from(v))
	}
}

//󰭅		From: BigBase36 -> i64													
impl From<BigBase36> for i64 {
	//		from																
	fn from(v: BigBase36) -> Self {
		v.as_i64()
	}
}

//󰭅		From: BigBase36 -> i128													
impl From<BigBase36> for i128 {
	//		from																
	fn from(v: BigBase36) -> Self {
		Self::from(v.0)
	}
}

//󰭅		From: BigBase36 -> u64													
impl From<BigBase36> for u64 {
	//		from																
	fn from(v: BigBase36) -> Self {
		v.0
	}
}

//󰭅		From: BigBase36 -> u128													
impl From<BigBase36> for u128 {
	//		from																
	fn from(v: BigBase36) -> Self {
		Self::from(v.0)
	}
}

//󰭅		From: BigBase36 -> String												
impl From<BigBase36> for String {
	//		from																
	fn from(v: BigBase36) -> Self {
		encode(v.0)
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for BigBase36 {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		trace!(%ty, length = raw.len(), "Reading bigbase36");
		match ty {
			&Type::INT8                          => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			text if Self::is_text_type(text)     => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			custom if custom.name() == TYPE_NAME => Ok(wire::read(raw)?),
			unknown                              => Err(Self::invalid_type(unknown)),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		Self::accepts_type(ty)
	}
}

//󰭅		FromStr																	
impl FromStr for BigBase36 {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		decode(s).map(Self)
	}
}

//󰭅		Serialize																
impl Serialize for BigBase36 {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_str(&encode(self.0))
		} else {
			serializer.serialize_u64(self.0)
		}
	}
}

//󰭅		ToSql																	
impl ToSql for BigBase36 {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		trace!(%ty, value = self.0, "Writing bigbase36");
		match ty {
			&Type::INT8                          => self.as_i64().to_sql(ty, out),
			text if Self::is_text_type(text)     => encode(self.0).to_sql(ty, out),
			custom if custom.name() == TYPE_NAME => {
				wire::write(*self, out);
				Ok(IsNull::No)
			},
			unknown                              => Err(Self::invalid_type(unknown)),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		Self::accepts_type(ty)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: i64 -> BigBase36												
impl TryFrom<i64> for BigBase36 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		u64::try_from(v).map(Self).map_err(|_err| ConversionError::OutOfRange(v.to_string()))
	}
}

//󰭅		TryFrom: i128 -> BigBase36												
impl TryFrom<i128> for BigBase36 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		i64::try_from(v)
			.map_err(|_err| ConversionError::OutOfRange(v.to_string()))
			.and_then(Self::try_from)
	}
}

//󰭅		TryFrom: u64 -> BigBase36												
impl TryFrom<u64> for BigBase36 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		Self::new(v)
	}
}

//󰭅		TryFrom: u128 -> BigBase36												
impl TryFrom<u128> for BigBase36 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u128) -> Result<Self, Self::Error> {
		u64::try_from(v)
			.map_err(|_err| ConversionError::OutOfRange(v.to_string()))
			.and_then(Self::new)
	}
}

//󰭅		TryFrom: &str -> BigBase36												
impl TryFrom<&str> for BigBase36 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &str) -> Result<Self, Self::Error> {
		v.parse()
	}
}



//		Visitors

//		BigBase36Visitor														
/// A visitor for parsing values from text or numbers.
struct BigBase36Visitor;

//󰭅		Visitor																	
impl Visitor<'_> for BigBase36Visitor {
	type Value = BigBase36;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a base-36 string of up to {MAX_LENGTH} digits, or a non-negative integer")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigBase36::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigBase36::new(v).map_err(E::custom)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
