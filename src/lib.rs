//! The BigBase36 crate provides a 64-bit unsigned integer that is written as
//! compact, canonical base-36 text.
//!
//! The [`codec`] module holds the conversion itself, [`BigBase36`] wraps it in
//! a value type for use with databases and serialisation, and [`wire`] covers
//! the binary protocol format.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

pub mod codec;
pub mod wire;

mod errors;

#[path = "bigbase36.rs"]
mod bigbase36_mod;



//		Packages

pub use bigbase36_mod::{BigBase36, TYPE_NAME};
pub use codec::{decode, encode};
pub use errors::{ConversionError, WireError};
