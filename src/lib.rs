//! # numscan
//!
//! Fast recognition and conversion of numeric literals.
//!
//! Given a span of text, numscan decides whether it spells an integer, a
//! float, or a float whose value happens to be integral, and converts it to a
//! native value with explicit overflow detection. The accepted grammar is the
//! one used by Python's `int()` and `float()` constructors: base prefixes
//! (`0x`, `0o`, `0b`), digit-group separators (`1_000`), the special literals
//! `inf`, `infinity` and `nan`, and rejection of legacy octal (`017`).
//!
//! The crate is split in two layers.
//!
//! - The engine works on byte spans that carry no sign and no surrounding
//!   whitespace: [`string_contains_what`] classifies, [`parse_int`] and
//!   [`parse_float`] convert, [`detect_base`] infers a radix and
//!   [`remove_valid_underscores`] strips separators from a scratch copy.
//!   Nothing in this layer allocates.
//!
//! - The [`Converter`] accepts arbitrary input through the [`Input`] trait,
//!   trims whitespace and sign, runs the engine and reports the outcome as a
//!   [`Payload`]: either a native value or an [`ActionType`] telling the
//!   caller's policy what to do instead.
//!
//! ```
//! use numscan::{Converter, Payload, Target};
//!
//! let mut converter = Converter::new();
//! assert_eq!(converter.convert_str("  123_456 ", Target::Real)?, Payload::Int(123456));
//! assert_eq!(converter.convert_str("3.0", Target::Real)?, Payload::FloatToInt(3.0));
//! assert_eq!(converter.convert_str("-2.5", Target::Float)?, Payload::Float(-2.5));
//! # Ok::<(), numscan::Error>(())
//! ```
//!
//! Working with the engine directly:
//!
//! ```
//! use numscan::{parse_int, string_contains_what, Base, NumberKind};
//!
//! assert_eq!(string_contains_what(b"0x1F", Base::Auto), NumberKind::Integer);
//! let parsed = parse_int::<i64>(b"0x1F", Base::Auto)?;
//! assert_eq!(parsed.value, 31);
//! assert!(!parsed.overflow);
//! # Ok::<(), numscan::Error>(())
//! ```
//!
//! # No-std support
//!
//! The engine only needs `core`. The [`Converter`] owns a growable scratch
//! buffer and therefore needs `alloc`. Disable the default `std` feature and
//! enable `alloc` instead to use numscan without the standard library.
//!
//! ```toml
//! [dependencies]
//! numscan = { version = "0.3", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/numscan/0.3.2")]
// Ignored clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::inline_always,
    clippy::manual_range_contains,
    clippy::match_like_matches_macro,
    clippy::unreadable_literal
)]
// Ignored clippy_pedantic lints
#![allow(
    // integer and float conversion requires these sorts of casts
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("numscan requires that either `std` (default) or `alloc` feature is enabled");

extern crate alloc;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

/// A facade around all the types we need from the `std`, `core`, and `alloc`
/// crates. This avoids elaborate import wrangling having to happen in every
/// module.
mod lib {
    pub use core::fmt::{self, Debug, Display};
    pub use core::result;

    pub use alloc::vec::Vec;
}

#[macro_use]
mod trace;

pub mod base;
pub mod chars;
pub mod classify;
pub mod dispatch;
pub mod error;
pub mod float;
pub mod int;
pub mod payload;
pub mod underscore;

mod swar;

#[doc(inline)]
pub use crate::base::{detect_base, Base};
#[doc(inline)]
pub use crate::classify::{string_contains_what, NumberKind};
#[doc(inline)]
pub use crate::dispatch::{Converter, Input, Target};
#[doc(inline)]
pub use crate::error::{Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::float::{parse_float, Float};
#[doc(inline)]
pub use crate::int::{overflow_cutoff, parse_int, parse_int_exact, Integer, ParsedInt};
#[doc(inline)]
pub use crate::payload::{ActionType, Payload, PayloadType};
#[doc(inline)]
pub use crate::underscore::remove_valid_underscores;
