//! Conversion of float text to native floats.
//!
//! The actual decimal-to-binary conversion is delegated to the standard
//! library's parser, which is correctly rounded for every input. This module
//! only enforces the calling contract around it.

use crate::error::{Error, ErrorCode, Result};
use crate::lib::Debug;
use core::str;

/// A native float type that text can be converted to.
///
/// This trait is sealed and implemented for `f32` and `f64`.
pub trait Float: private::Sealed + Copy + PartialOrd + Debug {
    /// Correctly rounded conversion of complete float text. Returns `None`
    /// unless the whole of `text` is consumed.
    #[doc(hidden)]
    fn from_decimal(text: &str) -> Option<Self>;
}

mod private {
    pub trait Sealed {}
}

macro_rules! float_impl {
    ($($t:ty)*) => ($(
        impl private::Sealed for $t {}

        impl Float for $t {
            #[inline]
            fn from_decimal(text: &str) -> Option<$t> {
                text.parse().ok()
            }
        }
    )*)
}

float_impl! { f32 f64 }

/// Convert float text with no sign and no surrounding whitespace to `F`.
///
/// Accepts everything [`string_contains_what`] classifies as a float, plus
/// integers. Values too large for `F` become infinity, as for any correctly
/// rounded parser.
///
/// A leading `-` is rejected. The sign belongs to the caller, and letting the
/// parser see one would let doubly signed text like `+-3.14` through once the
/// caller has removed the `+`.
///
/// [`string_contains_what`]: crate::string_contains_what
///
/// ```
/// use numscan::parse_float;
///
/// assert_eq!(parse_float::<f64>(b"3.14")?, 3.14);
/// assert_eq!(parse_float::<f64>(b"1e999")?, f64::INFINITY);
/// assert!(parse_float::<f64>(b"-3.14").is_err());
/// # Ok::<(), numscan::Error>(())
/// ```
pub fn parse_float<F: Float>(bytes: &[u8]) -> Result<F> {
    match bytes.first() {
        None => return Err(Error::new(ErrorCode::EmptyInput)),
        Some(b'-') => return Err(Error::new(ErrorCode::UnexpectedSign)),
        Some(_) => {}
    }

    let text = match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => return Err(Error::new(ErrorCode::InvalidNumber)),
    };
    F::from_decimal(text).ok_or_else(|| Error::new(ErrorCode::InvalidNumber))
}

// TESTS
// -----
