//! Conversion of integer text to native integers.
//!
//! Decimal text short enough to be safe for the target width is converted
//! here, eight digits at a time where possible, without any overflow checks.
//! Longer decimal text is only validated and flagged as overflowing, since
//! the caller needs an arbitrary-precision path for it anyway. Non-decimal
//! text (and decimal text whose exact value is demanded) is handed to the
//! standard library's radix parser, which reports overflow exactly.

use crate::base::Base;
use crate::chars::{consume_digits_fast, is_base_prefix_for, is_sign, to_digit, to_radix_digit};
use crate::error::{Error, ErrorCode, Result};
use crate::lib::Debug;
use crate::swar;
use core::num::IntErrorKind;
use core::str;

/// The outcome of a successful integer conversion.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ParsedInt<T> {
    /// The converted value. Meaningless when `overflow` is set.
    pub value: T,
    /// The text (possibly) holds a value outside the range of `T`. The caller
    /// must fall back to an arbitrary-precision conversion.
    pub overflow: bool,
}

impl<T> ParsedInt<T> {
    /// The value, or `None` if the conversion overflowed.
    #[inline]
    pub fn checked(self) -> Option<T> {
        if self.overflow {
            None
        } else {
            Some(self.value)
        }
    }
}

/// A native integer type that text can be converted to.
///
/// This trait is sealed and implemented for all primitive integers.
pub trait Integer: private::Sealed + Copy + PartialEq + Debug {
    /// The number of decimal digits that can always be converted without
    /// overflow: one less than the digit count of `Self::MAX`.
    ///
    /// Text longer than this is assumed to overflow. The guess is
    /// conservative: it never misses a true overflow, but flags some
    /// in-range values (for `i64`, every 19-digit value).
    const OVERFLOW_CUTOFF: usize;

    /// The value `0`.
    const ZERO: Self;

    #[doc(hidden)]
    fn mul_add_digit(self, digit: u8) -> Self;

    #[doc(hidden)]
    fn mul_add_eight_digits(self, chunk: u32) -> Self;

    #[doc(hidden)]
    fn from_radix_digits(digits: &str, radix: u32) -> Result<ParsedInt<Self>>;
}

mod private {
    pub trait Sealed {}
}

/// Number of decimal digits needed to print `max`.
const fn decimal_digits(mut max: u128) -> usize {
    let mut digits = 1;
    while max >= 10 {
        max /= 10;
        digits += 1;
    }
    digits
}

macro_rules! integer_impl {
    ($($t:ty)*) => ($(
        impl private::Sealed for $t {}

        impl Integer for $t {
            const OVERFLOW_CUTOFF: usize = decimal_digits(<$t>::MAX as u128) - 1;
            const ZERO: $t = 0;

            // Both helpers are only used on text no longer than
            // OVERFLOW_CUTOFF, so the arithmetic never actually wraps.
            #[inline(always)]
            fn mul_add_digit(self, digit: u8) -> $t {
                self.wrapping_mul(10).wrapping_add(digit as $t)
            }

            #[inline(always)]
            fn mul_add_eight_digits(self, chunk: u32) -> $t {
                self.wrapping_mul(100_000_000u32 as $t).wrapping_add(chunk as $t)
            }

            fn from_radix_digits(digits: &str, radix: u32) -> Result<ParsedInt<$t>> {
                match <$t>::from_str_radix(digits, radix) {
                    Ok(value) => Ok(ParsedInt { value, overflow: false }),
                    Err(err) => match err.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            Ok(ParsedInt { value: 0, overflow: true })
                        }
                        IntErrorKind::Empty => Err(Error::new(ErrorCode::EmptyInput)),
                        _ => Err(Error::new(ErrorCode::InvalidDigit)),
                    },
                }
            }
        }
    )*)
}

integer_impl! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

/// The number of decimal digits `T` can always hold; see
/// [`Integer::OVERFLOW_CUTOFF`].
///
/// ```
/// assert_eq!(numscan::overflow_cutoff::<i64>(), 18);
/// assert_eq!(numscan::overflow_cutoff::<u64>(), 19);
/// assert_eq!(numscan::overflow_cutoff::<u8>(), 2);
/// ```
#[inline]
pub const fn overflow_cutoff<T: Integer>() -> usize {
    T::OVERFLOW_CUTOFF
}

/// Convert integer text with no sign and no surrounding whitespace to `T`.
///
/// `Base::Auto` detects the radix from a prefix and rejects legacy octal. A
/// prefix matching the radix (`0x` for 16, `0o` for 8, `0b` for 2) is
/// skipped.
///
/// Decimal text longer than [`overflow_cutoff`] is validated but not
/// converted: the result has `overflow` set and a meaningless value. Use
/// [`parse_int_exact`] when the value is needed regardless.
///
/// ```
/// use numscan::{parse_int, Base};
///
/// let parsed = parse_int::<i64>(b"123456", Base::Decimal)?;
/// assert_eq!(parsed.checked(), Some(123456));
///
/// let parsed = parse_int::<i64>(b"99999999999999999999", Base::Decimal)?;
/// assert!(parsed.overflow);
///
/// assert!(parse_int::<i64>(b"017", Base::Auto).is_err());
/// # Ok::<(), numscan::Error>(())
/// ```
pub fn parse_int<T: Integer>(bytes: &[u8], base: Base) -> Result<ParsedInt<T>> {
    parse_int_impl(bytes, base, false)
}

/// Like [`parse_int`], but decimal text longer than [`overflow_cutoff`] is
/// converted exactly, so `overflow` is set only when the value really does
/// not fit in `T`.
///
/// ```
/// use numscan::{parse_int_exact, Base};
///
/// let parsed = parse_int_exact::<i64>(b"9223372036854775807", Base::Decimal)?;
/// assert_eq!(parsed.checked(), Some(i64::MAX));
///
/// let parsed = parse_int_exact::<i64>(b"9223372036854775808", Base::Decimal)?;
/// assert!(parsed.overflow);
/// # Ok::<(), numscan::Error>(())
/// ```
pub fn parse_int_exact<T: Integer>(bytes: &[u8], base: Base) -> Result<ParsedInt<T>> {
    parse_int_impl(bytes, base, true)
}

fn parse_int_impl<T: Integer>(
    mut bytes: &[u8],
    base: Base,
    always_convert: bool,
) -> Result<ParsedInt<T>> {
    let radix = match base.resolve(bytes) {
        Some(base) => base.radix(),
        None => return Err(Error::new(ErrorCode::InvalidBase)),
    };

    match bytes.first() {
        None => return Err(Error::new(ErrorCode::EmptyInput)),
        Some(&c) if is_sign(c) => return Err(Error::new(ErrorCode::UnexpectedSign)),
        Some(_) => {}
    }

    let overflow = bytes.len() > T::OVERFLOW_CUTOFF;

    if radix != 10 || (overflow && always_convert) {
        if bytes.len() > 1 && bytes[0] == b'0' && is_base_prefix_for(bytes[1], radix) {
            bytes = &bytes[2..];
        }
        return parse_radix(bytes, radix);
    }

    if overflow {
        // Too long to convert without overflow checks. The caller is going
        // to need an arbitrary-precision conversion no matter what this text
        // holds, so only make sure it is made of digits.
        let mut index = 0;
        consume_digits_fast(bytes, &mut index);
        if index != bytes.len() {
            return Err(Error::new(ErrorCode::InvalidDigit));
        }
        return Ok(ParsedInt {
            value: T::ZERO,
            overflow: true,
        });
    }

    let mut value = T::ZERO;
    if T::OVERFLOW_CUTOFF > swar::CHUNK {
        while let Some(chunk) = swar::first_chunk(bytes) {
            if !swar::is_made_of_eight_digits(chunk) {
                break;
            }
            value = value.mul_add_eight_digits(swar::parse_eight_digits(chunk));
            bytes = &bytes[swar::CHUNK..];
        }
    }
    for &c in bytes {
        let digit = to_digit(c);
        if digit < 0 {
            return Err(Error::new(ErrorCode::InvalidDigit));
        }
        value = value.mul_add_digit(digit as u8);
    }

    Ok(ParsedInt {
        value,
        overflow: false,
    })
}

fn parse_radix<T: Integer>(digits: &[u8], radix: u32) -> Result<ParsedInt<T>> {
    // The standard parser stops at the first overflowing digit. Validate the
    // whole span first so that trailing garbage is always an error.
    if !digits.iter().all(|&c| to_radix_digit(c, radix).is_some()) {
        return Err(Error::new(ErrorCode::InvalidDigit));
    }
    match str::from_utf8(digits) {
        Ok(digits) => T::from_radix_digits(digits, radix),
        Err(_) => Err(Error::new(ErrorCode::InvalidDigit)),
    }
}

// TESTS
// -----
