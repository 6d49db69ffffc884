//! Radix selection and automatic base detection.

use crate::chars::{lowercase, number_trailing_zeros};
use crate::lib::{fmt, Display};

/// The radix an integer is read in.
///
/// Floats are always read in base 10, so any base other than `Decimal` (or
/// `Auto` resolving to `Decimal`) limits the text to integers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Base {
    /// Infer the radix from a `0x`, `0o` or `0b` prefix. Text without a
    /// prefix is decimal, and legacy octal such as `017` is rejected.
    Auto,
    /// Radix 2, optionally prefixed by `0b`.
    Binary,
    /// Radix 8, optionally prefixed by `0o`.
    Octal,
    /// Radix 10.
    #[default]
    Decimal,
    /// Radix 16, optionally prefixed by `0x`.
    Hexadecimal,
}

impl Base {
    /// Look up the base for a numeric radix. `0` selects `Auto`.
    ///
    /// Returns `None` for any radix other than 0, 2, 8, 10 or 16.
    ///
    /// ```
    /// use numscan::Base;
    ///
    /// assert_eq!(Base::from_radix(16), Some(Base::Hexadecimal));
    /// assert_eq!(Base::from_radix(0), Some(Base::Auto));
    /// assert_eq!(Base::from_radix(36), None);
    /// ```
    pub fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            0 => Some(Base::Auto),
            2 => Some(Base::Binary),
            8 => Some(Base::Octal),
            10 => Some(Base::Decimal),
            16 => Some(Base::Hexadecimal),
            _ => None,
        }
    }

    /// The numeric radix, with `0` standing for `Auto`.
    #[inline]
    pub fn radix(self) -> u32 {
        match self {
            Base::Auto => 0,
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Resolve `Auto` against `bytes` using [`detect_base`]; any other base is
    /// returned unchanged.
    #[inline]
    pub fn resolve(self, bytes: &[u8]) -> Option<Self> {
        match self {
            Base::Auto => detect_base(bytes),
            base => Some(base),
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Base::Auto => f.write_str("auto"),
            base => Display::fmt(&base.radix(), f),
        }
    }
}

/// Infer the radix of an unsigned integer literal from its prefix.
///
/// - Text not starting with `0`, or exactly `"0"`, is decimal.
/// - `0x`, `0o` and `0b` (any case) select 16, 8 and 2.
/// - Otherwise a leading zero is only legal if every character is `0`
///   (`"000"` is decimal zero). Anything else, like `"017"`, is a legacy
///   octal literal and yields `None`.
///
/// Empty input is treated as decimal; conversion rejects it separately.
///
/// ```
/// use numscan::{detect_base, Base};
///
/// assert_eq!(detect_base(b"0x1A"), Some(Base::Hexadecimal));
/// assert_eq!(detect_base(b"0000"), Some(Base::Decimal));
/// assert_eq!(detect_base(b"0017"), None);
/// ```
pub fn detect_base(bytes: &[u8]) -> Option<Base> {
    match bytes {
        [b'0', second, ..] => match lowercase(*second) {
            b'x' => Some(Base::Hexadecimal),
            b'o' => Some(Base::Octal),
            b'b' => Some(Base::Binary),
            _ if number_trailing_zeros(bytes) == bytes.len() => Some(Base::Decimal),
            _ => None,
        },
        _ => Some(Base::Decimal),
    }
}

// TESTS
// -----
