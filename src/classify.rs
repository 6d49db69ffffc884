//! Deciding what kind of number a span of text holds.

use crate::base::Base;
use crate::chars::{
    consume_digits_fast, is_base_prefix_for, is_likely_int, lowercase, number_trailing_zeros,
    quick_detect_infinity, quick_detect_nan, to_digit, to_radix_digit,
};

/// What a span of text represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NumberKind {
    /// The text matches no numeric grammar. No value can be read from it.
    Invalid,
    /// An optional base prefix followed by digits of that base.
    Integer,
    /// A decimal float with a fractional part, or one of the literals `inf`,
    /// `infinity` and `nan` (any case).
    Float,
    /// A decimal float whose value is integral, like `3.0`, `3e2` or
    /// `1.5e1`.
    IntLikeFloat,
}

impl NumberKind {
    /// Returns true for every kind except `Invalid`.
    #[inline]
    pub fn is_numeric(self) -> bool {
        self != NumberKind::Invalid
    }

    /// Returns true for `Float` and `IntLikeFloat`.
    #[inline]
    pub fn is_float(self) -> bool {
        match self {
            NumberKind::Float | NumberKind::IntLikeFloat => true,
            NumberKind::Invalid | NumberKind::Integer => false,
        }
    }
}

/// Classify `bytes`, which must carry no sign and no surrounding whitespace.
///
/// `base` applies to integers. A base other than `Decimal` (after resolving
/// `Auto`) admits only integers of that base, with or without the matching
/// prefix. Decimal text is tried as an integer first and then as a float.
///
/// The whole span must match: any trailing character, including a leftover
/// digit separator, makes the text `Invalid`.
///
/// ```
/// use numscan::{string_contains_what, Base, NumberKind};
///
/// assert_eq!(string_contains_what(b"123", Base::Decimal), NumberKind::Integer);
/// assert_eq!(string_contains_what(b"3.14", Base::Decimal), NumberKind::Float);
/// assert_eq!(string_contains_what(b"3.0", Base::Decimal), NumberKind::IntLikeFloat);
/// assert_eq!(string_contains_what(b"0x1F", Base::Auto), NumberKind::Integer);
/// assert_eq!(string_contains_what(b"017", Base::Auto), NumberKind::Invalid);
/// ```
pub fn string_contains_what(bytes: &[u8], base: Base) -> NumberKind {
    if bytes.is_empty() {
        return NumberKind::Invalid;
    }

    let radix = match base.resolve(bytes) {
        Some(base) => base.radix(),
        None => return NumberKind::Invalid,
    };
    if radix != 10 {
        return if is_based_integer(bytes, radix) {
            NumberKind::Integer
        } else {
            NumberKind::Invalid
        };
    }

    if !is_likely_int(bytes) {
        return float_kind(bytes, 0);
    }

    // Integers are the cheap and common case: a single digit run.
    let mut index = 0;
    consume_digits_fast(bytes, &mut index);
    if index == bytes.len() {
        return NumberKind::Integer;
    }

    float_kind(bytes, index)
}

fn is_based_integer(bytes: &[u8], radix: u32) -> bool {
    let digits = match bytes {
        [b'0', prefix, rest @ ..] if is_base_prefix_for(*prefix, radix) => rest,
        _ => bytes,
    };
    !digits.is_empty()
        && digits
            .iter()
            .all(|&c| to_radix_digit(c, radix).is_some())
}

/// Match the float grammar `digits? ('.' digits?)? ([eE] [+-]? digits)?`
/// with at least one mantissa digit, or a special literal.
///
/// `integer_end` is where the leading digit run stops.
fn float_kind(bytes: &[u8], integer_end: usize) -> NumberKind {
    let integer = &bytes[..integer_end];
    let mut index = integer_end;

    let mut fraction: &[u8] = &[];
    if bytes[index] == b'.' {
        index += 1;
        let start = index;
        consume_digits_fast(bytes, &mut index);
        fraction = &bytes[start..index];
    }

    if integer.is_empty() && fraction.is_empty() {
        return if quick_detect_infinity(bytes) || quick_detect_nan(bytes) {
            NumberKind::Float
        } else {
            NumberKind::Invalid
        };
    }

    let mut exponent: i64 = 0;
    if index < bytes.len() && lowercase(bytes[index]) == b'e' {
        index += 1;
        let negative = match bytes.get(index) {
            Some(b'-') => {
                index += 1;
                true
            }
            Some(b'+') => {
                index += 1;
                false
            }
            _ => false,
        };

        let start = index;
        while index < bytes.len() {
            let digit = to_digit(bytes[index]);
            if digit < 0 {
                break;
            }
            exponent = exponent.saturating_mul(10).saturating_add(digit as i64);
            index += 1;
        }
        if index == start {
            return NumberKind::Invalid;
        }
        if negative {
            exponent = -exponent;
        }
    }

    if index != bytes.len() {
        return NumberKind::Invalid;
    }

    if is_integral(integer, fraction, exponent) {
        NumberKind::IntLikeFloat
    } else {
        NumberKind::Float
    }
}

/// Whether `integer.fraction * 10^exponent` has no fractional part.
fn is_integral(integer: &[u8], fraction: &[u8], exponent: i64) -> bool {
    let fraction = &fraction[..fraction.len() - number_trailing_zeros(fraction)];
    let integer_zeros = number_trailing_zeros(integer);

    if fraction.is_empty() && integer_zeros == integer.len() {
        // Zero, however it is spelled.
        return true;
    }

    // The value is `significant * 10^scale` where `significant` ends in a
    // non-zero digit followed by `zeros` zeros.
    let zeros = if fraction.is_empty() { integer_zeros } else { 0 };
    let scale = exponent.saturating_sub(fraction.len() as i64);
    scale.saturating_add(zeros as i64) >= 0
}

#[cfg(feature = "serde")]
impl serde::Serialize for NumberKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let (index, name) = match self {
            NumberKind::Invalid => (0, "Invalid"),
            NumberKind::Integer => (1, "Integer"),
            NumberKind::Float => (2, "Float"),
            NumberKind::IntLikeFloat => (3, "IntLikeFloat"),
        };
        serializer.serialize_unit_variant("NumberKind", index, name)
    }
}

// TESTS
// -----

#[cfg(test)]
mod test {
    use super::*;
    use NumberKind::*;

    fn kind(text: &str) -> NumberKind {
        string_contains_what(text.as_bytes(), Base::Decimal)
    }

    #[test]
    fn integer_test() {
        assert_eq!(kind("0"), Integer);
        assert_eq!(kind("123"), Integer);
        assert_eq!(kind("017"), Integer);
        assert_eq!(kind("12345678901234567890123"), Integer);
    }

    #[test]
    fn float_test() {
        assert_eq!(kind("3.14"), Float);
        assert_eq!(kind(".5"), Float);
        assert_eq!(kind("1e-5"), Float);
        assert_eq!(kind("1.25e1"), Float);
        assert_eq!(kind("1E-1"), Float);
        assert_eq!(kind("0.001"), Float);
    }

    #[test]
    fn int_like_test() {
        assert_eq!(kind("3.0"), IntLikeFloat);
        assert_eq!(kind("3."), IntLikeFloat);
        assert_eq!(kind("3e2"), IntLikeFloat);
        assert_eq!(kind("3E+2"), IntLikeFloat);
        assert_eq!(kind("1.5e1"), IntLikeFloat);
        assert_eq!(kind("300e-2"), IntLikeFloat);
        assert_eq!(kind("10e-1"), IntLikeFloat);
        assert_eq!(kind("0.0"), IntLikeFloat);
        assert_eq!(kind(".0"), IntLikeFloat);
        assert_eq!(kind("0e-10"), IntLikeFloat);
        assert_eq!(kind("1.000000000000"), IntLikeFloat);
        assert_eq!(kind("1e400"), IntLikeFloat);
        assert_eq!(kind("300e-3"), Float);
    }

    #[test]
    fn special_test() {
        assert_eq!(kind("inf"), Float);
        assert_eq!(kind("INF"), Float);
        assert_eq!(kind("Infinity"), Float);
        assert_eq!(kind("nan"), Float);
        assert_eq!(kind("NaN"), Float);
        assert_eq!(kind("infinit"), Invalid);
        assert_eq!(kind("nana"), Invalid);
        assert_eq!(kind("in"), Invalid);
    }

    #[test]
    fn invalid_test() {
        assert_eq!(kind(""), Invalid);
        assert_eq!(kind("."), Invalid);
        assert_eq!(kind("e5"), Invalid);
        assert_eq!(kind(".e5"), Invalid);
        assert_eq!(kind("1e"), Invalid);
        assert_eq!(kind("1e+"), Invalid);
        assert_eq!(kind("1.2.3"), Invalid);
        assert_eq!(kind("1e5.0"), Invalid);
        assert_eq!(kind("12a"), Invalid);
        assert_eq!(kind("1_000"), Invalid);
        assert_eq!(kind("-1"), Invalid);
        assert_eq!(kind("+1"), Invalid);
        assert_eq!(kind("1 "), Invalid);
        assert_eq!(kind("0x10"), Invalid);
    }

    #[test]
    fn based_test() {
        let what = |text: &str, base| string_contains_what(text.as_bytes(), base);
        assert_eq!(what("0x1F", Base::Auto), Integer);
        assert_eq!(what("0o17", Base::Auto), Integer);
        assert_eq!(what("0b101", Base::Auto), Integer);
        assert_eq!(what("0000", Base::Auto), Integer);
        assert_eq!(what("1.5", Base::Auto), Float);
        assert_eq!(what("017", Base::Auto), Invalid);
        assert_eq!(what("0x", Base::Auto), Invalid);
        assert_eq!(what("0b102", Base::Auto), Invalid);
        assert_eq!(what("ff", Base::Hexadecimal), Integer);
        assert_eq!(what("0XfF", Base::Hexadecimal), Integer);
        assert_eq!(what("0b1", Base::Hexadecimal), Integer);
        assert_eq!(what("0o17", Base::Hexadecimal), Invalid);
        assert_eq!(what("17", Base::Octal), Integer);
        assert_eq!(what("18", Base::Octal), Invalid);
        assert_eq!(what("1.0", Base::Octal), Invalid);
        assert_eq!(what("0b", Base::Binary), Invalid);
    }
}
