//! Routing arbitrary input through classification and conversion.
//!
//! The [`Converter`] is the top-level entry point. Inputs describe themselves
//! through the [`Input`] trait: they may already be a native number, they
//! may carry text, or they may be a single numeral character. The converter
//! picks the matching path and always answers with a [`Payload`].

use crate::base::Base;
use crate::chars::{quick_detect_infinity, trim_whitespace};
use crate::classify::{string_contains_what, NumberKind};
use crate::error::{Error, ErrorCode, Result};
use crate::float::parse_float;
use crate::int::{parse_int, parse_int_exact};
use crate::lib::Vec;
use crate::payload::{ActionType, Payload};
use crate::underscore::{contains_underscore, remove_valid_underscores};
use core::str;

/// Every integer up to this magnitude is exactly representable as `f64`.
const MAX_EXACT_INT_F64: f64 = 9007199254740992.0;

/// Every `f64` of at least this magnitude is an integer.
const MIN_INTEGRAL_F64: f64 = 4503599627370496.0;

#[inline]
fn within_exact_range(value: f64) -> bool {
    -MAX_EXACT_INT_F64 <= value && value <= MAX_EXACT_INT_F64
}

#[inline]
fn is_integral(value: f64) -> bool {
    !(-MIN_INTEGRAL_F64 < value && value < MIN_INTEGRAL_F64) || (value as i64) as f64 == value
}

/// The kind of number a conversion should produce.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    /// An integer for integer text, otherwise a float. Integral floats are
    /// returned as integers when coercion is enabled.
    Real,
    /// Always a float.
    Float,
    /// Only integer text is accepted.
    Int,
    /// Integer text, or float text with an integral value.
    IntLike,
    /// Any number, truncated to an integer.
    ForceInt,
}

impl Target {
    /// The failure reported for input that is text but not a number.
    pub fn invalid(self) -> ActionType {
        match self {
            Target::Real | Target::Float => ActionType::ErrorInvalidFloat,
            Target::Int | Target::IntLike | Target::ForceInt => ActionType::ErrorInvalidInt,
        }
    }

    /// The failure reported for input that is neither a number nor text.
    pub fn bad_type(self) -> ActionType {
        match self {
            Target::Real | Target::Float => ActionType::ErrorBadTypeFloat,
            Target::Int | Target::IntLike | Target::ForceInt => ActionType::ErrorBadTypeInt,
        }
    }
}

/// Something a [`Converter`] can be asked to convert.
///
/// Every method has a default that declines, so an implementation only
/// overrides what applies to it.
pub trait Input {
    /// Whether this input is already a native number.
    fn is_number(&self) -> bool {
        false
    }

    /// Convert a native number to the target kind. Only called when
    /// `is_number` returns true.
    fn convert_number(&self, target: Target) -> Payload {
        let _ = target;
        Payload::default()
    }

    /// The text of this input, if it has any.
    fn as_text(&self) -> Option<&[u8]> {
        None
    }

    /// The value of this input as a single numeral character, if it is one.
    fn numeral(&self, target: Target) -> Option<Payload> {
        let _ = target;
        None
    }
}

impl Input for str {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }

    fn numeral(&self, target: Target) -> Option<Payload> {
        // Trimming only ASCII whitespace keeps the slice on char boundaries.
        let trimmed = str::from_utf8(trim_whitespace(self.as_bytes())).ok()?;
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.numeral(target),
            _ => None,
        }
    }
}

impl Input for [u8] {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Input for char {
    fn numeral(&self, target: Target) -> Option<Payload> {
        let digit = numeral_value(*self)?;
        Some(match target {
            Target::Float => Payload::Float(digit as f64),
            Target::Real | Target::Int | Target::IntLike | Target::ForceInt => {
                Payload::Int(digit as i64)
            }
        })
    }
}

macro_rules! int_input {
    ($($t:ty)*) => ($(
        impl Input for $t {
            fn is_number(&self) -> bool {
                true
            }

            fn convert_number(&self, target: Target) -> Payload {
                match target {
                    Target::Float => Payload::Action(ActionType::AsFloat),
                    _ => Payload::Action(ActionType::AsIs),
                }
            }
        }
    )*)
}

int_input! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

macro_rules! float_input {
    ($($t:ty)*) => ($(
        impl Input for $t {
            fn is_number(&self) -> bool {
                true
            }

            fn convert_number(&self, target: Target) -> Payload {
                let value = *self as f64;
                let action = match target {
                    Target::Real | Target::Float => ActionType::AsIs,
                    _ if value.is_nan() => ActionType::ErrorNanToInt,
                    _ if value.is_infinite() => ActionType::ErrorInfinityToInt,
                    Target::Int | Target::ForceInt => ActionType::AsInt,
                    Target::IntLike if is_integral(value) => ActionType::AsInt,
                    Target::IntLike => ActionType::ErrorInvalidInt,
                };
                Payload::Action(action)
            }
        }
    )*)
}

float_input! { f32 f64 }

// Code points of the digit zero of Unicode decimal digit blocks. Each block
// holds the ten digits in order.
static DIGIT_ZEROS: [u32; 19] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x17E0, 0x1810, 0xFF10,
];

fn numeral_value(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    let c = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| c >= zero && c - zero < 10)
        .map(|&zero| c - zero)
}

/// Converts input into a [`Payload`], reusing scratch space between calls.
///
/// ```
/// use numscan::{ActionType, Converter, Payload, Target};
///
/// let mut converter = Converter::new().base(0);
/// assert_eq!(converter.convert_str("0x1F", Target::Int)?, Payload::Int(31));
/// assert_eq!(
///     converter.convert_str("017", Target::Int)?,
///     Payload::Action(ActionType::ErrorInvalidInt),
/// );
/// # Ok::<(), numscan::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Converter {
    scratch: Vec<u8>,
    base: Option<u32>,
    allow_underscores: bool,
    coerce: bool,
    allow_numeral_chars: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new()
    }
}

impl Converter {
    /// A converter with no explicit base that accepts separators, coerces
    /// integral floats and maps numeral characters.
    pub fn new() -> Self {
        Converter {
            scratch: Vec::new(),
            base: None,
            allow_underscores: true,
            coerce: true,
            allow_numeral_chars: true,
        }
    }

    /// Read integer text in this radix. `0` detects the radix from a `0x`,
    /// `0o` or `0b` prefix.
    ///
    /// Only 0, 2, 8, 10 and 16 are accepted, and only for [`Target::Int`].
    /// Any other combination makes every conversion fail with
    /// `ErrorInvalidBase`. Native numbers cannot be converted with a base.
    pub fn base(mut self, radix: u32) -> Self {
        self.base = Some(radix);
        self
    }

    /// Whether `_` may group digits, as in `1_000`. Enabled by default.
    pub fn allow_underscores(mut self, allow: bool) -> Self {
        self.allow_underscores = allow;
        self
    }

    /// Whether [`Target::Real`] returns integral floats like `3.0` as
    /// integers. Enabled by default.
    pub fn coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Whether a single numeral character that is not ASCII, like `٣`, is
    /// converted to its digit value. Enabled by default.
    pub fn allow_numeral_chars(mut self, allow: bool) -> Self {
        self.allow_numeral_chars = allow;
        self
    }

    /// Convert any input to `target`.
    ///
    /// The only error is a failure to reserve scratch space. It is returned
    /// immediately, without trying any other interpretation of the input.
    /// Every other outcome is a [`Payload`].
    pub fn convert<I>(&mut self, input: &I, target: Target) -> Result<Payload>
    where
        I: ?Sized + Input,
    {
        let base = match self.base {
            Some(radix) => match Base::from_radix(radix) {
                Some(base) if target == Target::Int && !input.is_number() => Some(base),
                _ => {
                    trace!(radix, kind = ?target, "invalid base");
                    return Ok(Payload::Action(ActionType::ErrorInvalidBase));
                }
            },
            None => None,
        };

        if input.is_number() {
            return Ok(input.convert_number(target));
        }

        if let Some(text) = input.as_text() {
            if let Some(payload) = self.convert_text_impl(text, base, target)? {
                return Ok(payload);
            }
        }

        // A base only applies to text.
        if base.is_some() {
            return Ok(Payload::Action(target.invalid()));
        }

        if let Some(payload) = input.numeral(target) {
            if self.allow_numeral_chars {
                return Ok(payload);
            }
            return Ok(Payload::Action(target.invalid()));
        }

        if input.as_text().is_some() {
            Ok(Payload::Action(target.invalid()))
        } else {
            trace!(kind = ?target, "input is neither a number nor text");
            Ok(Payload::Action(target.bad_type()))
        }
    }

    /// Convert a string to `target`. See [`convert`](Converter::convert).
    pub fn convert_str(&mut self, text: &str, target: Target) -> Result<Payload> {
        self.convert(text, target)
    }

    /// Convert raw text to `target`.
    ///
    /// Surrounding whitespace and a single leading sign are removed first.
    /// Returns `None` when the text is not applicable because it holds
    /// non-ASCII characters.
    pub fn convert_text(&mut self, text: &[u8], target: Target) -> Result<Option<Payload>> {
        let base = match self.base {
            Some(radix) => match Base::from_radix(radix) {
                Some(base) if target == Target::Int => Some(base),
                _ => return Ok(Some(Payload::Action(ActionType::ErrorInvalidBase))),
            },
            None => None,
        };
        self.convert_text_impl(text, base, target)
    }

    fn convert_text_impl(
        &mut self,
        text: &[u8],
        base: Option<Base>,
        target: Target,
    ) -> Result<Option<Payload>> {
        let trimmed = trim_whitespace(text);
        let (negative, body) = match trimmed.split_first() {
            Some((&b'-', rest)) => (true, rest),
            Some((&b'+', rest)) => (false, rest),
            _ => (false, trimmed),
        };
        if !body.is_ascii() {
            return Ok(None);
        }

        let base = base.unwrap_or(Base::Decimal);
        let body = if self.allow_underscores && contains_underscore(body) {
            let based = match base.resolve(body) {
                Some(resolved) => resolved != Base::Decimal,
                None => false,
            };
            self.scratch.clear();
            if self.scratch.try_reserve(body.len()).is_err() {
                trace!(len = body.len(), "failed to reserve scratch space");
                return Err(Error::new(ErrorCode::OutOfMemory));
            }
            self.scratch.extend_from_slice(body);
            let len = remove_valid_underscores(&mut self.scratch, based);
            &self.scratch[..len]
        } else {
            body
        };

        let payload = match string_contains_what(body, base) {
            NumberKind::Invalid => Payload::Action(target.invalid()),
            NumberKind::Integer => self.integer(body, negative, base, target),
            NumberKind::Float => self.float(body, negative, false, target),
            NumberKind::IntLikeFloat => self.float(body, negative, true, target),
        };
        Ok(Some(payload))
    }

    fn integer(&self, body: &[u8], negative: bool, base: Base, target: Target) -> Payload {
        if target == Target::Float {
            return match parse_float::<f64>(body) {
                Ok(value) => Payload::Float(if negative { -value } else { value }),
                Err(_) => Payload::Action(target.invalid()),
            };
        }

        let parsed = match parse_int::<u64>(body, base) {
            Ok(parsed) if parsed.overflow => parse_int_exact::<u64>(body, base),
            result => result,
        };
        let magnitude = match parsed {
            Ok(parsed) => parsed.checked(),
            Err(_) => return Payload::Action(target.invalid()),
        };

        let value = match magnitude {
            Some(magnitude) if negative && magnitude <= i64::MIN.unsigned_abs() => {
                Some((magnitude as i64).wrapping_neg())
            }
            Some(magnitude) if !negative && magnitude <= i64::MAX as u64 => Some(magnitude as i64),
            _ => None,
        };
        match value {
            Some(value) => Payload::Int(value),
            None => {
                trace!(digits = body.len(), "integer does not fit in 64 bits");
                Payload::Action(ActionType::TryIntSlow)
            }
        }
    }

    fn float(&self, body: &[u8], negative: bool, int_like: bool, target: Target) -> Payload {
        let value = match parse_float::<f64>(body) {
            Ok(value) => value,
            Err(_) => return Payload::Action(target.invalid()),
        };

        if value.is_nan() {
            return Payload::Action(match target {
                Target::Real | Target::Float if negative => ActionType::NegNan,
                Target::Real | Target::Float => ActionType::Nan,
                Target::Int => ActionType::ErrorInvalidInt,
                Target::IntLike | Target::ForceInt => ActionType::ErrorNanToInt,
            });
        }

        let value = if negative { -value } else { value };
        if value.is_infinite() {
            let literal = quick_detect_infinity(body);
            return match target {
                Target::Real | Target::Float if !literal => Payload::Float(value),
                Target::Real | Target::Float if negative => Payload::Action(ActionType::NegInf),
                Target::Real | Target::Float => Payload::Action(ActionType::Inf),
                Target::Int => Payload::Action(ActionType::ErrorInvalidInt),
                Target::IntLike | Target::ForceInt => {
                    Payload::Action(ActionType::ErrorInfinityToInt)
                }
            };
        }

        let exact = within_exact_range(value);
        match target {
            Target::Float => Payload::Float(value),
            Target::Real if !int_like || !self.coerce => Payload::Float(value),
            Target::Int => Payload::Action(ActionType::ErrorInvalidInt),
            Target::IntLike if !int_like => Payload::Action(ActionType::ErrorInvalidInt),
            Target::Real | Target::IntLike if exact => Payload::FloatToInt(value),
            Target::Real | Target::IntLike => {
                trace!(value, "integral float beyond exact f64 range");
                Payload::Action(ActionType::TryFloatThenCoerceIntSlow)
            }
            Target::ForceInt if exact => Payload::FloatToInt(value),
            Target::ForceInt => {
                trace!(value, "float beyond exact f64 range");
                Payload::Action(ActionType::TryFloatThenForceIntSlow)
            }
        }
    }
}

// TESTS
// -----
