//! The single return channel of the [`Converter`](crate::Converter).
//!
//! A conversion either produces a native value or tells the caller's policy
//! what to do instead: convert on a slower path, return a special float, or
//! report one of several errors. [`Payload`] carries exactly one of those
//! outcomes, so the policy always receives the same shape no matter which
//! path produced it.

use crate::lib::{fmt, Display};

/// A symbolic outcome: what the caller should do instead of using a value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ActionType {
    /// Return the input unchanged.
    AsIs,
    /// Convert the (numeric) input to a float.
    AsFloat,
    /// Convert the (numeric) input to an integer.
    AsInt,
    /// The text is an integer too large for 64 bits. Convert it with an
    /// arbitrary-precision integer parser.
    TryIntSlow,
    /// Convert the input with a general float parser.
    TryFloatSlow,
    /// The text is a float too large to truncate exactly through `f64`.
    /// Parse it as a float, then truncate with arbitrary precision.
    TryFloatThenForceIntSlow,
    /// The text is an integral float too large to recover exactly through
    /// `f64`. Parse it as a float, then convert with arbitrary precision.
    TryFloatThenCoerceIntSlow,
    /// Positive NaN.
    Nan,
    /// Positive infinity.
    Inf,
    /// Negative NaN.
    NegNan,
    /// Negative infinity.
    NegInf,
    /// The input cannot be interpreted as an integer.
    ErrorInvalidInt,
    /// The input cannot be interpreted as a float.
    ErrorInvalidFloat,
    /// The requested base is invalid, or cannot be used with this input.
    ErrorInvalidBase,
    /// Infinity cannot be converted to an integer.
    ErrorInfinityToInt,
    /// NaN cannot be converted to an integer.
    ErrorNanToInt,
    /// The input is of a type that cannot become an integer.
    ErrorBadTypeInt,
    /// The input is of a type that cannot become a float.
    ErrorBadTypeFloat,
}

impl ActionType {
    /// Returns true for the `Error*` actions.
    pub fn is_error(self) -> bool {
        match self {
            ActionType::ErrorInvalidInt
            | ActionType::ErrorInvalidFloat
            | ActionType::ErrorInvalidBase
            | ActionType::ErrorInfinityToInt
            | ActionType::ErrorNanToInt
            | ActionType::ErrorBadTypeInt
            | ActionType::ErrorBadTypeFloat => true,
            _ => false,
        }
    }

    /// Returns true for the `Try*Slow` actions, which ask the caller to redo
    /// the conversion with arbitrary precision.
    pub fn is_slow_path(self) -> bool {
        match self {
            ActionType::TryIntSlow
            | ActionType::TryFloatSlow
            | ActionType::TryFloatThenForceIntSlow
            | ActionType::TryFloatThenCoerceIntSlow => true,
            _ => false,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ActionType::AsIs => "AsIs",
            ActionType::AsFloat => "AsFloat",
            ActionType::AsInt => "AsInt",
            ActionType::TryIntSlow => "TryIntSlow",
            ActionType::TryFloatSlow => "TryFloatSlow",
            ActionType::TryFloatThenForceIntSlow => "TryFloatThenForceIntSlow",
            ActionType::TryFloatThenCoerceIntSlow => "TryFloatThenCoerceIntSlow",
            ActionType::Nan => "Nan",
            ActionType::Inf => "Inf",
            ActionType::NegNan => "NegNan",
            ActionType::NegInf => "NegInf",
            ActionType::ErrorInvalidInt => "ErrorInvalidInt",
            ActionType::ErrorInvalidFloat => "ErrorInvalidFloat",
            ActionType::ErrorInvalidBase => "ErrorInvalidBase",
            ActionType::ErrorInfinityToInt => "ErrorInfinityToInt",
            ActionType::ErrorNanToInt => "ErrorNanToInt",
            ActionType::ErrorBadTypeInt => "ErrorBadTypeInt",
            ActionType::ErrorBadTypeFloat => "ErrorBadTypeFloat",
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which variant a [`Payload`] holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PayloadType {
    /// [`Payload::Action`]
    Action,
    /// [`Payload::Int`]
    Int,
    /// [`Payload::Float`]
    Float,
    /// [`Payload::FloatToInt`]
    FloatToInt,
}

/// The outcome of a conversion.
///
/// Defaults to `Action(ActionType::AsIs)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Payload {
    /// Something other than a value: see [`ActionType`].
    Action(ActionType),
    /// An integer value.
    Int(i64),
    /// A float value.
    Float(f64),
    /// An integral float value the caller should return as an integer.
    FloatToInt(f64),
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Action(ActionType::AsIs)
    }
}

impl From<ActionType> for Payload {
    fn from(action: ActionType) -> Self {
        Payload::Action(action)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Int(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Float(value)
    }
}

impl Payload {
    /// Which variant this payload holds.
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Payload::Action(_) => PayloadType::Action,
            Payload::Int(_) => PayloadType::Int,
            Payload::Float(_) => PayloadType::Float,
            Payload::FloatToInt(_) => PayloadType::FloatToInt,
        }
    }

    /// The action, if this payload holds one.
    pub fn as_action(&self) -> Option<ActionType> {
        match *self {
            Payload::Action(action) => Some(action),
            _ => None,
        }
    }

    /// The integer value, if this payload holds one.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Payload::Int(value) => Some(value),
            _ => None,
        }
    }

    /// The float value, for both `Float` and `FloatToInt`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Payload::Float(value) | Payload::FloatToInt(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this payload is an `Error*` action.
    pub fn is_error(&self) -> bool {
        match self {
            Payload::Action(action) => action.is_error(),
            _ => false,
        }
    }
}

fn fmt_float(value: f64, f: &mut fmt::Formatter) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        f.write_str(if value < 0.0 { "-inf" } else { "inf" })
    } else {
        let mut buffer = zmij::Buffer::new();
        f.write_str(buffer.format_finite(value))
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Payload::Action(action) => Display::fmt(&action, f),
            Payload::Int(value) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(value))
            }
            Payload::Float(value) => fmt_float(value, f),
            Payload::FloatToInt(value) => {
                f.write_str("int(")?;
                fmt_float(value, f)?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(feature = "serde")]
mod ser {
    use super::{ActionType, Payload, PayloadType};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for ActionType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_unit_variant("ActionType", *self as u32, self.name())
        }
    }

    impl Serialize for PayloadType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let (index, name) = match self {
                PayloadType::Action => (0, "Action"),
                PayloadType::Int => (1, "Int"),
                PayloadType::Float => (2, "Float"),
                PayloadType::FloatToInt => (3, "FloatToInt"),
            };
            serializer.serialize_unit_variant("PayloadType", index, name)
        }
    }

    impl Serialize for Payload {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Payload::Action(action) => {
                    serializer.serialize_newtype_variant("Payload", 0, "Action", action)
                }
                Payload::Int(value) => {
                    serializer.serialize_newtype_variant("Payload", 1, "Int", value)
                }
                Payload::Float(value) => {
                    serializer.serialize_newtype_variant("Payload", 2, "Float", value)
                }
                Payload::FloatToInt(value) => {
                    serializer.serialize_newtype_variant("Payload", 3, "FloatToInt", value)
                }
            }
        }
    }
}

// TESTS
// -----
