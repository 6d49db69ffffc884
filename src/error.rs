//! When recognizing or converting a numeric literal goes wrong.

use crate::lib::{fmt, result, Debug, Display};

/// This type represents all possible errors that can occur when converting a
/// span of text into a native number.
///
/// Unlike most error types it is `Copy` and carries no heap allocation: the
/// conversion paths never allocate, and failures are plain return values.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `numscan::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - text that does not spell a number
    /// - `Category::Base` - a radix that cannot be used for this text
    /// - `Category::Memory` - failure to reserve scratch space
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::EmptyInput
            | ErrorCode::InvalidDigit
            | ErrorCode::UnexpectedSign
            | ErrorCode::InvalidNumber => Category::Syntax,
            ErrorCode::InvalidBase => Category::Base,
            ErrorCode::OutOfMemory => Category::Memory,
        }
    }

    /// Returns true if this error was caused by text that is not a
    /// syntactically valid number.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a radix that is illegal for
    /// the text, such as a legacy octal literal like `017` under automatic
    /// base detection.
    pub fn is_base(&self) -> bool {
        self.classify() == Category::Base
    }

    /// Returns true if this error was caused by a failure to reserve memory.
    ///
    /// Callers should treat this as fatal rather than falling back to another
    /// interpretation of the input.
    pub fn is_memory(&self) -> bool {
        self.classify() == Category::Memory
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error { code }
    }
}

/// Categorizes the cause of a `numscan::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that is not a syntactically valid number.
    Syntax,

    /// The error was caused by a radix that cannot be applied to the text.
    Base,

    /// The error was caused by a failed allocation.
    Memory,
}

/// This type describes all possible errors that can occur when converting a
/// span of text into a native number.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The span contained no characters.
    EmptyInput,

    /// A character that is not a digit of the radix was found before the end
    /// of the span.
    InvalidDigit,

    /// The span started with a sign. Signs are the caller's responsibility.
    UnexpectedSign,

    /// The span does not match the float grammar.
    InvalidNumber,

    /// The radix is not one of 2, 8, 10 or 16, or automatic detection found
    /// a legacy octal literal.
    InvalidBase,

    /// Scratch space for separator removal could not be reserved.
    OutOfMemory,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("cannot parse number from empty string"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit found in string"),
            ErrorCode::UnexpectedSign => f.write_str("unexpected sign"),
            ErrorCode::InvalidNumber => f.write_str("invalid number"),
            ErrorCode::InvalidBase => f.write_str("invalid base"),
            ErrorCode::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often end
// up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<ErrorCode> for Error {
    #[cold]
    fn from(code: ErrorCode) -> Self {
        Error::new(code)
    }
}

// TESTS
// -----

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn classify_test() {
        assert!(Error::new(ErrorCode::EmptyInput).is_syntax());
        assert!(Error::new(ErrorCode::InvalidDigit).is_syntax());
        assert!(Error::new(ErrorCode::UnexpectedSign).is_syntax());
        assert!(Error::new(ErrorCode::InvalidNumber).is_syntax());
        assert!(Error::new(ErrorCode::InvalidBase).is_base());
        assert!(Error::new(ErrorCode::OutOfMemory).is_memory());
        assert!(!Error::new(ErrorCode::OutOfMemory).is_syntax());
    }

    #[test]
    fn display_test() {
        assert_eq!(Error::new(ErrorCode::InvalidBase).to_string(), "invalid base");
        assert_eq!(
            Error::new(ErrorCode::InvalidDigit).to_string(),
            "invalid digit found in string"
        );
        assert_eq!(
            alloc::format!("{:?}", Error::new(ErrorCode::OutOfMemory)),
            "Error(OutOfMemory)"
        );
    }
}
