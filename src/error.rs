//! # Error Types

use thiserror::Error;

/// Errors from constructing or operating on fixed-width integers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WideIntError {
    /// The byte-array constructor was handed a slice whose length does not
    /// match the type's width. The input is never truncated or padded.
    #[error("invalid byte length: expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The operation has no defined semantics for these types.
    /// Multiplication, division and modulo fall in this category.
    #[error("{operation} is not implemented for fixed-width integers")]
    Unimplemented { operation: &'static str },
}

/// Failure to parse a decimal string into a fixed-width integer: the text
/// was not a decimal integer, or its value does not fit the target width.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot parse {input:?} as a {bits}-bit integer")]
pub struct ParseWideIntError {
    pub input: String,
    pub bits: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WideIntError::InvalidLength {
            expected: 16,
            found: 15,
        };
        assert_eq!(
            err.to_string(),
            "invalid byte length: expected 16 bytes, found 15"
        );

        let err = WideIntError::Unimplemented {
            operation: "multiplication",
        };
        assert_eq!(
            err.to_string(),
            "multiplication is not implemented for fixed-width integers"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseWideIntError {
            input: "12x".to_string(),
            bits: 128,
        };
        assert_eq!(err.to_string(), "cannot parse \"12x\" as a 128-bit integer");
    }
}
