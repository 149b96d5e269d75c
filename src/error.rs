//! Error types for the toolbox.
//!
//! Every fallible operation in this crate reports its failure synchronously
//! through [`Error`]. None of the operations perform I/O, so every variant
//! describes a contract violation at the call site rather than a transient
//! condition: nothing is retried, and a failed operation produces no value.
//!
//! # Examples
//!
//! ```rust
//! use fpbox::Error;
//! use fpbox::sequence::Char;
//!
//! let error = Char::new("ab").unwrap_err();
//! assert_eq!(
//!     error,
//!     Error::InvalidChar { text: "ab".to_string(), length: 2 }
//! );
//! ```

use crate::combinators::Arity;

/// The failures a toolbox operation can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A sequence that must be homogeneous holds an element whose runtime
    /// type differs from the reference type.
    #[error("type mismatch at index {index}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Position of the first offending element.
        index: usize,
        /// Name of the reference type.
        expected: &'static str,
        /// Name of the offending element's type.
        found: &'static str,
    },

    /// A [`Char`](crate::sequence::Char) was built from text that is not
    /// exactly one character long.
    #[error("invalid char {text:?}: expected exactly one character, found {length}")]
    InvalidChar {
        /// The rejected input.
        text: String,
        /// Number of characters in the rejected input.
        length: usize,
    },

    /// [`curry`](crate::combinators::curry) was asked to wrap a function
    /// whose arity does not allow one-argument-at-a-time application.
    #[error("cannot curry a function with {arity}")]
    UncurriableFunction {
        /// The declared arity that was rejected.
        arity: Arity,
    },

    /// A combinator received degenerate input it cannot give a meaning to.
    #[error("{combinator}: {reason}")]
    ConfigurationError {
        /// Name of the combinator that rejected its input.
        combinator: &'static str,
        /// What was wrong with the input.
        reason: &'static str,
    },
}

/// A specialized `Result` for toolbox operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Error::TypeMismatch { index: 2, expected: "i32", found: "&str" },
        "type mismatch at index 2: expected `i32`, found `&str`"
    )]
    #[case(
        Error::InvalidChar { text: String::new(), length: 0 },
        "invalid char \"\": expected exactly one character, found 0"
    )]
    #[case(
        Error::UncurriableFunction { arity: Arity::Variadic },
        "cannot curry a function with variadic arity"
    )]
    #[case(
        Error::ConfigurationError { combinator: "compose", reason: "no functions to compose" },
        "compose: no functions to compose"
    )]
    fn error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<Error>();
    }
}
