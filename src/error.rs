//! Error types for the sunrise/sunset library.
//!
//! Errors occur only at the input boundary, when converting caller-supplied
//! coordinates into the fixed-precision decimal domain. The computation
//! pipeline itself has no error paths: a day without the requested solar
//! event is an ordinary `None` result, not an error.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while constructing calculation inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A floating-point coordinate was NaN or infinite and cannot be
    /// represented as a fixed-precision decimal.
    NonFiniteCoordinate {
        /// The offending coordinate value.
        value: f64,
    },
    /// A textual coordinate could not be parsed as decimal degrees.
    UnparseableCoordinate {
        /// The text that failed to parse.
        text: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { value } => {
                write!(f, "coordinate {value} is not a finite number of degrees")
            }
            Self::UnparseableCoordinate { text } => {
                write!(f, "cannot parse {text:?} as decimal degrees")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates a non-finite coordinate error.
    #[must_use]
    pub const fn non_finite_coordinate(value: f64) -> Self {
        Self::NonFiniteCoordinate { value }
    }

    /// Creates an unparseable coordinate error.
    #[must_use]
    pub fn unparseable_coordinate(text: impl Into<String>) -> Self {
        Self::UnparseableCoordinate { text: text.into() }
    }
}
