//! Error types for geometry operations
//!
//! Integer overflow is never an error here: the integer rectangle saturates
//! instead. What remains are contract violations surfaced immediately.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by geometry values and path iterators
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("invalid argument: {message}")]
    #[diagnostic(code(geom2d::invalid_argument))]
    InvalidArgument { message: String },

    #[error("{iterator} iterator out of bounds")]
    #[diagnostic(
        code(geom2d::path::no_such_element),
        help("check `is_done()` before asking for the current segment")
    )]
    NoSuchElement { iterator: &'static str },

    #[error("non-finite coordinate: {value}")]
    #[diagnostic(code(geom2d::non_finite))]
    NonFinite { value: f64 },
}

impl GeomError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        GeomError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GeomError>;

/// Reject NaN and infinities, passing finite values through.
pub(crate) fn check_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeomError::NonFinite { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GeomError::NoSuchElement { iterator: "rect" };
        assert_eq!(err.to_string(), "rect iterator out of bounds");

        let err = GeomError::invalid_argument("flatness must be >= 0");
        assert_eq!(err.to_string(), "invalid argument: flatness must be >= 0");
    }

    #[test]
    fn diagnostic_codes() {
        let err = GeomError::NoSuchElement {
            iterator: "roundrect",
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("geom2d::path::no_such_element"));
    }

    #[test]
    fn finite_check() {
        assert_eq!(check_finite(1.5), Ok(1.5));
        assert!(matches!(
            check_finite(f64::INFINITY),
            Err(GeomError::NonFinite { .. })
        ));
        assert!(check_finite(f64::NAN).is_err());
    }
}
