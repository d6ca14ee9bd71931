//! Error types for the tvm calculators.
//!
//! Every failure a calculation can produce is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Policies validate their inputs with the
//! [`ensure!`](crate::ensure) macro, which early-returns the given variant.

use crate::{Amount, Integer, Rate};
use thiserror::Error;

/// The top-level error type used by every tvm crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A calculator handle could not be allocated.
    #[error("failed to allocate calculator handle")]
    AllocationFailure,

    /// A boundary argument was null or empty.
    #[error("Invalid arguments: {0}")]
    Precondition(String),

    /// The discount rate makes the discount factor zero or negative.
    #[error("discount rate must be greater than -1, got {rate}")]
    InvalidRate {
        /// The rejected rate.
        rate: Rate,
    },

    /// An input sequence that must hold at least one element was empty.
    #[error("cash flows must not be empty")]
    EmptyInput,

    /// A negative principal was supplied.
    #[error("principal must be non-negative, got {principal}")]
    InvalidPrincipal {
        /// The rejected principal.
        principal: Amount,
    },

    /// A period count outside the range accepted by the formula.
    #[error("{requirement}, got {periods}")]
    InvalidPeriods {
        /// The rejected period count.
        periods: Integer,
        /// Which bound was violated.
        requirement: &'static str,
    },

    /// Any failure not anticipated by the taxonomy above.
    #[error("Unknown error occurred{}", detail_suffix(.0))]
    Unknown(Option<String>),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => String::new(),
    }
}

/// Shorthand `Result` type used throughout the tvm crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use tvm_core::{ensure, errors::{Error, Result}};
/// fn non_negative(principal: f64) -> Result<f64> {
///     ensure!(principal >= 0.0, Error::InvalidPrincipal { principal });
///     Ok(principal)
/// }
/// assert!(non_negative(1.0).is_ok());
/// assert_eq!(
///     non_negative(-1.0),
///     Err(Error::InvalidPrincipal { principal: -1.0 })
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
