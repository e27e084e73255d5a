//! Error types for Lorentz
//!
//! Every validation failure names the function that rejected the argument
//! and the human-readable parameter description, so an embedding engine can
//! report the failure without reconstructing the call site.

use thiserror::Error;

/// Lorentz error type
#[derive(Error, Debug)]
pub enum Error {
    /// A value that must not be NaN is NaN
    #[error("{function}: {name} must not be NaN")]
    NotANumber {
        /// Function that rejected the argument
        function: &'static str,
        /// Parameter description, e.g. "random variate"
        name: &'static str,
    },

    /// A value that must be finite is NaN or infinite
    #[error("{function}: {name} must be finite, got {value}")]
    NonFinite {
        /// Function that rejected the argument
        function: &'static str,
        /// Parameter description
        name: &'static str,
        /// Offending primal value
        value: f64,
    },

    /// A value that must be strictly positive is zero or negative
    #[error("{function}: {name} must be > 0, got {value}")]
    NonPositive {
        /// Function that rejected the argument
        function: &'static str,
        /// Parameter description
        name: &'static str,
        /// Offending primal value
        value: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
