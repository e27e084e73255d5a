//! Configuration types for Lorentz
//!
//! Plain data selected by the caller once per call (or carried in an
//! engine's run configuration): how validation failures surface, and which
//! additive terms of the log-density are computed.

use serde::{Deserialize, Serialize};

/// What happens when argument validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Return a descriptive error identifying the function and parameter.
    Raise,
    /// Suppress the error and yield the NaN sentinel instead.
    Sentinel,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Raise
    }
}

/// Which additive terms of the log-density are included.
///
/// Terms that depend only on fixed (non-estimated) arguments shift the
/// log-density by a constant and may be dropped when only relative density
/// matters. Dropping them never changes downstream relative comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalization {
    /// Include the distribution-wide constant term (`-ln π` for Cauchy).
    pub include_constant: bool,
    /// Include the term depending only on the scale (`-ln σ`).
    pub include_scale_term: bool,
    /// Include the shape term depending on all three arguments.
    pub include_shape_term: bool,
}

impl Normalization {
    /// All terms included: the result is a true log-density.
    pub fn full() -> Self {
        Self { include_constant: true, include_scale_term: true, include_shape_term: true }
    }

    /// Terms for density up to an additive constant, given which arguments
    /// vary during estimation.
    ///
    /// The distribution-wide constant never depends on an argument and is
    /// always dropped; a remaining term is kept iff some argument it
    /// depends on varies.
    pub fn for_varying(variate: bool, location: bool, scale: bool) -> Self {
        Self {
            include_constant: false,
            include_scale_term: scale,
            include_shape_term: variate || location || scale,
        }
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::full()
    }
}
