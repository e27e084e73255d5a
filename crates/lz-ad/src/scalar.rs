//! [`Scalar`] trait: abstraction over `f64` and [`Dual`](crate::dual::Dual)
//! that enables writing density/CDF code once, then reusing it for both
//! evaluation **and** forward-mode gradient computation.

use crate::dual::Dual;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar type suitable for density computation.
///
/// Implemented for `f64` (plain evaluation) and [`Dual`] (forward-mode AD).
/// Validation inspects the primal value only, via [`value`](Scalar::value).
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialOrd
    + Sized
{
    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Extract the primal (function) value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// `ln(1 + x)`, accurate near zero.
    fn ln_1p(self) -> Self;

    /// Two-argument arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;

    /// Whether the primal value is NaN.
    #[inline]
    fn is_nan(&self) -> bool {
        self.value().is_nan()
    }

    /// Whether the primal value is neither NaN nor infinite.
    #[inline]
    fn is_finite(&self) -> bool {
        self.value().is_finite()
    }
}

// --- f64 implementation ---

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        f64::ln_1p(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        Dual::ln_1p(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        Dual::atan2(self, other)
    }
}
