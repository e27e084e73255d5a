//! Forward-mode automatic differentiation via dual numbers.
//!
//! A [`Dual`] carries a primal value together with the derivative of that
//! value with respect to one chosen input. Arithmetic and the
//! transcendental operations used by the density core propagate the
//! derivative with the standard differentiation rules, so a density written
//! once over [`Scalar`](crate::scalar::Scalar) yields gradients for free.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A dual number for forward-mode AD.
///
/// `val` holds the primal value, `dot` holds the derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value.
    pub val: f64,
    /// Tangent (derivative) value.
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0).
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Self {
        Self { val: self.val.ln(), dot: self.dot / self.val }
    }

    /// `ln(1 + x)`, accurate near zero: d/dx ln(1+x) = 1/(1+x).
    #[inline]
    pub fn ln_1p(self) -> Self {
        Self { val: self.val.ln_1p(), dot: self.dot / (1.0 + self.val) }
    }

    /// Two-argument arctangent of `self` (y) and `other` (x).
    ///
    /// d atan2(y, x) = (x·dy − y·dx) / (x² + y²).
    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        let denom = self.val * self.val + other.val * other.val;
        Self {
            val: self.val.atan2(other.val),
            dot: (other.val * self.dot - self.val * other.dot) / denom,
        }
    }
}

// --- Arithmetic: Dual op Dual ---

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

// --- From ---

impl From<f64> for Dual {
    fn from(val: f64) -> Self {
        Self::constant(val)
    }
}

// --- PartialOrd ---

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}
