//! Promotion rules for mixed plain/derivative-carrying arguments.
//!
//! A density call takes three arguments, each independently `f64` or
//! [`Dual`]. The rules here resolve, at the type level, the single
//! [`Scalar`] able to hold arithmetic combining all three: `f64` only when
//! every argument is plain, [`Dual`] as soon as any argument carries a
//! derivative. Resolution costs nothing at runtime and call sites need no
//! annotations:
//!
//! ```
//! use lz_ad::dual::Dual;
//! use lz_ad::promote::IntoScalar;
//!
//! // A plain constant lifted next to a Dual gains a zero derivative.
//! let sigma: Dual = 2.0_f64.into_scalar();
//! assert_eq!(sigma.dot, 0.0);
//! ```

use crate::dual::Dual;
use crate::scalar::Scalar;

/// Pairwise promotion rule between scalar representations.
pub trait Promote<Rhs = Self> {
    /// Common type able to hold arithmetic combining `Self` and `Rhs`.
    type Output: Scalar;
}

impl Promote<f64> for f64 {
    type Output = f64;
}

impl Promote<Dual> for f64 {
    type Output = Dual;
}

impl Promote<f64> for Dual {
    type Output = Dual;
}

impl Promote<Dual> for Dual {
    type Output = Dual;
}

/// Promotion across a full `(variate, location, scale)` argument triple.
///
/// Blanket-implemented by folding the pairwise [`Promote`] rule.
pub trait Promote3<B, C> {
    /// Result type of combining all three arguments.
    type Output: Scalar;
}

impl<A, B, C, AB> Promote3<B, C> for A
where
    A: Promote<B, Output = AB>,
    AB: Promote<C>,
{
    type Output = <AB as Promote<C>>::Output;
}

/// Scalar type resolved for an argument triple.
pub type Promoted<A, B, C> = <A as Promote3<B, C>>::Output;

/// Lift one argument into the resolved scalar type.
pub trait IntoScalar<S: Scalar> {
    /// Convert `self` into `S`, attaching a zero derivative when `S`
    /// carries one and `self` does not.
    fn into_scalar(self) -> S;
}

impl<S: Scalar> IntoScalar<S> for S {
    #[inline]
    fn into_scalar(self) -> S {
        self
    }
}

impl IntoScalar<Dual> for f64 {
    #[inline]
    fn into_scalar(self) -> Dual {
        Dual::constant(self)
    }
}
