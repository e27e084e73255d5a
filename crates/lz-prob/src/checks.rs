//! Argument checks shared by the density and CDF evaluators.
//!
//! Each check inspects the primal value of its argument and reports a
//! typed error naming the rejecting function and the parameter, instead of
//! panicking at the call site. Evaluators run [`validate`] and map any
//! failure through the caller's [`Policy`] with [`apply_policy`].

use lz_ad::scalar::Scalar;
use lz_core::{Error, Policy, Result};

/// Fail if `value` is NaN.
pub fn check_not_nan<S: Scalar>(function: &'static str, value: S, name: &'static str) -> Result<()> {
    if value.is_nan() {
        return Err(Error::NotANumber { function, name });
    }
    Ok(())
}

/// Fail if `value` is NaN or ±infinity.
pub fn check_finite<S: Scalar>(function: &'static str, value: S, name: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFinite { function, name, value: value.value() });
    }
    Ok(())
}

/// Fail if `value` is zero or negative.
///
/// Sequence a finiteness check first where one is required; NaN compares
/// false here and would slip through on its own.
pub fn check_positive<S: Scalar>(function: &'static str, value: S, name: &'static str) -> Result<()> {
    if value.value() <= 0.0 {
        return Err(Error::NonPositive { function, name, value: value.value() });
    }
    Ok(())
}

/// The fixed check sequence both evaluators run: variate not-NaN, location
/// finite, scale finite, scale strictly positive.
///
/// The variate is deliberately checked only for NaN: ±infinity is a valid
/// point on the distribution's support and evaluates to a zero density /
/// boundary CDF rather than an error.
pub fn validate<S: Scalar>(function: &'static str, y: S, mu: S, sigma: S) -> Result<()> {
    check_not_nan(function, y, "random variate")?;
    check_finite(function, mu, "location parameter")?;
    check_finite(function, sigma, "scale parameter")?;
    check_positive(function, sigma, "scale parameter")?;
    Ok(())
}

/// Resolve a failed check through the caller's policy: surface the error,
/// or swap in the NaN sentinel and continue.
pub fn apply_policy<S: Scalar>(policy: Policy, err: Error) -> Result<S> {
    match policy {
        Policy::Raise => Err(err),
        Policy::Sentinel => Ok(S::from_f64(f64::NAN)),
    }
}
