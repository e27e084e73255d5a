//! # lz-ad
//!
//! Automatic differentiation (AD) primitives for Lorentz.
//!
//! Provides:
//! - **Forward-mode AD** via [`dual::Dual`] numbers (efficient for few parameters)
//! - [`scalar::Scalar`] trait for writing density code once, then reusing it
//!   for both evaluation **and** forward-mode gradient computation
//! - [`promote`] rules resolving the result type when plain and
//!   derivative-carrying arguments are mixed in one call

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dual;
pub mod promote;
pub mod scalar;
