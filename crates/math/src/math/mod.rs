//! Transcendental kernels over Q16.16
//!
//! Every kernel is built from [`mul`](crate::fixed::mul), shifts, adds and
//! compares. Division only appears in [`inverse::div`], and only runs when a
//! configuration asks for [`Division::Hardware`](crate::Division::Hardware).
//!
//! # Modules
//!
//! - `exp`: `e^x`, non-negative and signed
//! - `log`: natural, base-2 and base-10 logarithms
//! - `inverse`: reciprocal and division, hardware or division-free
//!
//! # Example
//!
//! ```rust
//! use q16_math::math::{exp_signed, log_with, recip};
//! use q16_math::{KernelConfig, Q16};
//!
//! let y = Q16::from_f64(7.5);
//! let back = exp_signed(log_with(y, KernelConfig::MINIMAL));
//! assert!((back.to_f64() - 7.5).abs() / 7.5 < 0.005);
//!
//! let quarter = recip(Q16::from_int(4));
//! assert_eq!(quarter, Q16::from_f64(0.25));
//! ```

pub mod exp;
pub mod inverse;
pub mod log;

pub use self::exp::{exp, exp_signed, exp_signed_with, EXP_INPUT_MAX};
pub use self::inverse::{div, div_free, divide, recip, RECIP_ITERATIONS};
pub use self::log::{
    log10_with, log2_with, log_with, PLAIN_BISECTION_STEPS, SEEDED_BISECTION_STEPS,
};
