#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! q16-math: transcendental functions over Q16.16 fixed point
//!
//! Natural exponential and natural, base-2 and base-10 logarithms for targets
//! without an FPU or a divide instruction. Every kernel is a pure function of
//! its input built from one rounding multiply, shifts, adds and compares.
//!
//! # Sentinels
//!
//! The kernels never fail. Domain errors are reported in-band:
//!
//! | Function | Input | Returns |
//! |----------|-------|---------|
//! | [`log`], [`log2`], [`log10`] | `y <= 0` | [`Q16::MIN`] |
//! | [`math::recip`] | `b <= 0` | [`Q16::MAX`] |
//! | [`math::div`], [`math::div_free`] | `b == 0` | [`Q16::MAX`] |
//! | [`exp`] | `x > EXP_INPUT_MAX` | [`Q16::MAX`] |
//! | [`exp_signed`] | `x <= -10` | `0` |
//!
//! # Configurations
//!
//! The crate-level functions use [`KernelConfig::DEFAULT`]. Build with the
//! `division-free` feature to make that [`KernelConfig::MINIMAL`], or bind any
//! configuration at runtime through [`Kernel`].

// Q16.16 value and the rounding multiply
pub mod fixed;

// Conversion errors
pub mod error;

// Kernel configuration and the configured handle
pub mod config;
pub mod kernel;

// Exponential, logarithm and inverse kernels
pub mod math;

// Exponential lookup tables
pub mod table;

pub use config::{Division, KernelConfig, NegExpLookup, Refinement};
pub use error::ConversionError;
pub use fixed::{mul, Q16};
pub use kernel::Kernel;
pub use math::EXP_INPUT_MAX;

/// `e^x` for `x >= 0`.
///
/// Negative input is a logic error (checked in debug builds); input above
/// [`EXP_INPUT_MAX`] returns [`Q16::MAX`].
#[inline]
pub fn exp(x: Q16) -> Q16 {
    math::exp(x)
}

/// `e^x` for any `x`; exactly zero for `x <= -10`.
#[inline]
pub fn exp_signed(x: Q16) -> Q16 {
    math::exp_signed_with(x, KernelConfig::DEFAULT.neg_exp)
}

/// Natural logarithm; [`Q16::MIN`] for `y <= 0`.
///
/// # Example
///
/// ```rust
/// use q16_math::{log, Q16};
///
/// let ln = log(Q16::from_f64(2.71828)).to_f64();
/// assert!((ln - 1.0).abs() < 0.002);
/// assert_eq!(log(Q16::ONE), Q16::ZERO);
/// assert_eq!(log(Q16::ZERO), Q16::MIN);
/// ```
#[inline]
pub fn log(y: Q16) -> Q16 {
    math::log_with(y, KernelConfig::DEFAULT)
}

/// Base-2 logarithm; [`Q16::MIN`] for `y <= 0`.
#[inline]
pub fn log2(y: Q16) -> Q16 {
    math::log2_with(y, KernelConfig::DEFAULT)
}

/// Base-10 logarithm; [`Q16::MIN`] for `y <= 0`.
///
/// ```rust
/// use q16_math::{log10, Q16};
///
/// let two = log10(Q16::from_int(100)).to_f64();
/// assert!((two - 2.0).abs() < 0.01);
/// ```
#[inline]
pub fn log10(y: Q16) -> Q16 {
    math::log10_with(y, KernelConfig::DEFAULT)
}
