//! Test utilities for q16-math
//!
//! Reference implementations, proptest strategies and error helpers shared by
//! the integration suites.

#![allow(dead_code)]

use proptest::prelude::*;
use q16_math::{KernelConfig, Q16, EXP_INPUT_MAX};

/// Absolute tolerance for `ln` on any positive input (about 32 ulps, the
/// resolution of the exponential oracle).
pub const LOG_ABS_TOLERANCE: f64 = 1e-3;

/// Relative tolerance for `exp` on `[0, EXP_INPUT_MAX]`.
pub const EXP_REL_TOLERANCE: f64 = 6e-4;

/// Absolute tolerance for interpolated `exp_signed` on `(-10, 0)`.
pub const NEG_EXP_ABS_TOLERANCE: f64 = 2e-3;

/// Every preset, with the name used in assertion messages.
pub const PRESETS: [(&str, KernelConfig); 3] = [
    ("standard", KernelConfig::STANDARD),
    ("division-free", KernelConfig::DIVISION_FREE),
    ("minimal", KernelConfig::MINIMAL),
];

/// Harness inputs shared with `q16 report`.
pub const LOG_VECTORS: [f64; 15] = [
    0.1, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.718, 3.0, 5.0, 7.5, 10.0, 20.0, 50.0, 100.0,
];

// ============================================================================
// Reference Implementations using libm
// ============================================================================

/// Reference natural exponential of a fixed-point input
#[inline]
pub fn ref_exp(x: Q16) -> f64 {
    libm::exp(x.to_f64())
}

/// Reference natural logarithm of a fixed-point input
#[inline]
pub fn ref_log(y: Q16) -> f64 {
    libm::log(y.to_f64())
}

/// Reference base-2 logarithm of a fixed-point input
#[inline]
pub fn ref_log2(y: Q16) -> f64 {
    libm::log2(y.to_f64())
}

/// Reference base-10 logarithm of a fixed-point input
#[inline]
pub fn ref_log10(y: Q16) -> f64 {
    libm::log10(y.to_f64())
}

// ============================================================================
// Error Helpers
// ============================================================================

/// `|actual - expected|`
pub fn abs_error(actual: Q16, expected: f64) -> f64 {
    (actual.to_f64() - expected).abs()
}

/// `|actual - expected| / |expected|`
pub fn rel_error(actual: Q16, expected: f64) -> f64 {
    abs_error(actual, expected) / expected.abs()
}

/// Distance between two values in raw steps
pub fn ulps(a: Q16, b: Q16) -> i64 {
    (a.to_bits() as i64 - b.to_bits() as i64).abs()
}

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Any strictly positive Q16.16 value
pub fn positive_q16() -> impl Strategy<Value = Q16> {
    (1..=i32::MAX).prop_map(Q16::from_bits)
}

/// Any Q16.16 value at or below zero
pub fn non_positive_q16() -> impl Strategy<Value = Q16> {
    (i32::MIN..=0).prop_map(Q16::from_bits)
}

/// Inputs of the round-trip property, `[0.1, 100.0]`
pub fn log_domain() -> impl Strategy<Value = Q16> {
    (6_554..=6_553_600i32).prop_map(Q16::from_bits)
}

/// Valid `exp` inputs, `[0, EXP_INPUT_MAX]`
pub fn exp_domain() -> impl Strategy<Value = Q16> {
    (0..=EXP_INPUT_MAX.to_bits()).prop_map(Q16::from_bits)
}

/// Negative exponents covered by the table, `(-10, 0)`
pub fn neg_exp_domain() -> impl Strategy<Value = Q16> {
    (-655_359..0i32).prop_map(Q16::from_bits)
}

/// Any preset
pub fn preset() -> impl Strategy<Value = (&'static str, KernelConfig)> {
    prop::sample::select(PRESETS.to_vec())
}
