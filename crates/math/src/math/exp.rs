//! Fixed-point exponential
//!
//! Two entry points share the same tables:
//!
//! - `exp`: `e^x` for `x >= 0` by bit-serial reconstruction
//! - `exp_signed`: any sign; negative input goes through the 81-entry
//!   `e^-x` table instead of a reciprocal
//!
//! # Error Bounds
//!
//! - `exp`: <0.06% relative error on `[0, EXP_INPUT_MAX]`. Fraction bits
//!   below `2^-11` are ignored, which dominates the error.
//! - `exp_signed`, interpolated: <0.002 absolute error on `(-10, 0)`
//! - `exp_signed`, nearest entry: <0.12 absolute error on `(-10, 0)`
//!
//! # Example
//!
//! ```rust
//! use q16_math::math::{exp, exp_signed};
//! use q16_math::Q16;
//!
//! assert_eq!(exp(Q16::ONE), Q16::E);
//! let decay = exp_signed(Q16::from_int(-5)).to_f64();
//! assert!((decay - 0.006738).abs() / 0.006738 < 0.01);
//! ```

use crate::config::NegExpLookup;
use crate::fixed::{mul, Q16, FRAC_BITS};
use crate::table::{
    EXP_FRAC_BITS_USED, EXP_FRAC_TABLE, INV_EXP_INDEX_SHIFT, INV_EXP_LIMIT, INV_EXP_STEP_MASK,
    INV_EXP_TABLE, INV_EXP_TABLE_SIZE,
};

/// Largest input for which [`exp`] stays representable (~10.3974).
///
/// Anything above saturates to [`Q16::MAX`], which also caps the integer-power
/// loop at 10 multiplications.
pub const EXP_INPUT_MAX: Q16 = Q16::from_bits(681_407);

/// `e^x` for non-negative `x`.
///
/// # Algorithm
///
/// 1. Multiply `ONE` by `e` once per whole unit of `x`
/// 2. For each set fraction bit `2^-i` (`i = 1..=11`, most significant first)
///    multiply by the table factor `e^(2^-i)`
///
/// The product of the per-bit factors reconstructs `e^fraction` exactly up to
/// table rounding; at most 10 + 11 multiplications run.
///
/// # Preconditions
///
/// `x >= 0`. Negative input is a logic error (checked in debug builds); use
/// [`exp_signed`] for arbitrary signs. Input above [`EXP_INPUT_MAX`] returns
/// [`Q16::MAX`].
pub fn exp(x: Q16) -> Q16 {
    debug_assert!(x >= Q16::ZERO, "exp requires a non-negative input, got {}", x);
    if x > EXP_INPUT_MAX {
        return Q16::MAX;
    }

    let mut result = Q16::ONE;
    for _ in 0..x.int_part() {
        result = mul(result, Q16::E);
    }

    let frac = x.frac_bits();
    for i in 1..=EXP_FRAC_BITS_USED {
        if frac & (1 << (FRAC_BITS - i)) != 0 {
            result = mul(result, EXP_FRAC_TABLE[i as usize]);
        }
    }
    result
}

/// `e^x` for any `x`, interpolating the negative-exponent table.
///
/// Equivalent to [`exp_signed_with`] with [`NegExpLookup::Interpolated`].
#[inline]
pub fn exp_signed(x: Q16) -> Q16 {
    exp_signed_with(x, NegExpLookup::Interpolated)
}

/// `e^x` for any `x` with an explicit negative-exponent strategy.
///
/// - `x >= 0`: delegates to [`exp`]
/// - `-10 < x < 0`: `INV_EXP_TABLE[|x| >> 13]`, plus the linear step toward
///   the next entry when `lookup` is [`NegExpLookup::Interpolated`]
/// - `x <= -10`: exactly zero. `e^-10 ≈ 4.5e-5` is within three ulps of the
///   resolution floor, so this is underflow, not an error.
pub fn exp_signed_with(x: Q16, lookup: NegExpLookup) -> Q16 {
    if x >= Q16::ZERO {
        return exp(x);
    }
    if x <= -INV_EXP_LIMIT {
        return Q16::ZERO;
    }

    let magnitude = (-x).to_bits();
    let index = ((magnitude >> INV_EXP_INDEX_SHIFT) as usize).min(INV_EXP_TABLE_SIZE - 2);
    let y0 = INV_EXP_TABLE[index];

    match lookup {
        NegExpLookup::Nearest => y0,
        NegExpLookup::Interpolated => {
            let y1 = INV_EXP_TABLE[index + 1];
            // position inside the 0.125 step, rescaled to [0, 1)
            let weight = Q16::from_bits(
                (magnitude & INV_EXP_STEP_MASK) << (FRAC_BITS - INV_EXP_INDEX_SHIFT),
            );
            y0 + mul(y1 - y0, weight)
        }
    }
}
