//! Reciprocal and division
//!
//! Provides `1/b` and `a/b` in two flavours that share one contract: the
//! result is rounded to nearest, and a zero divisor yields [`Q16::MAX`]
//! rather than a fault.
//!
//! # Functions
//!
//! - `recip`: division-free reciprocal, three Newton-Raphson rounds
//! - `div`: 64-bit hardware division with rounding
//! - `div_free`: `a * recip(|b|)`, sign folded back in
//! - `divide`: dispatch on a [`Division`] strategy
//!
//! # Error Bounds
//!
//! - `div`: nearest ulp for positive quotients, within one ulp otherwise
//! - `recip` / `div_free`: ~1.5e-5 relative (one or two ulps near 1.0)

use crate::config::Division;
use crate::fixed::{mul, mul_wide, saturate, Q16, FRAC_BITS};

/// Number of Newton-Raphson rounds in [`recip`].
///
/// The seed `2 - b` has relative error at most `(1 - b)^2 <= 1/4` on
/// `[0.5, 1.0)`, and every round squares it: `2^-2 -> 2^-4 -> 2^-8 -> 2^-16`.
pub const RECIP_ITERATIONS: u32 = 3;

/// Division-free reciprocal `1 / b`.
///
/// Returns [`Q16::MAX`] for `b <= 0`, and saturates to [`Q16::MAX`] when
/// `1 / b` exceeds the representable range (`b` below ~2^-15).
///
/// # Algorithm
///
/// 1. Normalize `b = b_norm * 2^shift` with `b_norm` in `[0.5, 1.0)`
/// 2. Seed `x = 2 - b_norm`
/// 3. Run `x = x * (2 - b_norm * x)` [`RECIP_ITERATIONS`] times using [`mul`]
/// 4. Undo the normalization: `1 / b = x * 2^-shift`
///
/// # Example
///
/// ```rust
/// use q16_math::math::recip;
/// use q16_math::Q16;
///
/// let third = recip(Q16::from_int(3));
/// assert!((third.to_f64() - 1.0 / 3.0).abs() < 1e-4);
/// assert_eq!(recip(Q16::ZERO), Q16::MAX);
/// ```
pub fn recip(b: Q16) -> Q16 {
    let bits = b.to_bits();
    if bits <= 0 {
        return Q16::MAX;
    }

    // bit 15 is the leading bit of a value in [0.5, 1.0)
    let shift = (FRAC_BITS as i32) - bits.leading_zeros() as i32;
    let b_norm = if shift >= 0 {
        Q16::from_bits(bits >> shift)
    } else {
        Q16::from_bits(bits << -shift)
    };

    let mut x = Q16::TWO - b_norm;
    for _ in 0..RECIP_ITERATIONS {
        x = mul(x, Q16::TWO - mul(b_norm, x));
    }

    let x = x.to_bits() as i64;
    match shift {
        0 => Q16::from_bits(x as i32),
        s if s > 0 => Q16::from_bits(((x + (1 << (s - 1))) >> s) as i32),
        s => saturate(x << -s),
    }
}

/// Hardware division `a / b`, rounded.
///
/// Computes `((a << 16) + b / 2) / b` on a 64-bit dividend. The half-divisor
/// bias rounds positive quotients to nearest. Returns [`Q16::MAX`] for
/// `b == 0` and saturates quotients outside the Q16.16 range.
///
/// # Example
///
/// ```rust
/// use q16_math::math::div;
/// use q16_math::Q16;
///
/// assert_eq!(div(Q16::from_int(6), Q16::from_int(2)), Q16::from_int(3));
/// assert_eq!(div(Q16::ONE, Q16::from_int(3)).to_bits(), 21845);
/// ```
pub fn div(a: Q16, b: Q16) -> Q16 {
    let divisor = b.to_bits() as i64;
    if divisor == 0 {
        return Q16::MAX;
    }
    let dividend = ((a.to_bits() as i64) << FRAC_BITS) + (divisor >> 1);
    saturate(dividend / divisor)
}

/// Division-free `a / b` through [`recip`].
///
/// Same contract as [`div`]: [`Q16::MAX`] for `b == 0`, saturating otherwise.
/// Negative divisors are handled by taking the reciprocal of `|b|` and
/// negating the product.
pub fn div_free(a: Q16, b: Q16) -> Q16 {
    if b == Q16::ZERO {
        return Q16::MAX;
    }
    let inverse = recip(b.saturating_abs());
    let quotient = mul_wide(a, inverse);
    if b.to_bits() < 0 {
        saturate(-quotient)
    } else {
        saturate(quotient)
    }
}

/// Divide with the given strategy.
#[inline]
pub fn divide(a: Q16, b: Q16, division: Division) -> Q16 {
    match division {
        Division::Hardware => div(a, b),
        Division::Free => div_free(a, b),
    }
}
