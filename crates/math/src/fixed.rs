//! Q16.16 fixed-point value and the rounding multiply primitive
//!
//! A [`Q16`] is a signed 32-bit integer interpreted as `raw / 65536`, covering
//! `[-32768.0, 32767.99998]` with a resolution of `2^-16` (~1.5e-5).
//!
//! Everything above this module is built from [`mul`], shifts, adds and
//! compares, so the kernels run on cores without an FPU or divide unit.
//!
//! # Example
//!
//! ```rust
//! use q16_math::fixed::{mul, Q16};
//!
//! let half = Q16::from_bits(0x8000);
//! let three = Q16::from_int(3);
//! assert_eq!(mul(half, three), Q16::from_f32(1.5));
//! assert_eq!(format!("{:#010X}", three), "0x00030000");
//! ```

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use crate::error::ConversionError;

/// Number of fractional bits in the encoding.
pub const FRAC_BITS: u32 = 16;

const SCALE_F32: f32 = (1u32 << FRAC_BITS) as f32;
const SCALE_F64: f64 = (1u32 << FRAC_BITS) as f64;

/// Half a unit in the last place of a 16-bit fraction, added before the
/// truncating shift so products round to nearest.
const ROUND_HALF: i64 = 1 << (FRAC_BITS - 1);

/// Signed Q16.16 fixed-point number.
///
/// The raw encoding is always reachable through [`Q16::from_bits`] and
/// [`Q16::to_bits`]; arithmetic operators wrap on overflow like the
/// underlying two's-complement integer instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Q16(i32);

impl Q16 {
    /// 0.0
    pub const ZERO: Self = Self(0);

    /// Exactly 1.0 (`1 << 16`).
    pub const ONE: Self = Self(1 << FRAC_BITS);

    /// 2.0, the upper bound of the logarithm mantissa range.
    pub const TWO: Self = Self(2 << FRAC_BITS);

    /// Largest representable value, also the reciprocal/division sentinel.
    pub const MAX: Self = Self(i32::MAX);

    /// Most negative representable value, also the logarithm sentinel.
    pub const MIN: Self = Self(i32::MIN);

    /// Smallest positive step (`2^-16`).
    pub const EPSILON: Self = Self(1);

    /// e ≈ 2.71828
    pub const E: Self = Self(178_145);

    /// ln(2) ≈ 0.693147
    pub const LN_2: Self = Self(45_426);

    /// ln(10) ≈ 2.302585
    pub const LN_10: Self = Self(150_902);

    /// 1 / ln(2) ≈ 1.442695, scales a natural log to base 2.
    pub const INV_LN_2: Self = Self(94_548);

    /// 1 / ln(10) ≈ 0.434294, scales a natural log to base 10.
    pub const INV_LN_10: Self = Self(28_462);

    /// Wrap a raw Q16.16 encoding.
    #[inline(always)]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Raw Q16.16 encoding.
    #[inline(always)]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Exact conversion from a whole number.
    ///
    /// Every `i16` is representable, so this never loses information.
    #[inline]
    pub const fn from_int(value: i16) -> Self {
        Self((value as i32) << FRAC_BITS)
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub const fn int_part(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Fractional bits as an unsigned 16-bit field.
    #[inline]
    pub const fn frac_bits(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Convert from `f32` with round-to-nearest.
    ///
    /// Values outside the representable range saturate to [`Q16::MIN`] or
    /// [`Q16::MAX`]; NaN maps to zero.
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }

    /// Convert from `f64` with round-to-nearest (ties away from zero).
    ///
    /// Saturates like [`Q16::from_f32`].
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        let scaled = value * SCALE_F64;
        if scaled >= i32::MAX as f64 {
            Self::MAX
        } else if scaled <= i32::MIN as f64 {
            Self::MIN
        } else {
            Self(round_half_away(scaled) as i32)
        }
    }

    /// Represented value as `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / SCALE_F32
    }

    /// Represented value as `f64` (exact).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE_F64
    }

    /// Absolute value, saturating at [`Q16::MAX`] for [`Q16::MIN`].
    #[inline]
    pub const fn saturating_abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// `true` for values strictly greater than zero.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

/// Ties-away-from-zero rounding with truncating casts (`f64::round` needs std).
#[inline]
fn round_half_away(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        (x - 0.5) as i64
    }
}

/// Multiply two Q16.16 values, rounding to nearest at the 16th fractional bit.
///
/// Both operands are widened to a 64-bit product, `2^15` is added, and the sum
/// is arithmetically shifted right by 16 before narrowing back to 32 bits.
/// A product of two 32-bit operands always fits in 64 bits; the final
/// narrowing wraps when the true result leaves the Q16.16 range, so callers
/// keep operand magnitudes within what their result can hold.
///
/// Rounding (rather than truncating) bounds the drift across the 16-20
/// chained multiplications a single logarithm performs.
#[inline(always)]
pub const fn mul(a: Q16, b: Q16) -> Q16 {
    Q16(mul_wide(a, b) as i32)
}

/// Rounded product of [`mul`] before narrowing to 32 bits.
#[inline(always)]
pub(crate) const fn mul_wide(a: Q16, b: Q16) -> i64 {
    ((a.0 as i64) * (b.0 as i64) + ROUND_HALF) >> FRAC_BITS
}

/// Narrow a 64-bit raw value, clamping to [`Q16::MIN`]..=[`Q16::MAX`].
#[inline]
pub(crate) const fn saturate(raw: i64) -> Q16 {
    if raw > i32::MAX as i64 {
        Q16::MAX
    } else if raw < i32::MIN as i64 {
        Q16::MIN
    } else {
        Q16(raw as i32)
    }
}

impl Add for Q16 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Q16 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Q16 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Mul for Q16 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        mul(self, rhs)
    }
}

impl From<i16> for Q16 {
    fn from(value: i16) -> Self {
        Self::from_int(value)
    }
}

impl TryFrom<f64> for Q16 {
    type Error = ConversionError;

    /// Strict conversion: rejects NaN, infinities and out-of-range values
    /// instead of saturating.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ConversionError::NotFinite);
        }
        let scaled = value * SCALE_F64;
        if scaled > i32::MAX as f64 + 0.5 || scaled < i32::MIN as f64 - 0.5 {
            return Err(ConversionError::OutOfRange(value));
        }
        Ok(Self::from_f64(value))
    }
}

impl TryFrom<f32> for Q16 {
    type Error = ConversionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(value as f64)
    }
}

impl FromStr for Q16 {
    type Err = ConversionError;

    /// Parse a decimal literal such as `"2.71828"` or `"-5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(ConversionError::Parse)?;
        Self::try_from(value)
    }
}

impl fmt::Display for Q16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // width and alignment are honoured only with an explicit precision
        match f.precision() {
            Some(_) => fmt::Display::fmt(&self.to_f64(), f),
            None => write!(f, "{:.6}", self.to_f64()),
        }
    }
}

impl fmt::LowerHex for Q16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&(self.0 as u32), f)
    }
}

impl fmt::UpperHex for Q16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&(self.0 as u32), f)
    }
}
