//! Lookup tables for the exponential kernel
//!
//! Both tables are literal `static` arrays, correctly rounded to nearest in
//! Q16.16 (the same rounding rule as [`mul`](crate::fixed::mul)). They are
//! generated offline; `q16 tables` prints them from `f64` so any edit can be
//! checked, and `tests/table_tests.rs` compares every entry against `libm`.
//!
//! - [`EXP_FRAC_TABLE`]: `e^(2^-i)` for `i = 1..=11`, one factor per
//!   fractional bit of a non-negative exponent. Entry 0 is unused.
//! - [`INV_EXP_TABLE`]: `e^(-i / 8)` for `i = 0..=80`, i.e. `e^-x` sampled on
//!   `[0, 10]` every 0.125.

use crate::fixed::Q16;

/// Number of entries in [`EXP_FRAC_TABLE`].
pub const EXP_FRAC_TABLE_SIZE: usize = 12;

/// Highest fractional bit weight covered by [`EXP_FRAC_TABLE`] (`2^-11`).
pub const EXP_FRAC_BITS_USED: u32 = 11;

/// Number of entries in [`INV_EXP_TABLE`].
pub const INV_EXP_TABLE_SIZE: usize = 81;

/// Shift converting a Q16.16 magnitude to an [`INV_EXP_TABLE`] index
/// (step 0.125 = `2^-3`, so `16 - 3`).
pub const INV_EXP_INDEX_SHIFT: u32 = 13;

/// Mask selecting the position of a Q16.16 magnitude inside one table step.
pub const INV_EXP_STEP_MASK: i32 = (1 << INV_EXP_INDEX_SHIFT) - 1;

/// Magnitude at which [`INV_EXP_TABLE`] ends and negative exponents underflow
/// to zero (10.0).
pub const INV_EXP_LIMIT: Q16 = Q16::from_int(10);

/// `e^(2^-i)` in Q16.16; index 0 is a placeholder so bit `i` maps to entry `i`.
pub static EXP_FRAC_TABLE: [Q16; EXP_FRAC_TABLE_SIZE] = [
    Q16::from_bits(0),
    Q16::from_bits(108_051), // e^(1/2)
    Q16::from_bits(84_150),  // e^(1/4)
    Q16::from_bits(74_262),  // e^(1/8)
    Q16::from_bits(69_763),  // e^(1/16)
    Q16::from_bits(67_616),  // e^(1/32)
    Q16::from_bits(66_568),  // e^(1/64)
    Q16::from_bits(66_050),  // e^(1/128)
    Q16::from_bits(65_793),  // e^(1/256)
    Q16::from_bits(65_664),  // e^(1/512)
    Q16::from_bits(65_600),  // e^(1/1024)
    Q16::from_bits(65_568),  // e^(1/2048)
];

macro_rules! q16_table {
    ($($bits:expr),* $(,)?) => {
        [$(Q16::from_bits($bits)),*]
    };
}

/// `e^(-i / 8)` in Q16.16 for `i = 0..=80`.
#[rustfmt::skip]
pub static INV_EXP_TABLE: [Q16; INV_EXP_TABLE_SIZE] = q16_table![
    65536, 57835, 51039, 45042, 39750, 35079, 30957, 27319, 24109, 21276,
    18776, 16570, 14623, 12905, 11388, 10050,  8869,  7827,  6907,  6096,
     5380,  4747,  4190,  3697,  3263,  2879,  2541,  2243,  1979,  1746,
     1541,  1360,  1200,  1059,   935,   825,   728,   642,   567,   500,
      442,   390,   344,   303,   268,   236,   209,   184,   162,   143,
      127,   112,    99,    87,    77,    68,    60,    53,    47,    41,
       36,    32,    28,    25,    22,    19,    17,    15,    13,    12,
       10,     9,     8,     7,     6,     6,     5,     4,     4,     3,
        3,
];
