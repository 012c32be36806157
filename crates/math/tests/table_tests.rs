//! Lookup table tests
//!
//! Every stored entry must be the correctly rounded Q16.16 value of its
//! defining expression.

use q16_math::table::{
    EXP_FRAC_BITS_USED, EXP_FRAC_TABLE, EXP_FRAC_TABLE_SIZE, INV_EXP_TABLE, INV_EXP_TABLE_SIZE,
};
use q16_math::Q16;

fn rounded(value: f64) -> Q16 {
    Q16::from_bits(libm::round(value * 65536.0) as i32)
}

#[test]
fn test_exp_frac_table_matches_libm() {
    assert_eq!(EXP_FRAC_TABLE_SIZE as u32, EXP_FRAC_BITS_USED + 1);
    for i in 1..EXP_FRAC_TABLE_SIZE {
        let expected = rounded(libm::exp(libm::ldexp(1.0, -(i as i32))));
        assert_eq!(
            EXP_FRAC_TABLE[i], expected,
            "EXP_FRAC_TABLE[{}] should be e^(2^-{})",
            i, i
        );
    }
}

#[test]
fn test_inv_exp_table_matches_libm() {
    for i in 0..INV_EXP_TABLE_SIZE {
        let expected = rounded(libm::exp(-(i as f64) / 8.0));
        assert_eq!(
            INV_EXP_TABLE[i], expected,
            "INV_EXP_TABLE[{}] should be e^(-{}/8)",
            i, i
        );
    }
}

#[test]
fn test_tables_agree_at_half() {
    // e^(-1/2) * e^(1/2) = 1
    let product = q16_math::mul(INV_EXP_TABLE[4], EXP_FRAC_TABLE[1]);
    assert!((product.to_bits() - Q16::ONE.to_bits()).abs() <= 1);
}
