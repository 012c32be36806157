//! Property-based tests for q16-math
//!
//! Uses proptest to check accuracy, monotonicity and round-trip invariants of
//! the kernels under every configuration preset.

use proptest::prelude::*;
use q16_math::math::{exp_signed_with, log10_with, log2_with, log_with};
use q16_math::{exp, exp_signed, Kernel, KernelConfig, NegExpLookup, Q16, EXP_INPUT_MAX};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Property: |ln(y) - reference| stays below the oracle resolution for every
/// positive input
#[test]
fn test_log_absolute_error() {
    proptest!(proptest_config(), |(y in positive_q16(), (name, config) in preset())| {
        let got = log_with(y, config);
        let expected = ref_log(y);
        prop_assert!(
            abs_error(got, expected) < LOG_ABS_TOLERANCE,
            "{}: ln({}) = {} expected {}", name, y, got, expected
        );
    });
}

#[test]
fn test_log2_log10_track_reference() {
    proptest!(proptest_config(), |(y in positive_q16(), (name, config) in preset())| {
        let log2 = log2_with(y, config);
        let log10 = log10_with(y, config);
        prop_assert!(abs_error(log2, ref_log2(y)) < 2e-3, "{}: log2({}) = {}", name, y, log2);
        prop_assert!(abs_error(log10, ref_log10(y)) < 1e-3, "{}: log10({}) = {}", name, y, log10);
    });
}

#[test]
fn test_exp_relative_error() {
    proptest!(proptest_config(), |(x in exp_domain())| {
        let got = exp(x);
        let expected = ref_exp(x);
        prop_assert!(
            rel_error(got, expected) < EXP_REL_TOLERANCE,
            "exp({}) = {} expected {}", x, got, expected
        );
    });
}

#[test]
fn test_exp_signed_negative_absolute_error() {
    proptest!(proptest_config(), |(x in neg_exp_domain())| {
        let got = exp_signed(x);
        let expected = ref_exp(x);
        prop_assert!(
            abs_error(got, expected) < NEG_EXP_ABS_TOLERANCE,
            "exp_signed({}) = {} expected {}", x, got, expected
        );
    });
}

/// Property: exp(ln(y)) reproduces y within 0.5% on [0.1, 100]
#[test]
fn test_exp_of_log_round_trip() {
    proptest!(proptest_config(), |(y in log_domain(), (name, config) in preset())| {
        let back = exp_signed(log_with(y, config));
        let error = rel_error(back, y.to_f64());
        prop_assert!(error < 0.005, "{}: exp(ln({})) = {} ({:.4}%)", name, y, back, error * 100.0);
    });
}

/// Property: ln(exp(x)) reproduces x within 0.001 on [0, 10]
#[test]
fn test_log_of_exp_round_trip() {
    proptest!(proptest_config(), |(raw in 0..=655_360i32, (name, config) in preset())| {
        let x = Q16::from_bits(raw);
        let back = log_with(exp(x), config);
        prop_assert!(
            abs_error(back, x.to_f64()) < 1e-3,
            "{}: ln(exp({})) = {}", name, x, back
        );
    });
}

#[test]
fn test_exp_monotonic() {
    proptest!(proptest_config(), |(raw in 0..EXP_INPUT_MAX.to_bits(), gap in 64..4_096i32)| {
        let x = Q16::from_bits(raw);
        let next = Q16::from_bits(raw + 1);
        prop_assert!(exp(x) <= exp(next), "exp not monotonic at {}", x);

        let far = Q16::from_bits((raw + gap).min(EXP_INPUT_MAX.to_bits()));
        if far.to_bits() - raw >= 64 {
            prop_assert!(exp(x) < exp(far), "exp({}) >= exp({})", x, far);
        }
    });
}

#[test]
fn test_exp_signed_monotonic() {
    proptest!(proptest_config(), |(raw in -700_000..0i32)| {
        let x = Q16::from_bits(raw);
        let next = Q16::from_bits(raw + 1);
        for lookup in [NegExpLookup::Interpolated, NegExpLookup::Nearest] {
            prop_assert!(
                exp_signed_with(x, lookup) <= exp_signed_with(next, lookup),
                "{:?}: exp_signed not monotonic at {}", lookup, x
            );
        }
    });
}

/// Property: ln strictly increases across a 1% ratio gap
#[test]
fn test_log_strictly_increasing_across_one_percent() {
    proptest!(proptest_config(), |(raw in 1..2_126_008_810i32, (name, config) in preset())| {
        let y = Q16::from_bits(raw);
        let above = Q16::from_bits(raw + (raw / 100).max(1));
        prop_assert!(
            log_with(y, config) < log_with(above, config),
            "{}: ln({}) >= ln({})", name, y, above
        );
    });
}

#[test]
fn test_plain_bisection_non_decreasing() {
    proptest!(proptest_config(), |(raw in 1..i32::MAX)| {
        let y = Q16::from_bits(raw);
        let next = Q16::from_bits(raw + 1);
        prop_assert!(
            log_with(y, KernelConfig::MINIMAL) <= log_with(next, KernelConfig::MINIMAL),
            "minimal ln not monotonic at {}", y
        );
    });
}

/// Newton refinement may step back by at most one ulp between neighbours
#[test]
fn test_newton_log_adjacent_inputs() {
    for config in [KernelConfig::STANDARD, KernelConfig::DIVISION_FREE] {
        let mut previous = log_with(Q16::ONE, config);
        for raw in 65_537..=70_000 {
            let current = log_with(Q16::from_bits(raw), config);
            assert!(
                current.to_bits() >= previous.to_bits() - 1,
                "{:?}: ln stepped back from {} to {} at raw {}",
                config,
                previous,
                current,
                raw
            );
            previous = current;
        }
    }
}

#[test]
fn test_newton_log_non_decreasing_within_one_ulp() {
    proptest!(proptest_config(), |(raw in 1..i32::MAX, (name, config) in preset())| {
        let here = log_with(Q16::from_bits(raw), config);
        let next = log_with(Q16::from_bits(raw + 1), config);
        prop_assert!(
            next.to_bits() >= here.to_bits() - 1,
            "{}: ln({}) = {} but ln(next) = {}", name, raw, here, next
        );
    });
}

#[test]
fn test_non_positive_log_is_sentinel() {
    proptest!(proptest_config(), |(y in non_positive_q16(), (name, config) in preset())| {
        prop_assert_eq!(log_with(y, config), Q16::MIN, "{}", name);
        prop_assert_eq!(log2_with(y, config), Q16::MIN, "{}", name);
        prop_assert_eq!(log10_with(y, config), Q16::MIN, "{}", name);
    });
}

#[test]
fn test_kernel_matches_free_functions() {
    proptest!(proptest_config(), |(raw in any::<i32>(), (name, config) in preset())| {
        let v = Q16::from_bits(raw);
        let kernel = Kernel::new(config);
        prop_assert_eq!(kernel.log(v), log_with(v, config), "{}", name);
        prop_assert_eq!(kernel.log2(v), log2_with(v, config), "{}", name);
        prop_assert_eq!(kernel.log10(v), log10_with(v, config), "{}", name);
        prop_assert_eq!(kernel.exp_signed(v), exp_signed_with(v, config.neg_exp), "{}", name);
    });
}
