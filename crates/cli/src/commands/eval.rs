//! `q16 eval`: evaluate one function once.

use anyhow::{bail, Result};
use q16_math::{Kernel, Q16};

use super::Function;

/// Execute an evaluation.
pub fn execute(kernel: &Kernel, function: Function, value: &str) -> Result<()> {
    let input = super::parse_input(value)?;
    let result = evaluate(kernel, function, input)?;
    let reference = function.reference(input.to_f64());

    println!(
        "{}({}) = {} (0x{:08X})",
        function.name(),
        input,
        result,
        result
    );
    if let Some(sentinel) = sentinel_name(function, input, result) {
        println!("result is the {} sentinel", sentinel);
        log::warn!("{}({}) returned the {} sentinel", function.name(), input, sentinel);
    } else {
        println!("reference = {:.6}", reference);
        println!("error = {:.3e}", (result.to_f64() - reference).abs());
    }
    Ok(())
}

/// Run `function` on `input` with the configured kernel.
///
/// Only [`Function::Exp`] can fail: it rejects negative input instead of
/// relying on the kernel precondition.
pub fn evaluate(kernel: &Kernel, function: Function, input: Q16) -> Result<Q16> {
    Ok(match function {
        Function::Exp => {
            if input < Q16::ZERO {
                bail!("exp requires a non-negative input, use exp-signed for {}", input);
            }
            kernel.exp(input)
        }
        Function::ExpSigned => kernel.exp_signed(input),
        Function::Ln => kernel.log(input),
        Function::Log2 => kernel.log2(input),
        Function::Log10 => kernel.log10(input),
        Function::Recip => kernel.recip(input),
    })
}

/// Name of the in-band sentinel `result` stands for, if any.
pub fn sentinel_name(function: Function, input: Q16, result: Q16) -> Option<&'static str> {
    match function {
        Function::Ln | Function::Log2 | Function::Log10 if !input.is_positive() => Some("MIN"),
        Function::Recip if !input.is_positive() => Some("MAX"),
        _ if result == Q16::MAX => Some("MAX"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use q16_math::KernelConfig;

    #[test]
    fn test_evaluate_dispatch() {
        let kernel = Kernel::new(KernelConfig::STANDARD);
        let two = Q16::TWO;
        assert_eq!(evaluate(&kernel, Function::Ln, two).unwrap(), Q16::LN_2);
        assert_eq!(evaluate(&kernel, Function::Log2, two).unwrap(), Q16::ONE);
        assert_eq!(
            evaluate(&kernel, Function::Recip, two).unwrap(),
            Q16::from_f64(0.5)
        );
        assert_eq!(evaluate(&kernel, Function::Exp, Q16::ONE).unwrap(), Q16::E);
    }

    #[test]
    fn test_exp_rejects_negative_input() {
        let kernel = Kernel::default();
        let err = evaluate(&kernel, Function::Exp, -Q16::ONE).unwrap_err();
        assert!(err.to_string().contains("exp-signed"));
        assert!(evaluate(&kernel, Function::ExpSigned, -Q16::ONE).is_ok());
    }

    #[test]
    fn test_sentinel_names() {
        assert_eq!(sentinel_name(Function::Ln, Q16::ZERO, Q16::MIN), Some("MIN"));
        assert_eq!(sentinel_name(Function::Recip, Q16::ZERO, Q16::MAX), Some("MAX"));
        assert_eq!(
            sentinel_name(Function::ExpSigned, Q16::from_int(12), Q16::MAX),
            Some("MAX")
        );
        assert_eq!(sentinel_name(Function::Ln, Q16::ONE, Q16::ZERO), None);
    }
}
