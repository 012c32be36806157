//! CLI subcommands and the argument types they share.

pub mod bench;
pub mod demo;
pub mod eval;
pub mod report;
pub mod tables;

use anyhow::{Context, Result};
use clap::ValueEnum;
use q16_math::{KernelConfig, Q16};

/// Kernel configuration preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Hardware division with Newton refinement
    Standard,
    /// Reciprocal-based division with Newton refinement
    DivisionFree,
    /// No division, plain bisection
    Minimal,
}

impl Preset {
    pub fn kernel_config(self) -> KernelConfig {
        match self {
            Preset::Standard => KernelConfig::STANDARD,
            Preset::DivisionFree => KernelConfig::DIVISION_FREE,
            Preset::Minimal => KernelConfig::MINIMAL,
        }
    }
}

/// Function evaluated by `q16 eval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    /// e^x for x >= 0
    Exp,
    /// e^x for any x
    ExpSigned,
    /// Natural logarithm
    Ln,
    /// Base-2 logarithm
    Log2,
    /// Base-10 logarithm
    Log10,
    /// Reciprocal 1/x
    Recip,
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Exp => "exp",
            Function::ExpSigned => "exp_signed",
            Function::Ln => "ln",
            Function::Log2 => "log2",
            Function::Log10 => "log10",
            Function::Recip => "recip",
        }
    }

    /// `f64` result for comparison; NaN outside the real domain.
    pub fn reference(self, x: f64) -> f64 {
        match self {
            Function::Exp | Function::ExpSigned => x.exp(),
            Function::Ln => x.ln(),
            Function::Log2 => x.log2(),
            Function::Log10 => x.log10(),
            Function::Recip => 1.0 / x,
        }
    }
}

/// Function covered by `q16 report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFunction {
    /// Natural logarithm
    Ln,
    /// Base-2 logarithm
    Log2,
    /// Base-10 logarithm
    Log10,
    /// Signed exponential
    Exp,
}

impl From<ReportFunction> for Function {
    fn from(function: ReportFunction) -> Self {
        match function {
            ReportFunction::Ln => Function::Ln,
            ReportFunction::Log2 => Function::Log2,
            ReportFunction::Log10 => Function::Log10,
            ReportFunction::Exp => Function::ExpSigned,
        }
    }
}

/// Parse a decimal command-line value into Q16.16.
pub fn parse_input(text: &str) -> Result<Q16> {
    text.parse::<Q16>()
        .with_context(|| format!("Invalid input value: '{}'", text.trim()))
}
