//! Kernel configuration
//!
//! One kernel implementation covers every target class. The three knobs pick
//! which instructions the kernels may use and how much work they do:
//!
//! | Knob | Options | Affects |
//! |------|---------|---------|
//! | [`Division`] | `Hardware`, `Free` | Newton refinement, [`Kernel::div`](crate::Kernel::div), [`Kernel::recip`](crate::Kernel::recip) |
//! | [`Refinement`] | `Newton`, `None` | logarithm bisection strategy |
//! | [`NegExpLookup`] | `Interpolated`, `Nearest` | `exp_signed` for negative input |
//!
//! [`KernelConfig::DEFAULT`] is [`KernelConfig::STANDARD`], or
//! [`KernelConfig::MINIMAL`] when the `division-free` cargo feature is enabled.

/// How the kernels divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Division {
    /// Use the target's integer divide instruction on a 64-bit dividend.
    #[default]
    Hardware,
    /// Multiply by a Newton-Raphson reciprocal; shifts, adds and `mul` only.
    Free,
}

/// How the logarithm kernel finishes its search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Refinement {
    /// Seeded 16-step bisection followed by one Newton-Raphson correction.
    #[default]
    Newton,
    /// Plain 20-step bisection, answer is the final interval midpoint.
    ///
    /// Never divides, whatever [`Division`] is configured, and always runs the
    /// same instruction sequence for a given reduced mantissa.
    None,
}

/// How `exp_signed` evaluates negative exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NegExpLookup {
    /// Linear interpolation between neighbouring 0.125-step table entries.
    #[default]
    Interpolated,
    /// The table entry at or below the input magnitude, no interpolation.
    Nearest,
}

/// Complete kernel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelConfig {
    /// Division strategy.
    pub division: Division,
    /// Logarithm refinement strategy.
    pub refinement: Refinement,
    /// Negative-exponent lookup strategy.
    pub neg_exp: NegExpLookup,
}

impl KernelConfig {
    /// Hardware division, Newton refinement, interpolated negative lookup.
    pub const STANDARD: Self = Self {
        division: Division::Hardware,
        refinement: Refinement::Newton,
        neg_exp: NegExpLookup::Interpolated,
    };

    /// Newton refinement through the division-free reciprocal.
    pub const DIVISION_FREE: Self = Self {
        division: Division::Free,
        refinement: Refinement::Newton,
        neg_exp: NegExpLookup::Interpolated,
    };

    /// No division anywhere and no refinement: fixed-length bisection.
    pub const MINIMAL: Self = Self {
        division: Division::Free,
        refinement: Refinement::None,
        neg_exp: NegExpLookup::Interpolated,
    };

    /// Configuration used by the crate-level free functions.
    #[cfg(not(feature = "division-free"))]
    pub const DEFAULT: Self = Self::STANDARD;

    /// Configuration used by the crate-level free functions.
    #[cfg(feature = "division-free")]
    pub const DEFAULT: Self = Self::MINIMAL;

    /// Replace the division strategy.
    pub const fn with_division(self, division: Division) -> Self {
        Self { division, ..self }
    }

    /// Replace the refinement strategy.
    pub const fn with_refinement(self, refinement: Refinement) -> Self {
        Self { refinement, ..self }
    }

    /// Replace the negative-exponent lookup strategy.
    pub const fn with_neg_exp(self, neg_exp: NegExpLookup) -> Self {
        Self { neg_exp, ..self }
    }

    /// `true` when no kernel under this configuration issues a divide.
    pub const fn is_division_free(&self) -> bool {
        matches!(self.division, Division::Free)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
