//! Configured kernel handle
//!
//! [`Kernel`] binds a [`KernelConfig`] once at construction, so call sites
//! pick hardware or division-free arithmetic without threading the
//! configuration through every call.
//!
//! # Example
//!
//! ```rust
//! use q16_math::{Kernel, KernelConfig, Q16};
//!
//! const LOG: Kernel = Kernel::new(KernelConfig::DIVISION_FREE);
//!
//! let ln10 = LOG.log(Q16::from_int(10)).to_f64();
//! assert!((ln10 - 2.302585).abs() < 1e-3);
//! assert_eq!(LOG.recip(Q16::ZERO), Q16::MAX);
//! ```

use crate::config::{Division, KernelConfig};
use crate::fixed::Q16;
use crate::math::{self, divide};

/// Transcendental kernels bound to one [`KernelConfig`].
///
/// Stateless and `Copy`; every method is a pure function of its arguments
/// and the stored configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Bind a configuration.
    pub const fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    /// The bound configuration.
    pub const fn config(&self) -> KernelConfig {
        self.config
    }

    /// `e^x` for `x >= 0`; see [`math::exp`].
    #[inline]
    pub fn exp(&self, x: Q16) -> Q16 {
        math::exp(x)
    }

    /// `e^x` for any `x`, using the configured negative-exponent lookup.
    #[inline]
    pub fn exp_signed(&self, x: Q16) -> Q16 {
        math::exp_signed_with(x, self.config.neg_exp)
    }

    /// Natural logarithm; [`Q16::MIN`] for `y <= 0`.
    #[inline]
    pub fn log(&self, y: Q16) -> Q16 {
        math::log_with(y, self.config)
    }

    /// Base-2 logarithm; [`Q16::MIN`] for `y <= 0`.
    #[inline]
    pub fn log2(&self, y: Q16) -> Q16 {
        math::log2_with(y, self.config)
    }

    /// Base-10 logarithm; [`Q16::MIN`] for `y <= 0`.
    #[inline]
    pub fn log10(&self, y: Q16) -> Q16 {
        math::log10_with(y, self.config)
    }

    /// `a / b` with the configured division; [`Q16::MAX`] for `b == 0`.
    #[inline]
    pub fn div(&self, a: Q16, b: Q16) -> Q16 {
        divide(a, b, self.config.division)
    }

    /// `1 / b`; [`Q16::MAX`] for `b <= 0` under either division strategy.
    pub fn recip(&self, b: Q16) -> Q16 {
        match self.config.division {
            Division::Free => math::recip(b),
            Division::Hardware if b.is_positive() => math::div(Q16::ONE, b),
            Division::Hardware => Q16::MAX,
        }
    }
}

impl From<KernelConfig> for Kernel {
    fn from(config: KernelConfig) -> Self {
        Self::new(config)
    }
}
