//! Nonlinear transform family for matrix perturbation and vector mixing
//!
//! Three magnitude tiers, each a pure `f64 -> f64` function. The
//! dispatcher picks the tier from the *original* input value, then
//! applies it to one of four candidate arguments chosen by the
//! fractional-part quartile. The tier is selected exactly once, so the
//! construction is a single-level function table rather than a
//! recursive dispatch.
//!
//! All internal call sites pass nibble-derived values in `[0, 16)`;
//! over that domain the transform is finite everywhere, with the
//! tangent singularities at π/2 and 3π/2 explicitly guarded.

use std::f64::consts::{FRAC_PI_2, PI};

/// Magnitude tier, selected from the pre-transform input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// |x| below 1
    Medium,
    /// x in [1, 10)
    Intermediate,
    /// x at or above 10
    High,
}

impl Tier {
    /// Bucket an input value by magnitude.
    #[inline(always)]
    pub fn for_value(x: f64) -> Self {
        if x < 1.0 {
            Tier::Medium
        } else if x < 10.0 {
            Tier::Intermediate
        } else {
            Tier::High
        }
    }

    /// Apply this tier's transform to a candidate argument.
    #[inline(always)]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Tier::Medium => medium(x),
            Tier::Intermediate => intermediate(x),
            Tier::High => high(x),
        }
    }
}

/// e^(sin x + cos x)
#[inline(always)]
fn medium(x: f64) -> f64 {
    (x.sin() + x.cos()).exp()
}

/// sin x · cos x · tan x, zero at the exact tangent singularities
#[inline(always)]
fn intermediate(x: f64) -> f64 {
    if x == FRAC_PI_2 || x == 3.0 * PI / 2.0 {
        return 0.0;
    }
    x.sin() * x.cos() * x.tan()
}

/// e^x · ln(x + 1)
#[inline(always)]
fn high(x: f64) -> f64 {
    x.exp() * (x + 1.0).ln()
}

/// Nonlinear dispatcher used for both matrix perturbation and vector
/// mixing.
///
/// The candidate argument is derived from the fractional part of `x`
/// (truncated remainder), then fed through the tier selected by the
/// original `x`, never re-bucketed by the candidate.
#[inline(always)]
pub fn complex_non_linear(x: f64) -> f64 {
    let tier = Tier::for_value(x);
    let frac = x % 1.0;
    let arg = if frac < 0.25 {
        x + (1.0 + frac)
    } else if frac < 0.5 {
        x - (1.0 + frac)
    } else if frac < 0.75 {
        x * (1.0 + frac)
    } else {
        x / (1.0 + frac)
    };
    tier.apply(arg)
}
