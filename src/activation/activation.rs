use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetError;

/// Logistic function `1 / (1 + e^-x)`, range (0, 1).
///
/// Branches on the sign of `x` so `exp` is only ever taken of a
/// non-positive argument and cannot overflow.
pub fn soft_step(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Soft-plus `ln(1 + e^x)`, range (0, ∞).
///
/// Evaluated as `max(x, 0) + ln(1 + e^-|x|)`.
pub fn soft_plus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

pub fn soft_step_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| soft_step(x)).collect()
}

pub fn soft_plus_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| soft_plus(x)).collect()
}

/// Applies `activation` to every element of `xs` in place.
pub fn apply_in_place<A: Activation + ?Sized>(activation: &A, xs: &mut [f64]) {
    for x in xs.iter_mut() {
        *x = activation.apply(*x);
    }
}

/// An elementwise nonlinearity.
///
/// Implemented by [`ActivationFunction`] and by any `Fn(f64) -> f64`, so
/// callers can pass either a named variant or a plain function/closure.
pub trait Activation {
    fn apply(&self, x: f64) -> f64;

    /// Applies the activation to each element, returning a new vector.
    fn apply_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.apply(x)).collect()
    }
}

impl<F> Activation for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// Logistic curve; the classifier nonlinearity.
    SoftStep,
    /// Smooth rectifier; the regressor nonlinearity.
    SoftPlus,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::SoftStep => soft_step(x),
            ActivationFunction::SoftPlus => soft_plus(x),
            ActivationFunction::Identity => x,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::SoftStep => "soft_step",
            ActivationFunction::SoftPlus => "soft_plus",
            ActivationFunction::Identity => "identity",
        }
    }
}

impl Activation for ActivationFunction {
    fn apply(&self, x: f64) -> f64 {
        self.function(x)
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::SoftStep
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft_step" | "softstep" | "sigmoid" | "logistic" => Ok(ActivationFunction::SoftStep),
            "soft_plus" | "softplus" => Ok(ActivationFunction::SoftPlus),
            "identity" | "linear" => Ok(ActivationFunction::Identity),
            other => Err(NetError::Config(format!("unknown activation `{other}`"))),
        }
    }
}

/// Evaluates `activation` at every integer in `from..=to`.
pub fn tabulate<A: Activation + ?Sized>(activation: &A, from: i32, to: i32) -> Vec<(i32, f64)> {
    (from..=to).map(|x| (x, activation.apply(x as f64))).collect()
}
