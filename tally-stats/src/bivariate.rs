//! Bivariate functions: covariance, correlation

use crate::dispersion::standard_deviation_of;
use crate::helpers::{extract_two_lists, mean, PAIR_ARGS};
use tally_core::validate_two_datasets;
use tally_plugin::prelude::*;

/// Population covariance: `(1/n) Σ(xᵢ - x̄)(yᵢ - ȳ)`.
///
/// # Errors
/// Any validation failure of the pair (empty, length mismatch, invalid number).
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    validate_two_datasets(x, y)?;
    Ok(covariance_impl(x, y))
}

/// Pearson correlation: `cov(x, y) / (σx σy)`.
///
/// The result is not clamped, so well-formed input can land a rounding step
/// outside `[-1, 1]`. When either variance is subnormal the standard
/// deviation loses most of its significant bits and the overshoot grows well
/// past a rounding step: `x = [0, 1e-160]`, `y = [0, 1]` gives `r ≈ 1.0000056`.
///
/// # Errors
/// Validation failures of the pair, then [`StatsError::ZeroVariance`] naming
/// the first constant side (x is checked before y).
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    validate_two_datasets(x, y)?;

    let cov = covariance_impl(x, y);
    let sd_x = standard_deviation_of(x);
    let sd_y = standard_deviation_of(y);

    if sd_x == 0.0 {
        return Err(StatsError::ZeroVariance { side: Side::X });
    }
    if sd_y == 0.0 {
        return Err(StatsError::ZeroVariance { side: Side::Y });
    }

    Ok(cov / (sd_x * sd_y))
}

fn covariance_impl(x: &[f64], y: &[f64]) -> f64 {
    let mean_x = mean(x);
    let mean_y = mean(y);

    let sum_products = x.iter().zip(y).fold(0.0, |acc, (xi, yi)| {
        acc + (xi - mean_x) * (yi - mean_y)
    });

    sum_products / x.len() as f64
}

// ============ Covariance ============

pub struct Covariance;

static COVARIANCE_EXAMPLES: [&str; 2] = [
    "covariance([1,2,3], [2,4,6]) → 1.333",
    "covariance([1,2,3], [6,4,2]) → -1.333",
];

impl FunctionPlugin for Covariance {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "covariance",
            description: "Population covariance (divides by n)",
            usage: "covariance(x, y)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &COVARIANCE_EXAMPLES,
            category: "stats/bivariate",
            related: &["correlation", "variance"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        let (x, y) = match extract_two_lists(args, "covariance", 2) {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        match covariance(&x, &y) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Correlation (Pearson) ============

pub struct Correlation;

impl FunctionPlugin for Correlation {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "correlation",
            description: "Pearson correlation coefficient r. Error if either variable is constant",
            usage: "correlation(x, y)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &["correlation([1,2,3], [2,4,6]) → 1"],
            category: "stats/bivariate",
            related: &["covariance", "r_squared"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        let (x, y) = match extract_two_lists(args, "correlation", 2) {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        match correlation(&x, &y) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e),
        }
    }
}
