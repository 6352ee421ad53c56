//! Regression functions: linear_reg, slope, intercept, r_squared, predict

use crate::bivariate::correlation;
use crate::dispersion::standard_deviation_of;
use crate::helpers::{extract_number, extract_two_lists, mean, PAIR_ARGS};
use serde::{Deserialize, Serialize};
use tally_core::validate_two_datasets;
use tally_plugin::prelude::*;

/// Ordinary least-squares fit of `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. Exactly 1 when y is constant.
    pub r_squared: f64,
    /// Pearson r. NaN when y is constant, 0 when r is otherwise undefined.
    pub correlation: f64,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl From<RegressionResult> for Value {
    fn from(fit: RegressionResult) -> Self {
        Value::object_of_numbers([
            ("slope", fit.slope),
            ("intercept", fit.intercept),
            ("r_squared", fit.r_squared),
            ("correlation", fit.correlation),
        ])
    }
}

/// Fit a line through `(x, y)` by ordinary least squares.
///
/// # Errors
/// Validation failures of the pair, then
/// [`StatsError::DegenerateRegression`] when every x value is identical.
/// A constant y is not an error: the fit reports `r_squared = 1` and a NaN
/// correlation.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<RegressionResult, StatsError> {
    validate_two_datasets(x, y)?;

    let mean_x = mean(x);
    let mean_y = mean(y);

    // Σ(x-x̄)(y-ȳ) and Σ(x-x̄)²
    let mut sum_xy_dev = 0.0;
    let mut sum_xx_dev = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dev_x = xi - mean_x;
        let dev_y = yi - mean_y;
        sum_xy_dev += dev_x * dev_y;
        sum_xx_dev += dev_x * dev_x;
    }

    if sum_xx_dev == 0.0 {
        return Err(StatsError::DegenerateRegression);
    }

    let slope = sum_xy_dev / sum_xx_dev;
    let intercept = mean_y - slope * mean_x;

    // SS_res = Σ(y - ŷ)², SS_tot = Σ(y - ȳ)²
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let residual = yi - (slope * xi + intercept);
        let dev = yi - mean_y;
        ss_res += residual * residual;
        ss_tot += dev * dev;
    }

    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    let correlation = match correlation(x, y) {
        Ok(r) => r,
        Err(e) => {
            // Only y is inspected here: a constant x already failed above
            let fallback = if standard_deviation_of(y) == 0.0 { f64::NAN } else { 0.0 };
            tracing::debug!(error = %e, fallback, "correlation undefined for regression");
            fallback
        }
    };

    Ok(RegressionResult {
        slope,
        intercept,
        r_squared,
        correlation,
    })
}

fn fit_from_args(args: &[Value], func: &str, expected: usize) -> Result<RegressionResult, StatsError> {
    let (x, y) = extract_two_lists(args, func, expected)?;
    linear_regression(&x, &y)
}

// ============ LinearReg ============

pub struct LinearReg;

static LINEAR_REG_EXAMPLES: [&str; 1] =
    ["linear_reg([1,2,3], [2,4,6]) → {slope: 2, intercept: 0, r_squared: 1, correlation: 1}"];

static LINEAR_REG_RELATED: [&str; 4] = ["slope", "intercept", "r_squared", "predict"];

impl FunctionPlugin for LinearReg {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "linear_reg",
            description: "Full linear regression result",
            usage: "linear_reg(x, y)",
            args: &PAIR_ARGS,
            returns: "Object",
            examples: &LINEAR_REG_EXAMPLES,
            category: "stats/regression",
            related: &LINEAR_REG_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match fit_from_args(args, "linear_reg", 2) {
            Ok(fit) => Value::from(fit),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Slope ============

pub struct Slope;

impl FunctionPlugin for Slope {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "slope",
            description: "Slope of linear regression",
            usage: "slope(x, y)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &["slope([1,2,3], [2,4,6]) → 2"],
            category: "stats/regression",
            related: &["intercept", "linear_reg"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match fit_from_args(args, "slope", 2) {
            Ok(fit) => Value::Number(fit.slope),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Intercept ============

pub struct Intercept;

impl FunctionPlugin for Intercept {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "intercept",
            description: "Y-intercept of linear regression",
            usage: "intercept(x, y)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &["intercept([1,2,3], [3,5,7]) → 1"],
            category: "stats/regression",
            related: &["slope", "linear_reg"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match fit_from_args(args, "intercept", 2) {
            Ok(fit) => Value::Number(fit.intercept),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ RSquared ============

pub struct RSquared;

impl FunctionPlugin for RSquared {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "r_squared",
            description: "Coefficient of determination R² (1 when y is constant)",
            usage: "r_squared(x, y)",
            args: &PAIR_ARGS,
            returns: "Number",
            examples: &["r_squared([1,2,3], [2,4,6]) → 1"],
            category: "stats/regression",
            related: &["correlation", "linear_reg"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match fit_from_args(args, "r_squared", 2) {
            Ok(fit) => Value::Number(fit.r_squared),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Predict ============

pub struct Predict;

static PREDICT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("x", "List<Number>", "Independent variable"),
    ArgMeta::required("y", "List<Number>", "Dependent variable, same length as x"),
    ArgMeta::required("new_x", "Number", "Point to evaluate the fitted line at"),
];

impl FunctionPlugin for Predict {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "predict",
            description: "Evaluate the least-squares line at new_x",
            usage: "predict(x, y, new_x)",
            args: &PREDICT_ARGS,
            returns: "Number",
            examples: &["predict([1,2,3], [2,4,6], 4) → 8"],
            category: "stats/regression",
            related: &["linear_reg", "slope", "intercept"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        let fit = match fit_from_args(args, "predict", 3) {
            Ok(fit) => fit,
            Err(e) => return Value::Error(e),
        };

        match extract_number(&args[2], "predict", "new_x") {
            Ok(new_x) => Value::Number(fit.predict(new_x)),
            Err(e) => Value::Error(e),
        }
    }
}
