//! Dispersion functions: variance, standard deviation, range
//!
//! Population forms only: every divisor is n.

use crate::helpers::{variance, DATASET_ARGS};
use crate::Statistics;
use tally_plugin::prelude::*;

/// Population standard deviation of a raw slice.
///
/// Performs no validation: an empty slice yields NaN, and non-finite input
/// propagates into the result.
pub fn standard_deviation_of(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

// ============ Variance ============

pub struct Variance;

static VARIANCE_EXAMPLES: [&str; 2] = [
    "variance([1, 2, 3, 4, 5]) → 2",
    "variance([2, 4, 4, 4, 5, 5, 7, 9]) → 4",
];

impl FunctionPlugin for Variance {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "variance",
            description: "Population variance (divides by n)",
            usage: "variance(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &VARIANCE_EXAMPLES,
            category: "stats/dispersion",
            related: &["stddev", "range"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "variance") {
            Ok(stats) => Value::Number(stats.variance()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Standard deviation ============

pub struct Stddev;

impl FunctionPlugin for Stddev {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "stddev",
            description: "Population standard deviation: sqrt(variance)",
            usage: "stddev(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["stddev([2, 4, 4, 4, 5, 5, 7, 9]) → 2"],
            category: "stats/dispersion",
            related: &["variance"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "stddev") {
            Ok(stats) => Value::Number(stats.standard_deviation()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Range ============

pub struct Range;

impl FunctionPlugin for Range {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "range",
            description: "max - min",
            usage: "range(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["range([1, 5, 10]) → 9"],
            category: "stats/dispersion",
            related: &["min", "max", "variance"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "range") {
            Ok(stats) => Value::Number(stats.range()),
            Err(e) => Value::Error(e),
        }
    }
}
