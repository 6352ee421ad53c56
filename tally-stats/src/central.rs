//! Central tendency functions: count, sum, mean, median, mode

use crate::helpers::{midpoint, sorted, DATASET_ARGS};
use crate::Statistics;
use std::collections::HashMap;
use tally_plugin::prelude::*;

/// Middle of the sorted values; average of the two middle values for even counts.
pub(crate) fn median(numbers: &[f64]) -> f64 {
    let sorted_nums = sorted(numbers);
    let n = sorted_nums.len();

    if n % 2 == 1 {
        sorted_nums[(n - 1) / 2]
    } else {
        midpoint(sorted_nums[n / 2 - 1], sorted_nums[n / 2])
    }
}

/// Every value sharing the highest frequency, once each, ascending.
pub(crate) fn mode(numbers: &[f64]) -> Vec<f64> {
    // Adding 0.0 folds -0.0 into 0.0 so both count as one value
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for x in numbers {
        *counts.entry((x + 0.0).to_bits()).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = counts
        .into_iter()
        .filter(|(_, c)| *c == max_count)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(|a, b| a.total_cmp(b));
    modes
}

// ============ Count ============

pub struct Count;

impl FunctionPlugin for Count {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "count",
            description: "Number of values",
            usage: "count(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["count([4, 8, 15]) → 3"],
            category: "stats/central",
            related: &["sum"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "count") {
            Ok(stats) => Value::Number(stats.count() as f64),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Sum ============

pub struct Sum;

impl FunctionPlugin for Sum {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "sum",
            description: "Sum of values, accumulated left to right",
            usage: "sum(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["sum([1, 2, 3]) → 6"],
            category: "stats/central",
            related: &["count", "mean"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "sum") {
            Ok(stats) => Value::Number(stats.sum()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Mean ============

pub struct Mean;

static MEAN_EXAMPLES: [&str; 2] = [
    "mean([1, 2, 3, 4, 5]) → 3",
    "mean([10, 20, 30]) → 20",
];

impl FunctionPlugin for Mean {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mean",
            description: "Arithmetic mean (average) of values",
            usage: "mean(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &MEAN_EXAMPLES,
            category: "stats/central",
            related: &["median", "mode"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "mean") {
            Ok(stats) => Value::Number(stats.mean()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Median ============

pub struct Median;

static MEDIAN_EXAMPLES: [&str; 2] = [
    "median([1, 2, 3, 4, 5]) → 3",
    "median([1, 2, 3, 4]) → 2.5",
];

impl FunctionPlugin for Median {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "median",
            description: "Middle value (average of two middle if even count)",
            usage: "median(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &MEDIAN_EXAMPLES,
            category: "stats/central",
            related: &["mean", "mode", "percentile"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "median") {
            Ok(stats) => Value::Number(stats.median()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Mode ============

pub struct Mode;

static MODE_EXAMPLES: [&str; 2] = [
    "mode([1, 2, 2, 3]) → [2]",
    "mode([1, 1, 2, 2]) → [1, 2]",
];

impl FunctionPlugin for Mode {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mode",
            description: "Most frequent values, ascending. Every distinct value if all tie",
            usage: "mode(values)",
            args: &DATASET_ARGS,
            returns: "List<Number>",
            examples: &MODE_EXAMPLES,
            category: "stats/central",
            related: &["mean", "median"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "mode") {
            Ok(stats) => Value::from(stats.mode()),
            Err(e) => Value::Error(e),
        }
    }
}
