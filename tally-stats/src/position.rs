//! Position functions: min, max, percentile, quartiles

use crate::helpers::{extract_number, midpoint, sorted, DATASET_ARGS};
use crate::Statistics;
use serde::{Deserialize, Serialize};
use tally_plugin::prelude::*;

/// First, second and third quartile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl From<Quartiles> for Value {
    fn from(q: Quartiles) -> Self {
        Value::object_of_numbers([("q1", q.q1), ("q2", q.q2), ("q3", q.q3)])
    }
}

pub(crate) fn min(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Percentile by linear interpolation between closest ranks.
pub(crate) fn percentile(numbers: &[f64], p: f64) -> Result<f64, StatsError> {
    percentile_sorted(&sorted(numbers), p)
}

/// Quartiles from a single sort
pub(crate) fn quartiles(numbers: &[f64]) -> Quartiles {
    let sorted_nums = sorted(numbers);
    Quartiles {
        q1: interpolate(&sorted_nums, 25.0),
        q2: interpolate(&sorted_nums, 50.0),
        q3: interpolate(&sorted_nums, 75.0),
    }
}

/// `p` must lie in `[0, 100]`; NaN is rejected as well.
fn percentile_sorted(sorted_nums: &[f64], p: f64) -> Result<f64, StatsError> {
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::PercentileRange { p });
    }
    if sorted_nums.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    Ok(interpolate(sorted_nums, p))
}

fn interpolate(sorted_nums: &[f64], p: f64) -> f64 {
    // rank = p/100 * (n-1)
    let rank = (p / 100.0) * (sorted_nums.len() - 1) as f64;
    let floor_rank = rank.floor();

    if rank == floor_rank {
        return sorted_nums[rank as usize];
    }

    let lower = sorted_nums[floor_rank as usize];
    let upper = sorted_nums[rank.ceil() as usize];
    let weight = rank - floor_rank;
    // Halfway ranks, including p50 of an even count, match `median`
    if weight == 0.5 {
        return midpoint(lower, upper);
    }
    lower * (1.0 - weight) + upper * weight
}

// ============ Min ============

pub struct Min;

impl FunctionPlugin for Min {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "min",
            description: "Smallest value",
            usage: "min(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["min([3, 1, 2]) → 1"],
            category: "stats/position",
            related: &["max", "range"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "min") {
            Ok(stats) => Value::Number(stats.min()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Max ============

pub struct Max;

impl FunctionPlugin for Max {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "max",
            description: "Largest value",
            usage: "max(values)",
            args: &DATASET_ARGS,
            returns: "Number",
            examples: &["max([3, 1, 2]) → 3"],
            category: "stats/position",
            related: &["min", "range"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "max") {
            Ok(stats) => Value::Number(stats.max()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Percentile ============

pub struct Percentile;

static PERCENTILE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("values", "List<Number>", "Non-empty list of finite numbers"),
    ArgMeta::required("p", "Number", "Percentile in 0..=100"),
];

static PERCENTILE_EXAMPLES: [&str; 3] = [
    "percentile([1, 2, 3, 4, 5], 50) → 3",
    "percentile([1, 2, 3, 4], 25) → 1.75",
    "percentile([10, 20], 100) → 20",
];

impl FunctionPlugin for Percentile {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "percentile",
            description: "Percentile by linear interpolation between closest ranks",
            usage: "percentile(values, p)",
            args: &PERCENTILE_ARGS,
            returns: "Number",
            examples: &PERCENTILE_EXAMPLES,
            category: "stats/position",
            related: &["quartiles", "median"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        if args.len() != 2 {
            return Value::Error(StatsError::arg_count("percentile", 2, args.len()));
        }

        let stats = match Statistics::from_value(&args[0]) {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        let p = match extract_number(&args[1], "percentile", "p") {
            Ok(p) => p,
            Err(e) => return Value::Error(e),
        };

        match stats.percentile(p) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Quartiles ============

pub struct QuartilesFn;

impl FunctionPlugin for QuartilesFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "quartiles",
            description: "Percentiles 25, 50 and 75 as {q1, q2, q3}",
            usage: "quartiles(values)",
            args: &DATASET_ARGS,
            returns: "Object",
            examples: &["quartiles([1, 2, 3, 4, 5]) → {q1: 2, q2: 3, q3: 4}"],
            category: "stats/position",
            related: &["percentile", "median"],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match Statistics::from_args(args, "quartiles") {
            Ok(stats) => Value::from(stats.quartiles()),
            Err(e) => Value::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 4] = [4.0, 1.0, 3.0, 2.0];

    #[test]
    fn test_min_max() {
        assert_eq!(min(&DATA), 1.0);
        assert_eq!(max(&DATA), 4.0);
        assert_eq!(min(&[-2.5]), -2.5);
    }

    #[test]
    fn test_percentile_bounds() {
        assert_eq!(percentile(&DATA, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&DATA, 100.0).unwrap(), 4.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        // rank = 0.25 * 3 = 0.75 → 1 * 0.25 + 2 * 0.75
        assert_eq!(percentile(&DATA, 25.0).unwrap(), 1.75);
        assert_eq!(percentile(&DATA, 50.0).unwrap(), 2.5);
    }

    #[test]
    fn test_percentile_exact_rank() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(percentile(&data, 25.0).unwrap(), 20.0);
        assert_eq!(percentile(&data, 75.0).unwrap(), 40.0);
    }

    #[test]
    fn test_p50_matches_median_at_extremes() {
        for data in [
            vec![f64::MAX, f64::MAX],
            vec![f64::MIN, f64::MIN],
            vec![5e-324, 5e-324],
            vec![-5e-324, 5e-324],
            vec![f64::MIN_POSITIVE, f64::MIN_POSITIVE, 1.0, 3.0],
            vec![f64::MIN, f64::MAX],
        ] {
            let median = crate::central::median(&data);
            assert_eq!(percentile(&data, 50.0).unwrap(), median, "{:?}", data);
            assert_eq!(quartiles(&data).q2, median, "{:?}", data);
            assert!(median.is_finite());
        }
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 33.0).unwrap(), 7.0);
    }

    #[test]
    fn test_percentile_out_of_range() {
        assert_eq!(percentile(&DATA, -1.0), Err(StatsError::PercentileRange { p: -1.0 }));
        assert_eq!(percentile(&DATA, 101.0), Err(StatsError::PercentileRange { p: 101.0 }));
        assert!(matches!(
            percentile(&DATA, f64::NAN),
            Err(StatsError::PercentileRange { .. })
        ));
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile(&[], 50.0), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_quartiles() {
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(q, Quartiles { q1: 2.0, q2: 3.0, q3: 4.0 });
    }

    #[test]
    fn test_percentile_plugin() {
        let result = Percentile.call(&[Value::from(DATA.to_vec()), Value::Number(25.0)]);
        assert_eq!(result, Value::Number(1.75));
    }

    #[test]
    fn test_percentile_plugin_errors() {
        let data = Value::from(DATA.to_vec());
        let result = Percentile.call(&[data.clone(), Value::Number(150.0)]);
        assert_eq!(result.as_error().map(|e| e.code()), Some(codes::PERCENTILE_RANGE));

        let result = Percentile.call(&[data.clone(), Value::Text("50".into())]);
        assert_eq!(result.as_error().map(|e| e.code()), Some(codes::ARG_TYPE));

        let result = Percentile.call(&[data]);
        assert_eq!(result, Value::Error(StatsError::arg_count("percentile", 2, 1)));
    }

    #[test]
    fn test_quartiles_plugin() {
        let result = QuartilesFn.call(&[Value::from(vec![1.0, 2.0, 3.0, 4.0, 5.0])]);
        assert_eq!(result.get("q1"), Some(&Value::Number(2.0)));
        assert_eq!(result.get("q2"), Some(&Value::Number(3.0)));
        assert_eq!(result.get("q3"), Some(&Value::Number(4.0)));
    }
}
