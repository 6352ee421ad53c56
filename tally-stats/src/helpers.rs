//! Helper functions for statistical operations
//!
//! Shared accumulation primitives plus argument extraction for the function
//! plugins. Numeric helpers assume the caller already validated the slice.

use tally_core::{dataset_from_value, validate_two_values, StatsError, Value};
use tally_plugin::ArgMeta;

pub static DATASET_ARGS: [ArgMeta; 1] = [ArgMeta::required(
    "values",
    "List<Number>",
    "Non-empty list of finite numbers",
)];

pub static PAIR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("x", "List<Number>", "Independent variable"),
    ArgMeta::required("y", "List<Number>", "Dependent variable, same length as x"),
];

/// Extract exactly one dataset argument
pub fn extract_dataset(args: &[Value], func: &str) -> Result<Vec<f64>, StatsError> {
    if args.len() != 1 {
        return Err(StatsError::arg_count(func, 1, args.len()));
    }
    dataset_from_value(&args[0])
}

/// Extract the leading `(x, y)` pair of a bivariate call with `expected` arguments
pub fn extract_two_lists(
    args: &[Value],
    func: &str,
    expected: usize,
) -> Result<(Vec<f64>, Vec<f64>), StatsError> {
    if args.len() != expected {
        return Err(StatsError::arg_count(func, expected, args.len()));
    }
    validate_two_values(&args[0], &args[1])
}

/// Extract a scalar argument
pub fn extract_number(arg: &Value, func: &str, name: &str) -> Result<f64, StatsError> {
    match arg {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(StatsError::arg_type(func, name, "Number", other.type_name())),
    }
}

/// Left-to-right sum
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, x| acc + x)
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(numbers: &[f64]) -> f64 {
    sum(numbers) / numbers.len() as f64
}

/// Population variance (divides by n). NaN for an empty slice.
pub fn variance(numbers: &[f64]) -> f64 {
    let m = mean(numbers);
    let ss = numbers.iter().fold(0.0, |acc, x| {
        let dev = x - m;
        acc + dev * dev
    });
    ss / numbers.len() as f64
}

/// Halfway between `a` and `b`, finite for any finite pair.
///
/// Same-sign pairs step from `a` so `MAX` and subnormal pairs neither
/// overflow nor flush to zero.
pub fn midpoint(a: f64, b: f64) -> f64 {
    if a.is_sign_negative() == b.is_sign_negative() {
        a + (b - a) / 2.0
    } else {
        (a + b) / 2.0
    }
}

/// Sort numbers (returns new sorted vector)
pub fn sorted(numbers: &[f64]) -> Vec<f64> {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dataset() {
        let args = vec![Value::from(vec![1.0, 2.0, 3.0])];
        assert_eq!(extract_dataset(&args, "mean").unwrap().len(), 3);
    }

    #[test]
    fn test_extract_dataset_arg_count() {
        let args = vec![Value::Number(1.0), Value::Number(2.0)];
        assert_eq!(
            extract_dataset(&args, "mean"),
            Err(StatsError::arg_count("mean", 1, 2))
        );
    }

    #[test]
    fn test_extract_number_type() {
        let err = extract_number(&Value::Text("50".into()), "percentile", "p").unwrap_err();
        assert_eq!(err, StatsError::arg_type("percentile", "p", "Number", "Text"));
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_sum_is_naive() {
        // Uncompensated accumulation keeps IEEE-754 rounding of each step
        assert_eq!(sum(&[0.1, 0.2, 0.3]), (0.1 + 0.2) + 0.3);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_variance() {
        assert_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 4.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(2.0, 3.0), 2.5);
        assert_eq!(midpoint(-3.0, 1.0), -1.0);
        assert_eq!(midpoint(-4.0, -2.0), -3.0);
        assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(midpoint(f64::MIN, f64::MIN), f64::MIN);
        assert_eq!(midpoint(5e-324, 5e-324), 5e-324);
        assert_eq!(midpoint(f64::MIN, f64::MAX), 0.0);
        assert!(midpoint(f64::MAX / 2.0, f64::MAX).is_finite());
    }

    #[test]
    fn test_sorted() {
        let numbers = vec![3.0, -1.0, 2.0, 10.0];
        assert_eq!(sorted(&numbers), vec![-1.0, 2.0, 3.0, 10.0]);
        // Input untouched
        assert_eq!(numbers, vec![3.0, -1.0, 2.0, 10.0]);
    }
}
