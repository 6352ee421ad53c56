//! Tally Statistics
//!
//! Descriptive and bivariate statistics over `f64` datasets. Every measure is
//! a population measure (divisor n).
//!
//! Three ways in:
//! - [`Statistics`]: wrap one dataset, then ask for any single-dataset
//!   statistic or pair it with a second dataset.
//! - Free functions ([`covariance`], [`correlation`], [`linear_regression`],
//!   [`standard_deviation_of`]) for one-off work on two slices.
//! - [`load_stats_library`]: the same operations as named function plugins
//!   over untyped `Value` arguments. They never panic and return
//!   `Value::Error` on failure.

mod helpers;
mod central;
mod dispersion;
mod position;
mod bivariate;
mod regression;
mod engine;

pub use bivariate::{correlation, covariance};
pub use dispersion::standard_deviation_of;
pub use engine::Statistics;
pub use position::Quartiles;
pub use regression::{linear_regression, RegressionResult};
pub use tally_core::{validate_two_datasets, Side, StatsError};

use tally_plugin::PluginRegistry;

/// Load statistics functions into registry
pub fn load_stats_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Central tendency
        .with_function(central::Count)
        .with_function(central::Sum)
        .with_function(central::Mean)
        .with_function(central::Median)
        .with_function(central::Mode)

        // Dispersion
        .with_function(dispersion::Variance)
        .with_function(dispersion::Stddev)
        .with_function(dispersion::Range)

        // Position
        .with_function(position::Min)
        .with_function(position::Max)
        .with_function(position::Percentile)
        .with_function(position::QuartilesFn)

        // Bivariate
        .with_function(bivariate::Covariance)
        .with_function(bivariate::Correlation)

        // Regression
        .with_function(regression::LinearReg)
        .with_function(regression::Slope)
        .with_function(regression::Intercept)
        .with_function(regression::RSquared)
        .with_function(regression::Predict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{codes, Value};
    use tally_plugin::EvalContext;

    fn registry() -> PluginRegistry {
        load_stats_library(PluginRegistry::new())
    }

    #[test]
    fn test_all_functions_registered() {
        let reg = registry();
        assert_eq!(reg.len(), 19);
        for name in [
            "count", "sum", "mean", "median", "mode", "variance", "stddev", "range", "min", "max",
            "percentile", "quartiles", "covariance", "correlation", "linear_reg", "slope",
            "intercept", "r_squared", "predict",
        ] {
            assert!(reg.get_function(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_call_through_registry() {
        let reg = registry();
        let mut ctx = EvalContext::new().with_tracing(true);
        let data = Value::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(reg.call_function("Mean", &[data.clone()], &mut ctx), Value::Number(3.0));
        assert_eq!(
            reg.call_function("percentile", &[data, Value::Number(50.0)], &mut ctx),
            Value::Number(3.0)
        );
        assert_eq!(ctx.trace.len(), 2);
        assert_eq!(ctx.trace[1].function, "percentile");
    }

    #[test]
    fn test_json_input_through_registry() {
        let reg = registry();
        let mut ctx = EvalContext::new();
        let x = Value::from(serde_json::json!([1, 2, 3, 4, 5]));
        let y = Value::from(serde_json::json!([2, 4, 6, 8, 10]));

        let fit = reg.call_function("linear_reg", &[x.clone(), y.clone()], &mut ctx);
        let slope = fit.get("slope").and_then(Value::as_number).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);

        let predicted = reg.call_function("predict", &[x, y, Value::Number(6.0)], &mut ctx);
        assert!((predicted.as_number().unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_untyped_errors_are_values() {
        let reg = registry();
        let mut ctx = EvalContext::new();

        let not_array = Value::from(serde_json::json!({"values": [1, 2]}));
        let result = reg.call_function("median", &[not_array], &mut ctx);
        assert_eq!(result.as_error().map(|e| e.code()), Some(codes::NOT_ARRAY));

        let with_text = Value::from(serde_json::json!([1, "2", 3]));
        let result = reg.call_function("sum", &[with_text], &mut ctx);
        assert_eq!(
            result,
            Value::Error(StatsError::InvalidNumber { side: Side::Data, index: 1 })
        );

        let result = reg.call_function(
            "covariance",
            &[Value::from(vec![1.0, 2.0]), Value::from(vec![1.0, 2.0, 3.0])],
            &mut ctx,
        );
        assert_eq!(result.as_error().map(|e| e.code()), Some(codes::LENGTH_MISMATCH));
    }

    #[test]
    fn test_unknown_function() {
        let result = registry().call_function("medain", &[], &mut EvalContext::new());
        match result.as_error() {
            Some(StatsError::UndefinedFunction { similar, .. }) => {
                assert!(similar.iter().any(|s| s == "median"), "got {:?}", similar);
            }
            other => panic!("expected UndefinedFunction, got {:?}", other),
        }
    }

    #[test]
    fn test_help_and_listing() {
        let reg = registry();
        let help = reg.help(Some("linear_reg"));
        assert_eq!(help.get("category").and_then(Value::as_text), Some("stats/regression"));

        let regression = reg.list_functions(Some("stats/regression"));
        assert_eq!(regression.as_list().unwrap().len(), 5);

        let overview = reg.help(None);
        let bivariate = overview
            .get("functions")
            .and_then(|f| f.get("stats/bivariate"))
            .and_then(Value::as_list)
            .unwrap();
        assert_eq!(
            bivariate,
            &[Value::Text("correlation".into()), Value::Text("covariance".into())]
        );
    }

    #[test]
    fn test_regression_result_serde() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        let json = serde_json::to_value(fit).unwrap();
        assert!((json["slope"].as_f64().unwrap() - 2.0).abs() < 1e-12);
        let back: RegressionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, fit);
    }
}
