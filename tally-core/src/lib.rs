//! Tally Core - Fundamental types
//!
//! This crate provides the core types used throughout Tally:
//! - `Value`: Runtime values (numbers, text, lists, objects, errors)
//! - `StatsError`: Structured errors with machine-readable codes
//! - `validate`: Dataset checks shared by every statistic

mod value;
mod error;
pub mod validate;

pub use value::Value;
pub use error::{StatsError, Side, codes};
pub use validate::{validate_dataset, validate_two_datasets, dataset_from_value, validate_two_values};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, StatsError, Side};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_from_vec() {
            let v: Value = vec![1.0, 2.0].into();
            let items = v.as_list().unwrap();
            assert_eq!(items.len(), 2);
            assert_eq!(items[1].as_number(), Some(2.0));
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::Number(0.0).type_name(), "Number");
            assert_eq!(Value::Text(String::new()).type_name(), "Text");
            assert_eq!(Value::Bool(true).type_name(), "Bool");
            assert_eq!(Value::List(vec![]).type_name(), "List");
            assert_eq!(Value::Null.type_name(), "Null");
        }

        #[test]
        fn test_object_get() {
            let obj = Value::object_of_numbers([("slope", 2.0), ("intercept", 0.0)]);
            assert_eq!(obj.get("slope").and_then(Value::as_number), Some(2.0));
            assert!(obj.get("missing").is_none());
            assert!(Value::Null.get("slope").is_none());
        }

        #[test]
        fn test_from_json() {
            let json = serde_json::json!({"data": [1, 2.5, "x", null]});
            let v = Value::from(json);
            let data = v.get("data").and_then(Value::as_list).unwrap();
            assert_eq!(data[0], Value::Number(1.0));
            assert_eq!(data[1], Value::Number(2.5));
            assert_eq!(data[2], Value::Text("x".to_string()));
            assert!(data[3].is_null());
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::from(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
            assert_eq!(Value::from(vec![0.0; 8]).to_string(), "[8]");
            let err = Value::Error(StatsError::EmptyDataset);
            assert_eq!(err.to_string(), "#ERROR: EMPTY_DATASET");
        }

        #[test]
        fn test_serde_tagging() {
            let json = serde_json::to_value(Value::Number(1.5)).unwrap();
            assert_eq!(json, serde_json::json!({"type": "Number", "value": 1.5}));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(StatsError::EmptyDataset.code(), codes::EMPTY_DATASET);
            assert_eq!(StatsError::DegenerateRegression.code(), codes::DEGENERATE_REGRESSION);
            assert_eq!(
                StatsError::ZeroVariance { side: Side::Y }.code(),
                codes::ZERO_VARIANCE
            );
            assert_eq!(StatsError::PercentileRange { p: 101.0 }.code(), codes::PERCENTILE_RANGE);
        }

        #[test]
        fn test_error_display() {
            let err = StatsError::invalid_number(Side::Y, 3);
            assert_eq!(err.to_string(), "y contains an invalid number at index 3");
            let err = StatsError::ZeroVariance { side: Side::X };
            assert!(err.to_string().contains("x has zero variance"));
        }

        #[test]
        fn test_error_suggestion() {
            let err = StatsError::undefined_func("maen", vec!["mean".to_string()]);
            assert_eq!(err.suggestion().unwrap(), "Similar: mean. Use help() for full list.");
            assert!(StatsError::ZeroVariance { side: Side::X }.suggestion().is_none());
        }

        #[test]
        fn test_error_serde() {
            let err = StatsError::LengthMismatch { x: 2, y: 3 };
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json, serde_json::json!({"kind": "length_mismatch", "x": 2, "y": 3}));
            let back: StatsError = serde_json::from_value(json).unwrap();
            assert_eq!(back, err);
        }
    }
}
