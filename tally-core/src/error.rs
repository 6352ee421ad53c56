//! Structured errors
//!
//! Every failure in Tally is a `StatsError` value. Errors carry a stable
//! machine-readable code and serialize with a `kind` tag, so they can travel
//! inside a `Value` just like any other result.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_ARRAY: &str = "NOT_ARRAY";
    pub const EMPTY_DATASET: &str = "EMPTY_DATASET";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
    pub const PERCENTILE_RANGE: &str = "PERCENTILE_RANGE";
    pub const ZERO_VARIANCE: &str = "ZERO_VARIANCE";
    pub const DEGENERATE_REGRESSION: &str = "DEGENERATE_REGRESSION";
    // Function catalog
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
}

/// Which dataset an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The single dataset of a one-dataset operation
    Data,
    /// The independent variable of a pair
    X,
    /// The dependent variable of a pair
    Y,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Data => write!(f, "dataset"),
            Side::X => write!(f, "x"),
            Side::Y => write!(f, "y"),
        }
    }
}

/// Error type for every statistics operation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsError {
    #[error("Expected a list of numbers, got {got}")]
    NotArray { got: String },

    #[error("Dataset must contain at least one value")]
    EmptyDataset,

    #[error("{side} contains an invalid number at index {index}")]
    InvalidNumber { side: Side, index: usize },

    #[error("Datasets must have equal length: {x} vs {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Percentile must be between 0 and 100, got {p}")]
    PercentileRange { p: f64 },

    #[error("Correlation is undefined: {side} has zero variance")]
    ZeroVariance { side: Side },

    #[error("Regression is undefined: all x values are identical")]
    DegenerateRegression,

    #[error("{func}() expects {expected} arguments, got {got}")]
    ArgCount { func: String, expected: usize, got: usize },

    #[error("{func}() argument '{arg}': expected {expected}, got {got}")]
    ArgType { func: String, arg: String, expected: String, got: String },

    #[error("Unknown function: {name}")]
    UndefinedFunction { name: String, similar: Vec<String> },
}

impl StatsError {
    // ========== Constructors ==========

    pub fn not_array(got: impl Into<String>) -> Self {
        Self::NotArray { got: got.into() }
    }

    pub fn invalid_number(side: Side, index: usize) -> Self {
        Self::InvalidNumber { side, index }
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::ArgCount { func: func.to_string(), expected, got }
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::ArgType {
            func: func.to_string(),
            arg: arg.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub fn undefined_func(name: &str, similar: Vec<String>) -> Self {
        Self::UndefinedFunction { name: name.to_string(), similar }
    }

    // ========== Accessors ==========

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotArray { .. } => codes::NOT_ARRAY,
            Self::EmptyDataset => codes::EMPTY_DATASET,
            Self::InvalidNumber { .. } => codes::INVALID_NUMBER,
            Self::LengthMismatch { .. } => codes::LENGTH_MISMATCH,
            Self::PercentileRange { .. } => codes::PERCENTILE_RANGE,
            Self::ZeroVariance { .. } => codes::ZERO_VARIANCE,
            Self::DegenerateRegression => codes::DEGENERATE_REGRESSION,
            Self::ArgCount { .. } => codes::ARG_COUNT,
            Self::ArgType { .. } => codes::ARG_TYPE,
            Self::UndefinedFunction { .. } => codes::UNDEFINED_FUNC,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotArray { .. } => Some("Pass the dataset as a list, e.g. [1, 2, 3]".to_string()),
            Self::EmptyDataset => Some("Provide at least one value".to_string()),
            Self::InvalidNumber { .. } => Some("Remove NaN, infinite or non-numeric entries".to_string()),
            Self::LengthMismatch { .. } => Some("Pair every x value with exactly one y value".to_string()),
            Self::PercentileRange { .. } => Some("Use a percentile in 0..=100".to_string()),
            Self::ZeroVariance { .. } => None,
            Self::DegenerateRegression => Some("Provide at least two distinct x values".to_string()),
            Self::ArgCount { func, .. } => Some(format!("Use help('{}') for usage", func)),
            Self::ArgType { .. } => None,
            Self::UndefinedFunction { similar, .. } if !similar.is_empty() => Some(format!(
                "Similar: {}. Use help() for full list.",
                similar.join(", ")
            )),
            Self::UndefinedFunction { .. } => Some("Use help() for full list.".to_string()),
        }
    }
}
