//! Dataset validation
//!
//! Every statistic is gated by these checks. They fail fast: the first
//! violated check decides the error and later checks never run.
//!
//! A valid element is a finite number. NaN and both infinities are rejected.

use crate::{Side, StatsError, Value};

/// Check a single dataset: non-empty, every element finite.
pub fn validate_dataset(data: &[f64]) -> Result<(), StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    check_finite(data, Side::Data)
}

/// Check a pair of datasets in order: empty, length mismatch, invalid x, invalid y.
pub fn validate_two_datasets(x: &[f64], y: &[f64]) -> Result<(), StatsError> {
    if x.is_empty() || y.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch { x: x.len(), y: y.len() });
    }
    check_finite(x, Side::X)?;
    check_finite(y, Side::Y)
}

/// Extract one dataset from an untyped value.
pub fn dataset_from_value(value: &Value) -> Result<Vec<f64>, StatsError> {
    let items = require_list(value)?;
    if items.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    numbers_of(items, Side::Data)
}

/// Extract a pair of datasets from untyped values.
///
/// Check order: both are lists, neither is empty, equal lengths, every x
/// element is a finite number, every y element is a finite number.
pub fn validate_two_values(x: &Value, y: &Value) -> Result<(Vec<f64>, Vec<f64>), StatsError> {
    let xs = require_list(x)?;
    let ys = require_list(y)?;
    if xs.is_empty() || ys.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch { x: xs.len(), y: ys.len() });
    }
    let x = numbers_of(xs, Side::X)?;
    let y = numbers_of(ys, Side::Y)?;
    Ok((x, y))
}

fn require_list(value: &Value) -> Result<&[Value], StatsError> {
    match value {
        Value::List(items) => Ok(items),
        Value::Error(e) => Err(e.clone()),
        other => Err(StatsError::not_array(other.type_name())),
    }
}

fn check_finite(data: &[f64], side: Side) -> Result<(), StatsError> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::invalid_number(side, index)),
        None => Ok(()),
    }
}

fn numbers_of(items: &[Value], side: Side) -> Result<Vec<f64>, StatsError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Number(n) if n.is_finite() => Ok(*n),
            _ => Err(StatsError::invalid_number(side, index)),
        })
        .collect()
}
