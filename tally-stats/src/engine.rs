//! The `Statistics` value type
//!
//! Holds one validated dataset and answers every single-dataset statistic on
//! demand. Nothing is cached: each call recomputes from the stored copy, and
//! sorting always works on a fresh copy. Two-dataset methods use the stored
//! dataset as `x`.

use crate::helpers::{extract_dataset, mean, sum, variance};
use crate::position::Quartiles;
use crate::regression::RegressionResult;
use crate::{bivariate, central, position, regression};
use serde::Serialize;
use tally_core::{dataset_from_value, validate_dataset, StatsError, Value};

/// A validated, immutable dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    data: Vec<f64>,
}

impl Statistics {
    /// Validate `data` and store a private copy of it.
    ///
    /// # Errors
    /// [`StatsError::EmptyDataset`] or [`StatsError::InvalidNumber`].
    pub fn new(data: &[f64]) -> Result<Self, StatsError> {
        validate_dataset(data)?;
        Ok(Self::capture(data.to_vec()))
    }

    /// Build from an untyped value, which must be a list of finite numbers.
    pub fn from_value(value: &Value) -> Result<Self, StatsError> {
        dataset_from_value(value).map(Self::capture)
    }

    pub(crate) fn from_args(args: &[Value], func: &str) -> Result<Self, StatsError> {
        extract_dataset(args, func).map(Self::capture)
    }

    fn capture(data: Vec<f64>) -> Self {
        tracing::debug!(count = data.len(), "captured dataset");
        Self { data }
    }

    /// The stored dataset
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// An owned copy of the stored dataset
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    // ========== Single dataset ==========

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn sum(&self) -> f64 {
        sum(&self.data)
    }

    pub fn mean(&self) -> f64 {
        mean(&self.data)
    }

    pub fn median(&self) -> f64 {
        central::median(&self.data)
    }

    /// Most frequent values, ascending; every distinct value when all tie
    pub fn mode(&self) -> Vec<f64> {
        central::mode(&self.data)
    }

    /// Population variance
    pub fn variance(&self) -> f64 {
        variance(&self.data)
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        position::min(&self.data)
    }

    pub fn max(&self) -> f64 {
        position::max(&self.data)
    }

    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// # Errors
    /// [`StatsError::PercentileRange`] unless `0 <= p <= 100`.
    pub fn percentile(&self, p: f64) -> Result<f64, StatsError> {
        position::percentile(&self.data, p)
    }

    pub fn quartiles(&self) -> Quartiles {
        position::quartiles(&self.data)
    }

    // ========== Against a second dataset ==========

    pub fn covariance(&self, y: &[f64]) -> Result<f64, StatsError> {
        bivariate::covariance(&self.data, y)
    }

    pub fn correlation(&self, y: &[f64]) -> Result<f64, StatsError> {
        bivariate::correlation(&self.data, y)
    }

    pub fn linear_regression(&self, y: &[f64]) -> Result<RegressionResult, StatsError> {
        regression::linear_regression(&self.data, y)
    }
}

impl TryFrom<Vec<f64>> for Statistics {
    type Error = StatsError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        validate_dataset(&data)?;
        Ok(Self::capture(data))
    }
}

impl TryFrom<&[f64]> for Statistics {
    type Error = StatsError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
