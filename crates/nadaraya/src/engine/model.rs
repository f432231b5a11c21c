//! The Nadaraya-Watson estimator.
//!
//! ## Purpose
//!
//! This module provides [`KernelRegression`], an immutable estimator built
//! from a validated training set and bandwidth. It evaluates the smoothed
//! regression function at arbitrary query points.
//!
//! ## Design notes
//!
//! * **Fail at construction**: All parameter checks happen in `new`; every
//!   evaluation method is infallible.
//! * **Immutable**: No method takes `&mut self`, so one estimator can be shared
//!   across threads and evaluated concurrently without locking.
//! * **Replacement**: Changing the bandwidth builds a new estimator.
//!
//! ## Invariants
//!
//! * The training set is non-empty, length-matched and finite.
//! * The bandwidth is finite and strictly positive.
//! * Predictions have the length and order of the query sequence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{EvaluationConfig, ExecutorOutput, KernelRegExecutor};
use crate::engine::output::KernelRegResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::grid::{linspace, range};
use crate::primitives::errors::InvalidParameterError;

// ============================================================================
// Output Options
// ============================================================================

/// Optional outputs attached to every [`KernelRegResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// Include the total kernel weight per query point.
    pub weight_sums: bool,

    /// Include the marginal effect per query point.
    pub marginal_effects: bool,

    /// Include in-sample diagnostics.
    pub diagnostics: bool,
}

// ============================================================================
// Estimator
// ============================================================================

/// Nadaraya-Watson kernel regression estimator with a Gaussian kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRegression<T> {
    x: Vec<T>,
    y: Vec<T>,
    bandwidth: T,
    options: OutputOptions,
}

impl<T: Float> KernelRegression<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build an estimator from training pairs and a bandwidth.
    ///
    /// Fails if the bandwidth is not finite and strictly positive, if the
    /// training arrays are empty or of different lengths, or if they contain
    /// non-finite values.
    pub fn new(x: &[T], y: &[T], bandwidth: T) -> Result<Self, InvalidParameterError> {
        Self::with_options(x, y, bandwidth, OutputOptions::default())
    }

    /// Build an estimator that attaches the given optional outputs to results.
    pub fn with_options(
        x: &[T],
        y: &[T],
        bandwidth: T,
        options: OutputOptions,
    ) -> Result<Self, InvalidParameterError> {
        Validator::validate_bandwidth(bandwidth)?;
        Validator::validate_inputs(x, y)?;

        debug!(
            "built kernel regression estimator: n={}, bandwidth={}",
            x.len(),
            bandwidth.to_f64().unwrap_or(f64::NAN)
        );

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            bandwidth,
            options,
        })
    }

    /// Build a new estimator on the same training data with another bandwidth.
    pub fn with_bandwidth(&self, bandwidth: T) -> Result<Self, InvalidParameterError> {
        Validator::validate_bandwidth(bandwidth)?;
        Ok(Self {
            x: self.x.clone(),
            y: self.y.clone(),
            bandwidth,
            options: self.options,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Kernel bandwidth.
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Training x-values, in training order.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Training y-values, in training order.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Number of training points.
    pub fn training_points(&self) -> usize {
        self.x.len()
    }

    /// Optional outputs attached by [`predict`](Self::predict).
    pub fn options(&self) -> OutputOptions {
        self.options
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the regression function at each query point.
    ///
    /// Returns one entry per query point, in order. An entry is `None` when no
    /// training point carries numerically non-zero weight at that location.
    pub fn evaluate(&self, query: &[T]) -> Vec<Option<T>> {
        self.run(query, &EvaluationConfig::predictions_only(self.bandwidth))
            .predictions
    }

    /// Evaluate the regression function at a single point.
    pub fn evaluate_at(&self, x_q: T) -> Option<T> {
        self.evaluate(&[x_q]).pop().flatten()
    }

    /// Total kernel weight mass at each query point.
    pub fn weight_sums(&self, query: &[T]) -> Vec<T> {
        let config = EvaluationConfig {
            return_weight_sums: true,
            ..EvaluationConfig::predictions_only(self.bandwidth)
        };
        self.run(query, &config).weight_sums.unwrap_or_default()
    }

    /// Marginal effect dm/dx at each query point, `None` where undefined.
    pub fn marginal_effects(&self, query: &[T]) -> Vec<Option<T>> {
        let config = EvaluationConfig {
            return_marginal_effects: true,
            ..EvaluationConfig::predictions_only(self.bandwidth)
        };
        self.run(query, &config)
            .marginal_effects
            .unwrap_or_default()
    }

    /// Evaluate at the query points and collect the configured optional outputs.
    pub fn predict(&self, query: &[T]) -> KernelRegResult<T> {
        let config = EvaluationConfig {
            bandwidth: self.bandwidth,
            return_weight_sums: self.options.weight_sums,
            return_marginal_effects: self.options.marginal_effects,
        };
        let output = self.run(query, &config);

        let diagnostics = if self.options.diagnostics {
            Some(self.diagnostics())
        } else {
            None
        };

        KernelRegResult {
            x: query.to_vec(),
            y: output.predictions,
            weight_sums: output.weight_sums,
            marginal_effects: output.marginal_effects,
            diagnostics,
            bandwidth: self.bandwidth,
            training_points: self.x.len(),
        }
    }

    /// Predict on `n` evenly spaced points spanning the training x-range.
    pub fn evaluate_grid(&self, n: usize) -> KernelRegResult<T> {
        let grid = match range(&self.x) {
            Some((lo, hi)) => linspace(lo, hi, n),
            None => Vec::new(),
        };
        self.predict(&grid)
    }

    // ========================================================================
    // In-sample Fit
    // ========================================================================

    /// Estimates at the training x-values.
    ///
    /// Each training point contributes weight K(0) = 1 to its own estimate, so
    /// these are always defined.
    pub fn fitted_values(&self) -> Vec<T> {
        self.evaluate(&self.x)
            .into_iter()
            .map(|v| v.unwrap_or_else(T::nan))
            .collect()
    }

    /// In-sample diagnostics (RMSE, MAE, R^2, residual SD).
    pub fn diagnostics(&self) -> Diagnostics<T> {
        Diagnostics::compute(&self.y, &self.fitted_values())
    }

    fn run(&self, query: &[T], config: &EvaluationConfig<T>) -> ExecutorOutput<T> {
        KernelRegExecutor::run_with_config(&self.x, &self.y, query, config)
    }
}
