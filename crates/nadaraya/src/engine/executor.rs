//! Execution engine for kernel regression evaluation.
//!
//! ## Purpose
//!
//! This module runs the per-point estimate over a sequence of query points
//! and gathers the optional outputs (weight sums, marginal effects) into
//! parallel vectors.
//!
//! ## Design notes
//!
//! * Query points are processed in input order; outputs align index by index.
//! * Undefined estimates are counted and logged, never turned into errors.
//! * Optional outputs are only allocated when requested.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Every populated output vector has the length of the query sequence.
//! * `undefined` equals the number of `None` entries in `predictions`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::RegressionContext;
use crate::math::kernel::GaussianKernel;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single evaluation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationConfig<T> {
    /// Kernel bandwidth (validated, strictly positive).
    pub bandwidth: T,

    /// Whether to collect the total kernel weight per query point.
    pub return_weight_sums: bool,

    /// Whether to compute the marginal effect per query point.
    pub return_marginal_effects: bool,
}

impl<T: Float> EvaluationConfig<T> {
    /// Configuration that only produces predictions.
    pub fn predictions_only(bandwidth: T) -> Self {
        Self {
            bandwidth,
            return_weight_sums: false,
            return_marginal_effects: false,
        }
    }
}

/// Output from an evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Prediction per query point, `None` where undefined.
    pub predictions: Vec<Option<T>>,

    /// Total kernel weight per query point (if requested).
    pub weight_sums: Option<Vec<T>>,

    /// Marginal effect per query point (if requested).
    pub marginal_effects: Option<Vec<Option<T>>>,

    /// Number of undefined predictions.
    pub undefined: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Evaluation loop shared by every estimator entry point.
pub struct KernelRegExecutor;

impl KernelRegExecutor {
    /// Evaluate the estimator at every query point.
    ///
    /// The training slices must already be validated.
    pub fn run_with_config<T: Float>(
        x: &[T],
        y: &[T],
        query: &[T],
        config: &EvaluationConfig<T>,
    ) -> ExecutorOutput<T> {
        let context = RegressionContext {
            x,
            y,
            bandwidth: config.bandwidth,
            kernel: GaussianKernel,
            compute_marginal_effect: config.return_marginal_effects,
        };

        let m = query.len();
        let mut predictions = Vec::with_capacity(m);
        let mut weight_sums = config.return_weight_sums.then(|| Vec::with_capacity(m));
        let mut marginal_effects = config
            .return_marginal_effects
            .then(|| Vec::with_capacity(m));
        let mut undefined = 0usize;

        for (i, &x_q) in query.iter().enumerate() {
            let estimate = context.fit(x_q);

            if !estimate.is_defined() {
                undefined += 1;
                trace!(
                    "query[{}]={} has zero kernel weight mass; prediction undefined",
                    i,
                    x_q.to_f64().unwrap_or(f64::NAN)
                );
            }

            predictions.push(estimate.value);
            if let Some(sums) = weight_sums.as_mut() {
                sums.push(estimate.weight_sum);
            }
            if let Some(effects) = marginal_effects.as_mut() {
                effects.push(estimate.marginal_effect);
            }
        }

        debug!(
            "evaluated {} query points against {} training points (bandwidth={}, undefined={})",
            m,
            x.len(),
            config.bandwidth.to_f64().unwrap_or(f64::NAN),
            undefined
        );

        ExecutorOutput {
            predictions,
            weight_sums,
            marginal_effects,
            undefined,
        }
    }
}
