//! Diagnostic metrics for kernel regression fit quality.
//!
//! ## Purpose
//!
//! This module evaluates how well the smoothed curve reproduces the training
//! responses when the estimator is evaluated at the training x-values.
//!
//! ## Design notes
//!
//! * **In-sample**: Metrics compare y_i with m(x_i). Every training point
//!   carries its own weight K(0) = 1, so in-sample estimates are always defined.
//! * **Correlation R^2**: R^2 is the squared correlation between responses and
//!   fitted values, which stays in [0, 1] for a local-constant smoother.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: RMSE and MAE measure in-sample error.
//! * **Goodness-of-Fit**: R^2 = (sum (y - ybar)(m - mbar))^2 / (sum (y - ybar)^2 * sum (m - mbar)^2).
//! * **Residual SD**: Sample standard deviation of the residuals.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are non-negative, or NaN when a residual is NaN.
//! * R^2 is `None` exactly when responses or fitted values have zero variance.
//!
//! ## Non-goals
//!
//! * This module does not perform bandwidth selection.
//! * This module does not compute confidence intervals or p-values.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing kernel regression fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of training points the metrics were computed on.
    pub n: usize,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Squared correlation between responses and fitted values.
    pub r_squared: Option<T>,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostic statistics from responses and in-sample fitted values.
    pub fn compute(y: &[T], y_fit: &[T]) -> Self {
        let (sum_r, sum_r_sq, sum_abs_r) = y.iter().zip(y_fit.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(sum_r, sum_r_sq, sum_abs_r), (&yi, &fi)| {
                let r = yi - fi;
                (sum_r + r, sum_r_sq + r * r, sum_abs_r + r.abs())
            },
        );

        let n = y.len().min(y_fit.len());
        if n == 0 {
            return Diagnostics {
                n,
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: None,
                residual_sd: T::zero(),
            };
        }
        let n_t = T::from(n).unwrap_or(T::one());

        let rmse = (sum_r_sq / n_t).sqrt();
        let mae = sum_abs_r / n_t;

        // Two-pass variance: never negative, and NaN residuals propagate.
        let residual_sd = if n > 1 {
            let mean_r = sum_r / n_t;
            let ss_r = y
                .iter()
                .zip(y_fit.iter())
                .fold(T::zero(), |acc, (&yi, &fi)| {
                    let c = (yi - fi) - mean_r;
                    acc + c * c
                });
            (ss_r / (n_t - T::one())).sqrt()
        } else {
            rmse
        };

        Diagnostics {
            n,
            rmse,
            mae,
            r_squared: Self::calculate_r_squared(y, y_fit),
            residual_sd,
        }
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// Compute R^2 as the squared correlation of `y` and `y_fit`.
    pub fn calculate_r_squared(y: &[T], y_fit: &[T]) -> Option<T> {
        let n = y.len().min(y_fit.len());
        if n == 0 {
            return None;
        }
        let n_t = T::from(n).unwrap_or(T::one());

        let y_mean = y[..n].iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let f_mean = y_fit[..n].iter().fold(T::zero(), |acc, &v| acc + v) / n_t;

        let (cross, ss_y, ss_f) = y.iter().zip(y_fit.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(cross, ss_y, ss_f), (&yi, &fi)| {
                let dy = yi - y_mean;
                let df = fi - f_mean;
                (cross + dy * df, ss_y + dy * dy, ss_f + df * df)
            },
        );

        let denom = ss_y * ss_f;
        if denom <= T::zero() || !denom.is_finite() {
            return None;
        }

        Some(cross * cross / denom)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Kernel Regression Diagnostics:")?;
        writeln!(f, "  Points:       {}", self.n)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        match self.r_squared {
            Some(r2) => writeln!(f, "  R²:           {:.6}", r2)?,
            None => writeln!(f, "  R²:           undefined")?,
        }
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)?;

        Ok(())
    }
}
