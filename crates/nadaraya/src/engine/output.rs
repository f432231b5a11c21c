//! Output types for kernel regression evaluation.
//!
//! ## Purpose
//!
//! This module defines the `KernelRegResult` struct, which pairs the query
//! points with their predictions and the optional per-point outputs.
//!
//! ## Design notes
//!
//! * **Explicit undefined**: Predictions are `Option<T>`; `None` marks a query
//!   point with zero kernel weight mass.
//! * **Memory Efficiency**: All optional outputs use `Option<Vec<_>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the query sequence.
//! * Query points are stored in the order they were supplied.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::kernel::GaussianKernel;

// ============================================================================
// Result Structure
// ============================================================================

/// Kernel regression output for a sequence of query points.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRegResult<T> {
    /// Query points, in input order.
    pub x: Vec<T>,

    /// Predictions, `None` where undefined.
    pub y: Vec<Option<T>>,

    /// Total kernel weight mass at each query point.
    pub weight_sums: Option<Vec<T>>,

    /// Marginal effect dm/dx at each query point.
    pub marginal_effects: Option<Vec<Option<T>>>,

    /// In-sample diagnostics of the estimator.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Bandwidth used for the evaluation.
    pub bandwidth: T,

    /// Number of training points behind the estimator.
    pub training_points: usize,
}

impl<T: Float> KernelRegResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of undefined predictions.
    pub fn undefined_count(&self) -> usize {
        self.y.iter().filter(|v| v.is_none()).count()
    }

    /// Check if any prediction is undefined.
    pub fn has_undefined(&self) -> bool {
        self.y.iter().any(Option::is_none)
    }

    /// Check if marginal effects were computed.
    pub fn has_marginal_effects(&self) -> bool {
        self.marginal_effects.is_some()
    }

    /// Predictions with undefined points mapped to NaN.
    pub fn y_or_nan(&self) -> Vec<T> {
        self.y.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
    }

    /// Iterate over the (x, prediction) pairs whose prediction is defined.
    pub fn defined_points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter_map(|(&x, y)| y.map(|y| (x, y)))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Write an optional value right-aligned in a column of `width`.
fn write_optional<T: Display>(
    f: &mut Formatter<'_>,
    value: Option<T>,
    width: usize,
    precision: usize,
) -> Result {
    match value {
        Some(v) => write!(f, " {:>width$.precision$}", v),
        None => write!(f, " {:>width$}", "undefined"),
    }
}

impl<T: Float + Display + Debug> Display for KernelRegResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Training points: {}", self.training_points)?;
        writeln!(f, "  Query points:    {}", self.x.len())?;
        writeln!(f, "  Kernel:          {}", GaussianKernel.name())?;
        writeln!(f, "  Bandwidth:       {}", self.bandwidth)?;
        if self.has_undefined() {
            writeln!(f, "  Undefined:       {}", self.undefined_count())?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Predictions:")?;

        let has_weights = self.weight_sums.is_some();
        let has_effects = self.has_marginal_effects();

        // Build header
        write!(f, "{:>8} {:>12}", "X", "Y_hat")?;
        if has_weights {
            write!(f, " {:>12}", "Weight_Sum")?;
        }
        if has_effects {
            write!(f, " {:>12}", "dY/dX")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_weights { 13 } else { 0 } + if has_effects { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2}", self.x[idx])?;
            write_optional(f, self.y[idx], 12, 6)?;

            if let Some(sums) = &self.weight_sums {
                write!(f, " {:>12.6}", sums[idx])?;
            }
            if let Some(effects) = &self.marginal_effects {
                write_optional(f, effects[idx], 12, 6)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
