//! High-level API for Nadaraya-Watson kernel regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder for configuring the bandwidth and the optional outputs, ending in
//! `.build(&x, &y)` which validates everything and returns the estimator.
//!
//! ## Design notes
//!
//! * **Explicit bandwidth**: There is no default bandwidth; it must be set.
//! * **Validated**: All parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NadarayaWatsonBuilder`] via `NadarayaWatson::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.return_diagnostics()`, etc.).
//! 3. Call `.build(&x, &y)` to obtain a [`KernelRegression`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::model::{KernelRegression, OutputOptions};
pub use crate::engine::output::KernelRegResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::grid::linspace;
pub use crate::math::kernel::GaussianKernel;
pub use crate::primitives::errors::InvalidParameterError;

/// Fluent builder for configuring a kernel regression estimator.
#[derive(Debug, Clone)]
pub struct NadarayaWatsonBuilder<T> {
    /// Kernel bandwidth, in the units of x.
    pub bandwidth: Option<T>,

    /// Return the total kernel weight per query point.
    pub return_weight_sums: Option<bool>,

    /// Return the marginal effect per query point.
    pub return_marginal_effects: Option<bool>,

    /// Return in-sample diagnostics with every result.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for NadarayaWatsonBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NadarayaWatsonBuilder<T> {
    /// Create a new builder with no parameters set.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            return_weight_sums: None,
            return_marginal_effects: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel bandwidth (required, strictly positive).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Include the total kernel weight per query point in results.
    pub fn return_weight_sums(mut self) -> Self {
        if self.return_weight_sums.is_some() {
            self.duplicate_param = Some("return_weight_sums");
        }
        self.return_weight_sums = Some(true);
        self
    }

    /// Include the marginal effect dm/dx per query point in results.
    pub fn return_marginal_effects(mut self) -> Self {
        if self.return_marginal_effects.is_some() {
            self.duplicate_param = Some("return_marginal_effects");
        }
        self.return_marginal_effects = Some(true);
        self
    }

    /// Include in-sample diagnostics (RMSE, MAE, R^2) in results.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and the training data and build the estimator.
    pub fn build(self, x: &[T], y: &[T]) -> Result<KernelRegression<T>, InvalidParameterError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Bandwidth is always supplied by the caller
        let bandwidth = Validator::validate_required(self.bandwidth, "bandwidth")?;

        let options = OutputOptions {
            weight_sums: self.return_weight_sums.unwrap_or(false),
            marginal_effects: self.return_marginal_effects.unwrap_or(false),
            diagnostics: self.return_diagnostics.unwrap_or(false),
        };

        KernelRegression::with_options(x, y, bandwidth, options)
    }
}
