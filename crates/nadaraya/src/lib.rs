//! # nadaraya — Nadaraya-Watson Kernel Regression for Rust
//!
//! A small, dependency-light implementation of the Nadaraya-Watson kernel
//! regression estimator for one-dimensional data, with a Gaussian kernel and
//! an externally supplied bandwidth.
//!
//! ## What is Nadaraya-Watson regression?
//!
//! The Nadaraya-Watson estimator is a nonparametric regression method. At
//! every query point it returns a weighted average of the observed responses,
//! where each observation is weighted by a kernel of its distance to the query
//! point:
//!
//! ```text
//! m(x) = sum_i K((x_i - x) / h) * y_i  /  sum_i K((x_i - x) / h),   K(u) = exp(-u^2 / 2)
//! ```
//!
//! The bandwidth `h` controls the trade-off between locality and smoothness:
//! a small `h` tracks nearby observations closely and produces a jagged curve,
//! a large `h` spreads weight broadly and approaches the global mean of `y`.
//!
//! ## Quick Start
//!
//! ```rust
//! use nadaraya::prelude::*;
//!
//! let x = vec![0.0, 10.0];
//! let y = vec![0.0, 10.0];
//!
//! // Build the estimator
//! let model = NadarayaWatson::new()
//!     .bandwidth(1.0)
//!     .build(&x, &y)?;
//!
//! // Evaluate the regression function at arbitrary query points
//! let predictions = model.predict(&[0.0, 5.0, 10.0]);
//!
//! println!("{}", predictions);
//! # Result::<(), InvalidParameterError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Training points: 2
//!   Query points:    3
//!   Kernel:          Gaussian
//!   Bandwidth:       1
//!
//! Predictions:
//!        X        Y_hat
//! ---------------------
//!     0.00     0.000000
//!     5.00     5.000000
//!    10.00    10.000000
//! ```
//!
//! ## Undefined Predictions
//!
//! When a query point is so far from every observation (relative to `h`) that
//! all kernel weights underflow to zero, the weighted average is undefined.
//! This is not an error: [`evaluate`](crate::prelude::KernelRegression::evaluate)
//! returns `None` for that point and keeps going.
//!
//! ```rust
//! use nadaraya::prelude::*;
//!
//! let model = KernelRegression::new(&[0.0, 1.0], &[3.0, 5.0], 0.001)?;
//! let predictions = model.evaluate(&[0.0, 0.5, 1.0]);
//!
//! assert_eq!(predictions[0], Some(3.0));
//! assert_eq!(predictions[1], None);
//! assert_eq!(predictions[2], Some(5.0));
//! # Result::<(), InvalidParameterError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Only construction can fail. `build` and `KernelRegression::new` return
//! `Result<KernelRegression<T>, InvalidParameterError>`:
//!
//! ```rust
//! use nadaraya::prelude::*;
//!
//! match KernelRegression::new(&[1.0, 2.0], &[1.0, 2.0], 0.0) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         assert_eq!(e.parameter(), "bandwidth");
//!         eprintln!("Construction failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! nadaraya = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Nadaraya, E. A. (1964). "On Estimating Regression"
//! - Watson, G. S. (1964). "Smooth Regression Analysis"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - kernel and grids.
mod math;

// Layer 3: Algorithms - the per-point estimate.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation, evaluation loop and the estimator.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        linspace, Diagnostics, GaussianKernel, InvalidParameterError, KernelRegResult,
        KernelRegression, NadarayaWatsonBuilder as NadarayaWatson, OutputOptions,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
