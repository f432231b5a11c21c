//! Gaussian kernel for Nadaraya-Watson weighting.
//!
//! ## Purpose
//!
//! This module provides the kernel that maps the scaled distance between a
//! training point and a query point to a non-negative weight.
//!
//! ## Design notes
//!
//! * **Unnormalized**: K(u) = exp(-u^2 / 2). The 1/sqrt(2*pi) constant cancels
//!   in the estimator's ratio and is never applied.
//! * **No cutoff**: Far points are not clamped to a minimum weight; they are
//!   allowed to underflow to exactly zero so the estimator can detect
//!   neighborhoods with no effective support.
//! * **Scaling**: u = (x_i - x_q) / h, with h in the units of x.
//!
//! ## Invariants
//!
//! * K(u) is in [0, 1], K(0) = 1 and K(u) = K(-u).
//! * K is strictly decreasing in |u| until it underflows to zero.
//!
//! ## Non-goals
//!
//! * This module does not offer alternative kernels.
//! * This module does not handle bandwidth selection logic.

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Gaussian kernel: K(u) = exp(-u^2 / 2).
///
/// The kernel has unbounded support; its value for large |u| is limited only
/// by floating-point underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GaussianKernel;

impl GaussianKernel {
    /// Get the name of the kernel, as shown in result summaries.
    #[inline]
    pub const fn name(&self) -> &'static str {
        "Gaussian"
    }

    /// Compute the unnormalized weight K(u) for a scaled distance `u`.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let half = T::from(0.5).unwrap();
        (-(half * u * u)).exp()
    }

    /// Scaled distance u = (x_i - x_q) / h.
    #[inline]
    pub fn scaled_distance<T: Float>(&self, x_i: T, x_q: T, bandwidth: T) -> T {
        (x_i - x_q) / bandwidth
    }
}
