//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the per-point Nadaraya-Watson estimate: the kernel
//! weighted average of the training responses around a single query point,
//! together with its total weight mass and, on request, its marginal effect.
//!
//! ## Design notes
//!
//! * **Single pass**: All sums are accumulated in one sweep over the training
//!   data, in training order, so repeated evaluations are bit-for-bit equal.
//! * **Anchored average**: Responses are accumulated relative to the first
//!   training response. The result is the same weighted average S / W, but a
//!   constant response is reproduced exactly and cancellation is reduced.
//! * **Zero mass**: A weight sum of exactly zero (every kernel weight
//!   underflowed) leaves the estimate undefined instead of dividing by zero.
//!   Terms with zero weight never enter the sums.
//! * **Overflow**: When differences to the anchor overflow, the estimate is
//!   recomputed as a running convex combination of the responses.
//!
//! ## Key concepts
//!
//! * **Estimate**: m(x_q) = sum w_i y_i / sum w_i, w_i = K((x_i - x_q) / h).
//! * **Marginal effect**: dm/dx_q = sum w_i u_i (y_i - m) / (h * sum w_i).
//!
//! ## Invariants
//!
//! * A defined estimate lies within [min y, max y] up to rounding.
//! * An undefined estimate always has an undefined marginal effect.
//! * A defined marginal effect is finite.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (responsibility of the engine).
//! * This module does not fit local polynomials of degree >= 1.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;

// ============================================================================
// Point Estimate
// ============================================================================

/// Estimate of the regression function at a single query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEstimate<T> {
    /// Weighted average of the responses, `None` when the weight sum is zero.
    pub value: Option<T>,

    /// Total kernel weight mass W.
    pub weight_sum: T,

    /// Derivative of the estimate with respect to the query point.
    ///
    /// Only populated when requested and when `value` is defined.
    pub marginal_effect: Option<T>,
}

impl<T: Float> PointEstimate<T> {
    /// Estimate for a query point with no effective support.
    #[inline]
    pub fn undefined(weight_sum: T) -> Self {
        Self {
            value: None,
            weight_sum,
            marginal_effect: None,
        }
    }

    /// Whether the weighted average is defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to estimate any query point.
#[derive(Debug, Clone, Copy)]
pub struct RegressionContext<'a, T: Float> {
    /// Training x-values (independent variable), in training order.
    pub x: &'a [T],

    /// Training y-values (dependent variable), in training order.
    pub y: &'a [T],

    /// Kernel bandwidth, in the units of x.
    pub bandwidth: T,

    /// Weight function (kernel).
    pub kernel: GaussianKernel,

    /// Whether to compute the marginal effect.
    pub compute_marginal_effect: bool,
}

impl<'a, T: Float> RegressionContext<'a, T> {
    /// Estimate the regression function at `x_q`.
    ///
    /// The training slices must be non-empty and of equal length.
    pub fn fit(&self, x_q: T) -> PointEstimate<T> {
        let anchor = match self.y.first() {
            Some(&y0) => y0,
            None => return PointEstimate::undefined(T::zero()),
        };

        let mut sum_w = T::zero();
        let mut sum_wd = T::zero();
        let mut sum_wu = T::zero();
        let mut sum_wud = T::zero();

        for (&xi, &yi) in self.x.iter().zip(self.y.iter()) {
            let u = self.kernel.scaled_distance(xi, x_q, self.bandwidth);
            let w = self.kernel.compute_weight(u);

            // NaN weights still reach the mass so the point ends up undefined.
            sum_w = sum_w + w;

            // Zero weights are skipped so 0 * inf never enters the sums.
            if !(w > T::zero()) {
                continue;
            }

            let d = yi - anchor;
            sum_wd = sum_wd + w * d;

            if self.compute_marginal_effect {
                let wu = w * u;
                sum_wu = sum_wu + wu;
                sum_wud = sum_wud + wu * d;
            }
        }

        if sum_w == T::zero() || !sum_w.is_finite() {
            return PointEstimate::undefined(sum_w);
        }

        let offset = sum_wd / sum_w;
        let anchored = anchor + offset;

        let (value, marginal_effect) = if anchored.is_finite() {
            let marginal_effect = self
                .compute_marginal_effect
                .then(|| (sum_wud - offset * sum_wu) / (self.bandwidth * sum_w));
            (anchored, marginal_effect)
        } else {
            // Differences to the anchor overflowed (responses near the float limits).
            self.fit_running_mean(x_q, sum_w)
        };

        PointEstimate {
            value: Some(value),
            weight_sum: sum_w,
            marginal_effect: marginal_effect.filter(|v| v.is_finite()),
        }
    }

    /// Weighted mean as a running convex combination of the responses.
    ///
    /// The marginal effect is accumulated on halved residuals and rescaled at
    /// the end; it may still leave the float range, in which case it is
    /// dropped by the caller.
    fn fit_running_mean(&self, x_q: T, sum_w: T) -> (T, Option<T>) {
        let mut mean = T::zero();
        let mut mass = T::zero();
        let mut lo = T::infinity();
        let mut hi = T::neg_infinity();

        for (&xi, &yi) in self.x.iter().zip(self.y.iter()) {
            let w = self
                .kernel
                .compute_weight(self.kernel.scaled_distance(xi, x_q, self.bandwidth));
            if !(w > T::zero()) {
                continue;
            }
            mass = mass + w;
            lo = lo.min(yi);
            hi = hi.max(yi);
            let share = w / mass;
            // Clamped to the responses seen so far; rounding may not leave the range.
            mean = (mean * (T::one() - share) + yi * share).max(lo).min(hi);
        }

        if !self.compute_marginal_effect {
            return (mean, None);
        }

        let half = T::from(0.5).unwrap();
        let mut half_slope = T::zero();
        for (&xi, &yi) in self.x.iter().zip(self.y.iter()) {
            let u = self.kernel.scaled_distance(xi, x_q, self.bandwidth);
            let w = self.kernel.compute_weight(u);
            if !(w > T::zero()) {
                continue;
            }
            half_slope = half_slope + (w / sum_w) * u * (yi * half - mean * half);
        }

        (mean, Some(half_slope / self.bandwidth * (T::one() + T::one())))
    }
}
