//! Input validation for estimator construction.
//!
//! ## Purpose
//!
//! This module checks the training data and the bandwidth before an
//! estimator is built, so that evaluation can never fail afterwards.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A validated training set is non-empty, length-matched and finite.
//! * A validated bandwidth is finite and strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not restrict the bandwidth to a UI range.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::InvalidParameterError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator parameters and training data.
///
/// All methods return `Result<(), InvalidParameterError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the training arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), InvalidParameterError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(InvalidParameterError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(InvalidParameterError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(Self::non_finite("x", i, x[i]));
            }
            if !y[i].is_finite() {
                return Err(Self::non_finite("y", i, y[i]));
            }
        }

        Ok(())
    }

    /// Error for the first non-finite training value.
    fn non_finite<T: Float>(
        parameter: &'static str,
        index: usize,
        value: T,
    ) -> InvalidParameterError {
        InvalidParameterError::InvalidNumericValue {
            parameter,
            index,
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), InvalidParameterError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(InvalidParameterError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that a required builder parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, InvalidParameterError> {
        value.ok_or(InvalidParameterError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), InvalidParameterError> {
        if let Some(param) = duplicate_param {
            return Err(InvalidParameterError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
