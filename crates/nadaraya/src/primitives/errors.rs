//! Error types for kernel regression construction.
//!
//! ## Purpose
//!
//! This module defines the single error type of the crate. Every failure is a
//! rejected construction parameter: evaluation itself never fails, it reports
//! per-point undefined predictions as data instead.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value or the lengths involved.
//! * **Addressable**: [`InvalidParameterError::parameter`] names the input to fix.
//! * **No-std**: Plain data variants, no allocation required.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for the caller to correct input.
//! * Errors are only produced at construction time.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not translate errors into user-facing messages.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error raised when a kernel regression estimator cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    /// Training arrays are empty; the estimator requires at least 1 point.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Bandwidth must be strictly positive and finite.
    InvalidBandwidth(f64),

    /// Training data contains NaN or infinite values.
    InvalidNumericValue {
        /// Training array holding the value (`"x"` or `"y"`).
        parameter: &'static str,
        /// Position of the first offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl InvalidParameterError {
    /// Name of the parameter the caller has to correct.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::EmptyInput | Self::MismatchedInputs { .. } => "x, y",
            Self::InvalidBandwidth(_) => "bandwidth",
            Self::InvalidNumericValue { parameter, .. }
            | Self::MissingParameter { parameter }
            | Self::DuplicateParameter { parameter } => parameter,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for InvalidParameterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Training data is empty (need at least 1 point)"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidBandwidth(h) => {
                write!(f, "Invalid bandwidth: {h} (must be > 0 and finite)")
            }
            Self::InvalidNumericValue {
                parameter,
                index,
                value,
            } => write!(f, "Invalid numeric value: {parameter}[{index}]={value}"),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for InvalidParameterError {}
