//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer validates construction parameters, owns the estimator, and
//! runs the evaluation loop over query points.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Evaluation loop.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for evaluation results.
pub mod output;

/// The estimator.
pub mod model;
