//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the estimator:
//! - The Gaussian kernel for distance-based weighting
//! - Evenly spaced query grids
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel.
pub mod kernel;

/// Query grid construction.
pub mod grid;
