//! Layer 3: Algorithms
//!
//! This layer implements the Nadaraya-Watson estimate for a single query
//! point. It is orchestrated by the engine layer.

// Kernel-weighted local-constant regression.
pub mod regression;
