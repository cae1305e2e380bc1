//! Mathematical utilities for the algorithm

/// Probability distributions and statistical functions
pub mod probability;
