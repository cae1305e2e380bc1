//! Texture synthesis from a Markov model of pixel color adjacency
//!
//! The system counts, for every color of a source image, which colors appear
//! among its 8-connected neighbors. It then grows a new image from a random
//! seed pixel, sampling each new pixel's color from the learned distribution
//! of the already-drawn pixel next to it.

#![forbid(unsafe_code)]

/// Frontier expansion, drawn-state tracking and generation
pub mod algorithm;
/// Adjacency model training and neighbor distributions
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for probability calculations
pub mod math;
/// Colors, pixel grids and neighborhoods
pub mod spatial;

pub use io::error::{PixelChainError, Result};
