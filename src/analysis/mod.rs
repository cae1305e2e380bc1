//! Analysis modules for learning color adjacency from source images

/// Neighbor-pair frequency model training
pub mod adjacency;
/// Normalized neighbor-color distributions for sampling
pub mod distribution;

pub use adjacency::AdjacencyModel;
pub use distribution::NeighborDistribution;
