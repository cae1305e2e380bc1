use crate::analysis::{AdjacencyModel, NeighborDistribution};
use crate::spatial::Color;
use std::collections::HashMap;

/// Memoization cache for normalized neighbor distributions
///
/// Normalizing a color's counts and building its sampler happens once per
/// generation pass; later expansions of the same color reuse the result.
/// Colors with no usable distribution are cached as `None` too.
#[derive(Default)]
pub struct DistributionCache<const N: usize> {
    /// Color to distribution mapping
    distributions: HashMap<Color<N>, Option<NeighborDistribution<N>>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl<const N: usize> DistributionCache<N> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            distributions: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Retrieve the cached distribution for `color` or build it from `model`
    ///
    /// Returns `None` when the model has no neighbor observations for the
    /// color, including colors the model never saw.
    pub fn get_or_build(
        &mut self,
        color: Color<N>,
        model: &AdjacencyModel<N>,
    ) -> Option<&NeighborDistribution<N>> {
        use std::collections::hash_map::Entry;

        match self.distributions.entry(color) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut().as_ref()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry
                    .insert(
                        model
                            .neighbors(&color)
                            .and_then(NeighborDistribution::from_counts),
                    )
                    .as_ref()
            }
        }
    }

    /// Number of cached colors
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Whether nothing is cached yet
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}
