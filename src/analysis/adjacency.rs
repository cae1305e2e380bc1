//! Adjacency-frequency model learned from 8-connected neighbor pairs
//!
//! For every pixel of a source grid the model counts how often each color
//! appears among its in-bounds 8-neighbors. Border pixels contribute fewer
//! observations than interior pixels since out-of-bounds neighbors are
//! skipped rather than padded or wrapped.

use std::collections::BTreeMap;

use crate::spatial::neighbors::neighbors;
use crate::spatial::color::DEFAULT_CHANNELS;
use crate::spatial::{Color, PixelGrid};

/// Neighbor color occurrence counts for a single color
pub type NeighborCounts<const N: usize> = BTreeMap<Color<N>, u64>;

/// Mapping from each observed color to the colors observed next to it
///
/// Ordered maps keep key iteration stable, so seeded generation is
/// reproducible across runs. The keys are also kept in a sorted vector so
/// seeding can index a random key directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyModel<const N: usize = DEFAULT_CHANNELS> {
    table: BTreeMap<Color<N>, NeighborCounts<N>>,
    keys: Vec<Color<N>>,
    observations: u64,
}

impl<const N: usize> AdjacencyModel<N> {
    /// Create an empty model
    pub const fn new() -> Self {
        Self {
            table: BTreeMap::new(),
            keys: Vec::new(),
            observations: 0,
        }
    }

    /// Learn neighbor counts from every pixel of `grid`
    ///
    /// Every color in the grid becomes a key, including colors whose only
    /// pixels have no in-bounds neighbors. A zero-area grid yields an empty
    /// model.
    pub fn train(grid: &PixelGrid<N>) -> Self {
        let mut model = Self::new();
        let (rows, cols) = (grid.height(), grid.width());

        for (position, color) in grid.indexed_pixels() {
            model.insert_color(color);
            for neighbor in neighbors(position, rows, cols) {
                if let Some(neighbor_color) = grid.get(neighbor) {
                    model.record(color, neighbor_color);
                }
            }
        }

        model
    }

    /// Register `color` as a key without recording any neighbor
    pub fn insert_color(&mut self, color: Color<N>) {
        self.counts_mut(color);
    }

    /// Record one observation of `neighbor` next to `color`
    pub fn record(&mut self, color: Color<N>, neighbor: Color<N>) {
        *self.counts_mut(color).entry(neighbor).or_insert(0) += 1;
        self.observations += 1;
    }

    fn counts_mut(&mut self, color: Color<N>) -> &mut NeighborCounts<N> {
        if let Err(slot) = self.keys.binary_search(&color) {
            self.keys.insert(slot, color);
        }
        self.table.entry(color).or_default()
    }

    /// Neighbor counts for `color`, if it was observed
    pub fn neighbors(&self, color: &Color<N>) -> Option<&NeighborCounts<N>> {
        self.table.get(color)
    }

    /// Number of times `neighbor` was observed next to `color`
    pub fn count(&self, color: &Color<N>, neighbor: &Color<N>) -> u64 {
        self.table
            .get(color)
            .and_then(|counts| counts.get(neighbor))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all neighbor counts recorded for `color`
    pub fn total_for(&self, color: &Color<N>) -> u64 {
        self.table
            .get(color)
            .map_or(0, |counts| counts.values().sum())
    }

    /// Observed colors in ascending order
    pub fn colors(&self) -> impl Iterator<Item = Color<N>> + '_ {
        self.keys.iter().copied()
    }

    /// The `index`-th observed color in ascending order
    pub fn color_at(&self, index: usize) -> Option<Color<N>> {
        self.keys.get(index).copied()
    }

    /// Number of distinct observed colors
    pub fn color_count(&self) -> usize {
        self.table.len()
    }

    /// Whether no color was observed
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Total number of recorded neighbor observations
    pub const fn total_observations(&self) -> u64 {
        self.observations
    }
}
