//! Conditional neighbor-color distributions derived from model counts

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::analysis::adjacency::NeighborCounts;
use crate::math::probability::normalize_counts;
use crate::spatial::Color;

/// Categorical distribution over the neighbor colors of one color
///
/// Built from exact counts at sampling time; probabilities are
/// `count / total` in ascending color order.
#[derive(Debug, Clone)]
pub struct NeighborDistribution<const N: usize> {
    colors: Vec<Color<N>>,
    probabilities: Vec<f64>,
    sampler: WeightedIndex<f64>,
}

impl<const N: usize> NeighborDistribution<N> {
    /// Normalize neighbor counts into a sampleable distribution
    ///
    /// Returns `None` for an empty table or one whose counts sum to zero.
    pub fn from_counts(counts: &NeighborCounts<N>) -> Option<Self> {
        let (colors, occurrences): (Vec<Color<N>>, Vec<u64>) =
            counts.iter().map(|(color, count)| (*color, *count)).unzip();
        let probabilities = normalize_counts(&occurrences)?;
        let sampler = WeightedIndex::new(&probabilities).ok()?;

        Some(Self {
            colors,
            probabilities,
            sampler,
        })
    }

    /// Draw one neighbor color
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color<N> {
        let index = self.sampler.sample(rng);
        self.colors.get(index).copied().unwrap_or_default()
    }

    /// Candidate colors in ascending order
    pub fn colors(&self) -> &[Color<N>] {
        &self.colors
    }

    /// Probability of each candidate, aligned with [`Self::colors`]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Probability of drawing `color` (zero if never observed)
    pub fn probability_of(&self, color: &Color<N>) -> f64 {
        self.colors
            .binary_search(color)
            .ok()
            .and_then(|index| self.probabilities.get(index))
            .copied()
            .unwrap_or(0.0)
    }
}
