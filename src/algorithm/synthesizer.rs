//! Frontier-driven image synthesis from an adjacency model
//!
//! Generation starts from a single seeded pixel and grows outward. Each
//! expansion pops the most recently queued position (depth-first growth),
//! fixes its color, and gives every undrawn 8-neighbor an independent color
//! drawn from the popped color's neighbor distribution. A color with no
//! recorded neighbors restarts growth from a fresh seed elsewhere, which can
//! leave the output split into disconnected regions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::cache::DistributionCache;
use crate::algorithm::frontier::{DrawnSet, Frontier};
use crate::analysis::AdjacencyModel;
use crate::io::configuration::{DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH};
use crate::spatial::neighbors::{Position, neighbors};
use crate::spatial::{Color, PixelGrid};

/// Output grid dimensions for a generation pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
}

impl SynthesisConfig {
    /// Create a configuration for a `width` x `height` output
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the output grid
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_WIDTH, DEFAULT_OUTPUT_HEIGHT)
    }
}

/// Counters describing a generation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Expansion steps that fixed the color of a new pixel
    pub steps: usize,
    /// Seeds placed after the initial one
    pub reseeds: usize,
    /// Popped positions ignored because they were already drawn
    pub skipped: usize,
    /// Tentative neighbor color assignments made
    pub assignments: usize,
}

/// Grows a new image from an [`AdjacencyModel`]
///
/// The random source is owned by the synthesizer so a fixed seed reproduces
/// the same output.
pub struct ImageSynthesizer<'a, const N: usize, R = StdRng> {
    model: &'a AdjacencyModel<N>,
    grid: PixelGrid<N>,
    frontier: Frontier,
    drawn: DrawnSet,
    cache: DistributionCache<N>,
    rng: R,
    stats: GenerationStats,
    seeded: bool,
}

impl<'a, const N: usize> ImageSynthesizer<'a, N, StdRng> {
    /// Create a synthesizer with a deterministic random generator
    pub fn new(model: &'a AdjacencyModel<N>, config: SynthesisConfig, seed: u64) -> Self {
        Self::with_rng(model, config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, const N: usize, R: Rng> ImageSynthesizer<'a, N, R> {
    /// Create a synthesizer drawing from the given random generator
    pub fn with_rng(model: &'a AdjacencyModel<N>, config: SynthesisConfig, rng: R) -> Self {
        Self {
            model,
            grid: PixelGrid::new(config.width, config.height),
            frontier: Frontier::new(),
            drawn: DrawnSet::new(config.height, config.width),
            cache: DistributionCache::new(),
            rng,
            stats: GenerationStats::default(),
            seeded: false,
        }
    }

    /// Place a seed: a random model color at a random undrawn position
    ///
    /// Every model color is equally likely regardless of how often it was
    /// observed. Drawn positions are never chosen, so a seed cannot overwrite
    /// a color that is already final. Returns false, placing nothing, if the
    /// model has no colors or every position is already drawn.
    pub fn seed(&mut self) -> bool {
        let color_count = self.model.color_count();
        let remaining = self.drawn.remaining();
        if color_count == 0 || remaining == 0 {
            return false;
        }

        let position = self
            .drawn
            .undrawn_at(self.rng.random_range(0..remaining));
        let color = self
            .model
            .color_at(self.rng.random_range(0..color_count));

        match (position, color) {
            (Some(position), Some(color)) => self.seed_with(position, color),
            _ => false,
        }
    }

    /// Place a seed of `color` at `position`
    ///
    /// Returns false if the position is out of bounds or already drawn.
    pub fn seed_with(&mut self, position: Position, color: Color<N>) -> bool {
        if self.drawn.contains(position) || !self.grid.set(position, color) {
            return false;
        }
        if self.seeded {
            self.stats.reseeds += 1;
        }
        self.seeded = true;
        self.frontier.push(position);
        true
    }

    /// Run one expansion step
    ///
    /// Returns whether generation should continue.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let Some(position) = self.frontier.pop() else {
            return false;
        };

        if !self.drawn.insert(position) {
            self.stats.skipped += 1;
            return !self.is_finished();
        }
        self.stats.steps += 1;

        let color = self.grid.get(position).unwrap_or_default();
        let Some(distribution) = self.cache.get_or_build(color, self.model) else {
            self.seed();
            return !self.is_finished();
        };

        let (rows, cols) = (self.grid.height(), self.grid.width());
        for neighbor in neighbors(position, rows, cols) {
            if self.drawn.contains(neighbor) {
                continue;
            }
            let neighbor_color = distribution.sample(&mut self.rng);
            self.grid.set(neighbor, neighbor_color);
            self.frontier.push(neighbor);
            self.stats.assignments += 1;
        }

        !self.is_finished()
    }

    /// Seed if needed, then expand until generation halts
    pub fn run(&mut self) -> &GenerationStats {
        if !self.seeded {
            self.seed();
        }
        while self.step() {}
        &self.stats
    }

    /// Whether the frontier is exhausted or every position is drawn
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty() || self.drawn.is_full()
    }

    /// Whether a seed has been placed
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// The output grid in its current state
    pub const fn grid(&self) -> &PixelGrid<N> {
        &self.grid
    }

    /// Positions whose color is final
    pub const fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }

    /// Counters for this pass
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Distribution cache statistics for this pass
    pub const fn cache(&self) -> &DistributionCache<N> {
        &self.cache
    }

    /// Number of positions not drawn yet
    ///
    /// Once generation has halted these are exactly the pixels still holding
    /// [`Color::UNREACHED`] because growth never reached them.
    pub fn unreached(&self) -> usize {
        self.drawn.remaining()
    }

    /// Consume the synthesizer and hand off the output grid
    pub fn into_grid(self) -> PixelGrid<N> {
        self.grid
    }
}
