/// Memoized neighbor distributions per color
pub mod cache;
/// Frontier work list and drawn-position tracking
pub mod frontier;
/// Frontier-based stochastic image generation
pub mod synthesizer;

pub use synthesizer::{GenerationStats, ImageSynthesizer, SynthesisConfig};
