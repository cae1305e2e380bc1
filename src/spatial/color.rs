//! Fixed-width pixel colors used as model keys

use std::fmt;

/// Default number of channels per color (RGB)
pub const DEFAULT_CHANNELS: usize = 3;

/// An immutable tuple of `N` channel bytes
///
/// Equality, hashing and ordering compare channels in order, so two colors
/// with the same bytes in a different order are distinct model keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color<const N: usize = DEFAULT_CHANNELS>([u8; N]);

impl<const N: usize> Color<N> {
    /// Fill value of pixels that generation never reached (all channels zero)
    pub const UNREACHED: Self = Self([0; N]);

    /// Create a color from its channel bytes
    pub const fn new(channels: [u8; N]) -> Self {
        Self(channels)
    }

    /// Channel bytes in storage order
    pub const fn channels(&self) -> &[u8; N] {
        &self.0
    }

    /// Whether this color equals the unreached sentinel
    pub fn is_unreached(&self) -> bool {
        *self == Self::UNREACHED
    }
}

impl<const N: usize> Default for Color<N> {
    fn default() -> Self {
        Self::UNREACHED
    }
}

impl<const N: usize> From<[u8; N]> for Color<N> {
    fn from(channels: [u8; N]) -> Self {
        Self(channels)
    }
}

impl<const N: usize> fmt::Display for Color<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        for channel in &self.0 {
            write!(f, "{channel:02x}")?;
        }
        Ok(())
    }
}
