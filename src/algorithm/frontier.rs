use bitvec::prelude::*;

use crate::spatial::neighbors::Position;

/// Last-in-first-out work list of positions pending expansion
///
/// Positions may be pushed more than once; duplicates are filtered by the
/// [`DrawnSet`] when popped, not on push.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    stack: Vec<Position>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Queue a position for expansion
    pub fn push(&mut self, position: Position) {
        self.stack.push(position);
    }

    /// Take the most recently pushed position
    pub fn pop(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    /// Number of queued positions, duplicates included
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Fixed-size set of positions whose color is final
///
/// Membership only grows. A row-major bitset answers membership, and a pool
/// of the remaining flat indices with a slot index per position lets a
/// uniformly random undrawn position be picked and removed in constant time.
#[derive(Clone, Debug)]
pub struct DrawnSet {
    bits: BitVec,
    cols: usize,
    undrawn: Vec<usize>,
    slots: Vec<usize>,
}

impl DrawnSet {
    /// Create a set with no position drawn
    pub fn new(rows: usize, cols: usize) -> Self {
        let capacity = rows * cols;
        Self {
            bits: bitvec![0; capacity],
            cols,
            undrawn: (0..capacity).collect(),
            slots: (0..capacity).collect(),
        }
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        (position[1] < self.cols)
            .then(|| position[0] * self.cols + position[1])
            .filter(|&index| index < self.bits.len())
    }

    /// Mark a position drawn
    ///
    /// Returns true only if the position was in bounds and not drawn before.
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index_of(position) else {
            return false;
        };
        if self.bits.get(index).as_deref() != Some(&false) {
            return false;
        }
        self.bits.set(index, true);

        // Swap-remove from the pool and repoint the index moved into the hole
        let slot = self
            .slots
            .get(index)
            .copied()
            .filter(|&slot| slot < self.undrawn.len());
        if let Some(slot) = slot {
            self.undrawn.swap_remove(slot);
            if let Some(&moved) = self.undrawn.get(slot)
                && let Some(moved_slot) = self.slots.get_mut(moved)
            {
                *moved_slot = slot;
            }
        }
        true
    }

    /// Test whether a position is drawn
    pub fn contains(&self, position: Position) -> bool {
        self.index_of(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// The undrawn position held in pool slot `slot`
    ///
    /// Slots `0..remaining()` hold every undrawn position exactly once, in
    /// no particular order, so a uniform slot gives a uniform position.
    /// Drawing a position may move another one into its slot.
    pub fn undrawn_at(&self, slot: usize) -> Option<Position> {
        self.undrawn
            .get(slot)
            .map(|&index| [index / self.cols, index % self.cols])
    }

    /// Number of drawn positions
    pub fn len(&self) -> usize {
        self.bits.len() - self.undrawn.len()
    }

    /// Whether no position is drawn
    pub fn is_empty(&self) -> bool {
        self.undrawn.len() == self.bits.len()
    }

    /// Number of positions not yet drawn
    pub fn remaining(&self) -> usize {
        self.undrawn.len()
    }

    /// Whether every position is drawn
    pub fn is_full(&self) -> bool {
        self.undrawn.is_empty()
    }

    /// Total number of positions tracked
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }
}
