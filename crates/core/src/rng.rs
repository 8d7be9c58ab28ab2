//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven kinds with equal probability.
//! The generator is a small LCG whose state lives inside `GameState`, so the
//! same seed and the same command sequence always replay to the same game.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// Draw a piece kind uniformly
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
