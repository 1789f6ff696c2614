//! RNG module - piece selection
//!
//! Each spawn picks one of the seven catalogue shapes uniformly at random.
//! Selection runs on a small seeded LCG so that identical seeds replay
//! identical games (agents compare runs on the same piece sequence).
//! A fixed cycling sequence is also available for scripted scenarios.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of spawned piece kinds
#[derive(Debug, Clone)]
pub enum Randomizer {
    /// Uniform choice over the catalogue
    Uniform(SimpleRng),
    /// Replays `kinds` in order, wrapping around
    Sequence { kinds: Vec<PieceKind>, next: usize },
}

impl Randomizer {
    pub fn uniform(seed: u32) -> Self {
        Randomizer::Uniform(SimpleRng::new(seed))
    }

    /// Cycle through `kinds`; `None` if empty
    pub fn sequence(kinds: &[PieceKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Randomizer::Sequence {
            kinds: kinds.to_vec(),
            next: 0,
        })
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            Randomizer::Uniform(rng) => {
                let index = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[index]
            }
            Randomizer::Sequence { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::uniform(1)
    }
}
