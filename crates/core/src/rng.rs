//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled.
//! Draws come from the bag until it is empty, then a new bag is shuffled, so any
//! 7 consecutive draws between refills are a permutation of all seven kinds.
//!
//! Also provides a simple LCG so that a seed fully determines the piece sequence.

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
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index of the next piece to hand out
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    /// Discard whatever is left and shuffle a fresh bag of all seven kinds
    pub fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece kind, refilling when the bag is exhausted
    pub fn next_type(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Peek at the next piece without removing it.
    ///
    /// When the bag is empty this previews the first piece of the next bag using a
    /// copy of the RNG, so it always matches the following `next_type()`.
    pub fn peek(&self) -> PieceKind {
        if let Some(&kind) = self.bag.get(self.bag_index) {
            return kind;
        }

        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> usize {
        self.bag.len() - self.bag_index
    }

    /// Current RNG state (a restart with this value continues the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
