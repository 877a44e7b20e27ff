//! RNG module - seeded piece generation
//!
//! Two randomizer rules are supported:
//! - **Uniform**: every draw picks one of the seven kinds with equal probability.
//! - **Bag7**: a shuffled bag of all seven kinds is drawn empty before refilling.
//!
//! Both run on a small LCG so a seed reproduces the same piece sequence.

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Piece randomizer rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag7,
}

impl Randomizer {
    /// Parse a rule name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag7" | "7bag" | "bag" => Some(Randomizer::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag7 => "bag7",
        }
    }
}

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rule: Randomizer,
    rng: SimpleRng,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceGenerator {
    pub fn new(seed: u32, rule: Randomizer) -> Self {
        Self {
            rule,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            // Force a shuffle on the first bag draw.
            bag_index: PieceKind::ALL.len(),
        }
    }

    pub fn rule(&self) -> Randomizer {
        self.rule
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self.rule {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::Bag7 => {
                if self.bag_index >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    self.rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }
}
