//! RNG module - next-piece generation
//!
//! Every draw picks a shape uniformly from the seven catalog shapes and,
//! independently, a color uniformly from the seven-color palette. A shape is
//! not tied to any particular color.
//!
//! Also provides a simple LCG so a seed fully determines the piece sequence.

use serde::Serialize;

use crate::shapes::{Matrix, ShapeKind};
use crate::types::Color;

/// 32-bit linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Zero is remapped so every seed yields a usable stream.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // state = (1664525 * state + 1013904223) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `0..max`
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Contents of the next-piece slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextPiece {
    pub shape: ShapeKind,
    pub color: Color,
}

impl NextPiece {
    pub fn new(shape: ShapeKind, color: Color) -> Self {
        Self { shape, color }
    }

    /// Spawn-orientation matrix of the pending shape
    pub fn matrix(&self) -> Matrix {
        self.shape.matrix()
    }
}

/// Where the engine gets its upcoming pieces from.
pub trait PieceSource {
    fn next_piece(&mut self) -> NextPiece;
}

/// Uniform, independent shape and color picker
#[derive(Debug, Clone)]
pub struct Randomizer {
    seed: u32,
    rng: SimpleRng,
}

impl Randomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for Randomizer {
    fn next_piece(&mut self) -> NextPiece {
        let shape = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = Color::ALL[self.rng.next_range(Color::ALL.len() as u32) as usize];
        NextPiece { shape, color }
    }
}

/// Fixed piece sequence that repeats once exhausted (scripted games, benches)
#[derive(Debug, Clone)]
pub struct CycleSource {
    pieces: Vec<NextPiece>,
    index: usize,
}

impl CycleSource {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: Vec<NextPiece>) -> Self {
        assert!(!pieces.is_empty(), "CycleSource needs at least one piece");
        Self { pieces, index: 0 }
    }

    /// The same shape over and over, in one color
    pub fn repeat(shape: ShapeKind, color: Color) -> Self {
        Self::new(vec![NextPiece::new(shape, color)])
    }
}

impl PieceSource for CycleSource {
    fn next_piece(&mut self) -> NextPiece {
        let piece = self.pieces[self.index];
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }
}
