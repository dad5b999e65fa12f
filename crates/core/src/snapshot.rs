//! Snapshot module - read-only copy of the engine state for renderers
//!
//! A `GameSnapshot` is plain `Copy` data: the locked grid, the active and
//! next pieces, and the counters. It serializes to JSON as-is.

use serde::Serialize;

use crate::piece::Piece;
use crate::rng::NextPiece;
use crate::shapes::{Matrix, ShapeKind};
use crate::types::{Cell, Color, Phase, GRID_HEIGHT, GRID_WIDTH};

pub type Grid = [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub matrix: Matrix,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            matrix: value.matrix,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub shape: ShapeKind,
    pub matrix: Matrix,
    pub color: Color,
}

impl From<NextPiece> for NextSnapshot {
    fn from(value: NextPiece) -> Self {
        Self {
            shape: value.shape,
            matrix: value.matrix(),
            color: value.color,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub phase: Phase,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell as it should be drawn: the active piece over the locked board.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        if let Some(active) = self.active {
            let (dx, dy) = (x - active.x, y - active.y);
            if dx >= 0 && dy >= 0 && active.matrix.get(dy as usize, dx as usize) {
                return Some(active.color);
            }
        }
        self.board[y as usize][x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            next: NextPiece::new(ShapeKind::I, Color::Cyan).into(),
            score: 0,
            lines: 0,
            pieces: 0,
            phase: Phase::Spawning,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_an_empty_unstarted_game() {
        let snap = GameSnapshot::default();
        assert!(snap.board.iter().flatten().all(|c| c.is_none()));
        assert!(snap.active.is_none());
        assert_eq!(snap.next.shape, ShapeKind::I);
        assert_eq!(snap.next.matrix, ShapeKind::I.matrix());
        assert_eq!((snap.score, snap.lines, snap.pieces), (0, 0, 0));
        assert_eq!(snap.phase, Phase::Spawning);
        assert!(!snap.game_over);
    }

    #[test]
    fn cell_at_overlays_active_piece() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(Color::Red);
        snap.active = Some(ActiveSnapshot {
            matrix: ShapeKind::T.matrix(),
            color: Color::Green,
            x: 4,
            y: 0,
        });

        assert_eq!(snap.cell_at(0, 19), Some(Color::Red));
        assert_eq!(snap.cell_at(5, 1), Some(Color::Green));
        assert_eq!(snap.cell_at(4, 1), None);
        assert_eq!(snap.cell_at(-1, 0), None);
    }
}
