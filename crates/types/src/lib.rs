//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data: usable by the engine, the terminal view and
//! the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Automatic fall is attempted once the accumulator exceeds this |
//! | `FRAME_MS` | 16 | Default frame interval of the terminal shell (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Command, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//! assert_eq!(Color::Orange.rgb(), (255, 165, 0));
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const GRID_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Fall interval in milliseconds.
///
/// The engine attempts an automatic one-row drop once its accumulated tick
/// time is strictly greater than this value.
pub const FALL_INTERVAL_MS: u32 = 500;

/// Points for a single cleared row; `n` rows at once score `n² × base`.
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// Default frame interval of the terminal shell (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Largest extent of any piece matrix along either axis.
pub const MAX_PIECE_SIZE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_and_scoring_defaults() {
        assert_eq!(FALL_INTERVAL_MS, 500);
        assert_eq!(LINE_CLEAR_BASE_SCORE, 100);
        assert_eq!(FRAME_MS, 16);
    }

    #[test]
    fn palette_is_seven_distinct_colors() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.rgb(), b.rgb());
            }
        }
        assert_eq!(Color::ALL.len(), 7);
    }

    #[test]
    fn command_names_roundtrip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hardDrop"), None);
    }
}

/// Piece colors
///
/// Colors are drawn independently of shapes, so any shape may show up in any
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl Color {
    /// The full palette, in randomizer index order.
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Orange,
    ];

    /// 24-bit RGB triple for rendering.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Magenta => (255, 0, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Orange => (255, 165, 0),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked cell of the given color
pub type Cell = Option<Color>;

/// Player commands accepted by the engine while a piece is falling
///
/// Each command is either applied in full or rejected as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, without wall kicks
    Rotate,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// Engine phase
///
/// `Locking` and `LineClearing` run synchronously inside a single tick, so
/// between inputs the engine is only ever observed in `Spawning` (before the
/// first spawn), `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}
