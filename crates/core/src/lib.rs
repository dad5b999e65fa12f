//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Engines can be built over any board and any piece source
//! - **Fast**: Fixed-size matrices and boards, no allocation on tick or command
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven shape matrices and the shape catalog
//! - [`board`]: 10x20 grid with row-completion detection and compaction
//! - [`piece`]: Active piece, clockwise rotation, spawn position, collision
//! - [`rng`]: Next-piece generation (independent shape and color)
//! - [`game_state`]: The Spawning/Falling/Locking/LineClearing/GameOver engine
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: centered on the top row; a spawn that collides ends the game
//! - **Rotation**: clockwise, rejected on collision (no wall kicks)
//! - **Gravity**: one row once more than 500ms has accumulated; a piece that
//!   cannot fall locks
//! - **Scoring**: `lines² × 100` per lock
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_core::types::Command;
//!
//! let mut game = GameEngine::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.tick(16);
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{line_clear_score, GameEngine};
pub use piece::{collides, rotate, spawn_position, Piece};
pub use rng::{CycleSource, NextPiece, PieceSource, Randomizer, SimpleRng};
pub use shapes::{all_shapes, Matrix, Shape, ShapeKind};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
