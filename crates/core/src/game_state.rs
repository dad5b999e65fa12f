//! Game state module - the engine state machine
//!
//! This module ties together the board, the active piece, the next-piece slot
//! and the score. Every input is processed to completion: a tick that lands a
//! piece runs Locking, LineClearing and Spawning before it returns.
//!
//! ```text
//! Spawning ──ok──> Falling ──blocked tick──> Locking ──> LineClearing ──> Spawning
//!    │
//!    └──blocked──> GameOver
//! ```

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{NextPiece, PieceSource, Randomizer};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Phase, FALL_INTERVAL_MS, LINE_CLEAR_BASE_SCORE};

/// Score awarded for clearing `lines` rows with one lock: `lines² × 100`.
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE_SCORE)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<S = Randomizer> {
    board: Board,
    active: Option<Piece>,
    next: NextPiece,
    source: S,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Pieces that spawned successfully in this game.
    pieces_spawned: u32,
    /// Time accumulated toward the next automatic fall.
    fall_timer_ms: u32,
}

impl GameEngine<Randomizer> {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(Board::new(), Randomizer::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl<S: PieceSource> GameEngine<S> {
    /// Create a game over an existing board, drawing pieces from `source`.
    ///
    /// The first piece is pulled into the next slot immediately; nothing spawns
    /// until [`start`](Self::start).
    pub fn with_source(board: Board, mut source: S) -> Self {
        let next = source.next_piece();
        Self {
            board,
            active: None,
            next,
            source,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            fall_timer_ms: 0,
        }
    }

    /// Spawn the first piece. Does nothing once the game has started.
    pub fn start(&mut self) {
        if self.phase == Phase::Spawning {
            self.advance();
        }
    }

    /// Throw away the current game and start a new one.
    ///
    /// Board, score, counters and phase are replaced together; the piece
    /// source carries on from where it was.
    pub fn restart(&mut self) {
        let next = self.source.next_piece();
        self.board = Board::new();
        self.active = None;
        self.next = next;
        self.phase = Phase::Spawning;
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.fall_timer_ms = 0;
        self.advance();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared in this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> NextPiece {
        self.next
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.into();
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces_spawned;
        out.phase = self.phase;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player command; returns whether it took effect.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One row down. A blocked soft drop is a no-op; only gravity locks.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place. Rejected outright if the result collides.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.falling() else {
            return false;
        };

        let rotated = active.rotated();
        if rotated.collides(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the fall interval the piece tries to
    /// move down a row; if it cannot, it locks and the next piece spawns.
    /// Returns true when the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= FALL_INTERVAL_MS {
            return false;
        }
        self.fall_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.phase = Phase::Locking;
            self.advance();
        }
        true
    }

    fn falling(&self) -> Option<Piece> {
        if self.phase != Phase::Falling {
            return None;
        }
        self.active
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.falling() else {
            return false;
        };

        let moved = active.translated(dx, dy);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Run the synchronous phases until the engine rests in Falling or GameOver.
    fn advance(&mut self) {
        loop {
            match self.phase {
                Phase::Spawning => self.spawn_piece(),
                Phase::Locking => self.lock_piece(),
                Phase::LineClearing => self.clear_lines(),
                Phase::Falling | Phase::GameOver => return,
            }
        }
    }

    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.next);
        if piece.collides(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            return;
        }

        self.active = Some(piece);
        self.next = self.source.next_piece();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.fall_timer_ms = 0;
        self.phase = Phase::Falling;
    }

    fn lock_piece(&mut self) {
        debug_assert!(self.active.is_some(), "locking without an active piece");
        if let Some(piece) = self.active.take() {
            self.board.lock_cells(&piece);
        }
        self.phase = Phase::LineClearing;
    }

    fn clear_lines(&mut self) {
        let cleared = self.board.clear_completed_rows() as u32;
        self.score = self.score.saturating_add(line_clear_score(cleared));
        self.lines = self.lines.saturating_add(cleared);
        self.phase = Phase::Spawning;
    }
}

impl Default for GameEngine<Randomizer> {
    fn default() -> Self {
        Self::new(1)
    }
}
