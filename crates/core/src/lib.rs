//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run headless (tests, benches) or behind any front-end
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: Complete session: active piece, preview, scoring, gravity, status
//! - [`pieces`]: Piece shape table, clockwise rotation and horizontal kicks
//! - [`rng`]: 7-bag random piece generation on a seeded LCG
//! - [`scoring`]: Line-clear points, drop points, levels and speed table
//! - [`snapshot`]: Render-ready copy of the session
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: Every 7 consecutive draws contain each kind once
//! - **Rotation**: Clockwise only; on collision the rotated piece is tried at
//!   horizontal offsets 0, -1, +1, -2, +2
//! - **Spawn**: Pieces appear centred, two rows above the visible top
//! - **Scoring**: 100/250/450/700 per 1/2/3/4 lines times level, +1 per soft drop
//!   row, +2 per hard drop row
//! - **Levels**: One level per 5 cleared lines
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity is driven by wall-clock deltas: call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the elapsed
//! milliseconds. The piece steps down once the accumulated time exceeds the
//! level's interval (1000ms at level 1, down to 200ms).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{collide, merge, Board};
pub use game_state::GameState;
pub use pieces::{get_shape, try_rotate, Piece, Shape};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{calculate_drop_score, line_clear_points, speed_interval_ms, LevelProgress};
pub use snapshot::{GameSnapshot, Hud};
