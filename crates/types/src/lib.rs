//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: -2 (pieces enter from above the visible top)
//!
//! # Speed Table
//!
//! Gravity interval in milliseconds, indexed by level (1-based). Levels past the
//! end of the table reuse the last entry.
//!
//! | Level | Interval | Tier |
//! |-------|----------|------|
//! | 1 | 1000ms | Slow |
//! | 2 | 850ms | Slow |
//! | 3 | 700ms | Medium |
//! | 4 | 600ms | Medium |
//! | 5 | 520ms | Medium |
//! | 6 | 450ms | Fast |
//! | ... | ... | Fast |
//! | 12+ | 200ms | Fast |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, SpeedTier, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(SpeedTier::from_interval_ms(850), SpeedTier::Slow);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row offset of a freshly spawned piece (two rows above the visible top)
pub const SPAWN_Y: i8 = -2;

/// Default frame budget in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval per level in milliseconds (index 0 = level 1)
pub const SPEED_TABLE_MS: [u32; 12] = [1000, 850, 700, 600, 520, 450, 390, 340, 300, 260, 230, 200];

/// Intervals at or above this are shown as "Slow"
pub const SLOW_TIER_MS: u32 = 850;

/// Intervals at or above this (and below [`SLOW_TIER_MS`]) are shown as "Medium"
pub const MEDIUM_TIER_MS: u32 = 520;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 5;

/// Base points by number of rows cleared in one lock (index = rows, 4+ uses index 4).
///
/// Points are multiplied by the current level.
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 250, 450, 700];

/// Points for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row descended by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Horizontal offsets tried, in order, when a rotation collides
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Background music volume
pub const MUSIC_VOLUME: f32 = 0.4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_table_is_strictly_decreasing() {
        for pair in SPEED_TABLE_MS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert_eq!(SPEED_TABLE_MS[0], 1000);
        assert_eq!(SPEED_TABLE_MS[SPEED_TABLE_MS.len() - 1], 200);
    }

    #[test]
    fn speed_tier_thresholds() {
        assert_eq!(SpeedTier::from_interval_ms(1000), SpeedTier::Slow);
        assert_eq!(SpeedTier::from_interval_ms(850), SpeedTier::Slow);
        assert_eq!(SpeedTier::from_interval_ms(849), SpeedTier::Medium);
        assert_eq!(SpeedTier::from_interval_ms(520), SpeedTier::Medium);
        assert_eq!(SpeedTier::from_interval_ms(519), SpeedTier::Fast);
        assert_eq!(SpeedTier::from_interval_ms(200), SpeedTier::Fast);
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("q"), None);
    }

    #[test]
    fn game_action_string_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Pause,
            GameAction::ToggleMusic,
            GameAction::Start,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// The seven piece kinds
///
/// Each kind has its own colour:
/// - **I**: Blue, horizontal bar
/// - **J**: Violet
/// - **L**: Amber
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Pink
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in canonical table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Player-facing actions
///
/// Every input device (keyboard, mouse) is mapped onto these; the game state
/// has one handler per action and does not know where an action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise (with horizontal kick fallback)
    Rotate,
    /// Drop piece one row (locks if it cannot descend)
    SoftDrop,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Toggle pause (starts a game when none is running)
    Pause,
    /// Toggle background music
    ToggleMusic,
    /// Start a new game (restart when one is in progress or over)
    Start,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("toggleMusic"), Some(GameAction::ToggleMusic));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "togglemusic" => Some(GameAction::ToggleMusic),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::ToggleMusic => "toggleMusic",
            GameAction::Start => "start",
        }
    }

    /// Whether this action moves or locks the active piece
    pub fn is_piece_action(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::Rotate
                | GameAction::SoftDrop
                | GameAction::HardDrop
        )
    }
}

/// Session lifecycle
///
/// `Idle` → `Running` ⇄ `Paused`; `Running` → `GameOver` → `Running` (restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// True for `Running` and `Paused` (a game is in progress)
    pub fn in_progress(&self) -> bool {
        matches!(self, GameStatus::Running | GameStatus::Paused)
    }
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by observers (the binary logs level-ups and game over from it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Line-clear points awarded by this lock (drop points excluded)
    pub points: u32,
    pub levels_gained: u32,
    /// Level after the lock
    pub level: u32,
    /// The next piece could not spawn
    pub game_over: bool,
}

/// Human-readable speed bucket for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedTier {
    Slow,
    Medium,
    Fast,
}

impl SpeedTier {
    /// Classify a gravity interval
    pub fn from_interval_ms(interval_ms: u32) -> Self {
        if interval_ms >= SLOW_TIER_MS {
            SpeedTier::Slow
        } else if interval_ms >= MEDIUM_TIER_MS {
            SpeedTier::Medium
        } else {
            SpeedTier::Fast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedTier::Slow => "Slow",
            SpeedTier::Medium => "Medium",
            SpeedTier::Fast => "Fast",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
