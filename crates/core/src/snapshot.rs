use crate::board::{BOARD_COLS, BOARD_ROWS};
use crate::pieces::Piece;
use crate::types::{Cell, GameStatus, PieceKind, SpeedTier};

/// Values shown in the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub speed_ms: u32,
    pub speed_tier: SpeedTier,
    pub lines_to_next: u32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            speed_ms: crate::scoring::speed_interval_ms(1),
            speed_tier: SpeedTier::Slow,
            lines_to_next: crate::types::LINES_PER_LEVEL,
        }
    }
}

/// Everything the render sink needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<Piece>,
    pub next: Option<PieceKind>,
    pub hud: Hud,
    pub status: GameStatus,
    pub music_on: bool,
    pub games_started: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            next: None,
            hud: Hud::default(),
            status: GameStatus::Idle,
            music_on: false,
            games_started: 0,
        }
    }
}
