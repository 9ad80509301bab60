//! Scoring module - line-clear points, drop points, level progression and speed
//!
//! Rules:
//! - Clearing 1/2/3/4+ rows in one lock is worth 100/250/450/700 points, times the
//!   level the clear happened on.
//! - Soft drop: +1 per row. Hard drop: +2 per row.
//! - Every 5 cleared lines raise the level by one.
//! - Gravity interval comes from [`SPEED_TABLE_MS`], clamped to the fastest tier.

use crate::types::{
    SpeedTier, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_CLEAR_POINTS, SOFT_DROP_POINTS,
    SPEED_TABLE_MS,
};

/// Points for clearing `lines` rows at `level` (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    let base = LINE_CLEAR_POINTS[lines.min(LINE_CLEAR_POINTS.len() - 1)];
    base.saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS_PER_ROW)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Gravity interval for a level (1-based), clamped to the last tier
pub fn speed_interval_ms(level: u32) -> u32 {
    let idx = (level.max(1) - 1) as usize;
    SPEED_TABLE_MS[idx.min(SPEED_TABLE_MS.len() - 1)]
}

/// HUD speed bucket for a level
pub fn speed_tier(level: u32) -> SpeedTier {
    SpeedTier::from_interval_ms(speed_interval_ms(level))
}

/// Level and the lines accumulated towards the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelProgress {
    level: u32,
    lines_this_level: u32,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self {
            level: 1,
            lines_this_level: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_this_level(&self) -> u32 {
        self.lines_this_level
    }

    /// Lines still needed for the next level
    pub fn lines_to_next(&self) -> u32 {
        LINES_PER_LEVEL.saturating_sub(self.lines_this_level)
    }

    /// Add cleared lines; returns how many levels were gained.
    pub fn add_lines(&mut self, lines: u32) -> u32 {
        self.lines_this_level += lines;
        let mut gained = 0;
        while self.lines_this_level >= LINES_PER_LEVEL {
            self.level += 1;
            self.lines_this_level -= LINES_PER_LEVEL;
            gained += 1;
        }
        gained
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new()
    }
}
