//! Game state module - manages the complete game session
//!
//! This module ties together all core components: board, pieces, bag and scoring.
//! It owns the active piece, runs gravity from elapsed time, and drives the
//! `Idle → Running ⇄ Paused → GameOver` lifecycle.

use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceBag;
use crate::scoring::{calculate_drop_score, line_clear_points, speed_interval_ms, LevelProgress};
use crate::snapshot::{GameSnapshot, Hud};
use crate::types::{GameAction, GameStatus, LockEvent, PieceKind, SpeedTier, SPAWN_Y};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    /// Preview of the piece that spawns next.
    next: Option<PieceKind>,
    bag: PieceBag,
    score: u32,
    progress: LevelProgress,
    status: GameStatus,
    /// Gravity accumulator (ms since the last gravity step).
    drop_timer_ms: u32,
    music_on: bool,
    /// Monotonic count of started games (increments on every start/restart).
    games_started: u32,
    /// Monotonic count of pieces spawned in the current game.
    pieces_spawned: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            bag: PieceBag::new(seed),
            score: 0,
            progress: LevelProgress::new(),
            status: GameStatus::Idle,
            drop_timer_ms: 0,
            music_on: false,
            games_started: 0,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    /// Start a fresh game (also used for restart).
    ///
    /// Clears the board and counters, draws a new bag and spawns the first piece.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.progress = LevelProgress::new();
        self.drop_timer_ms = 0;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.games_started = self.games_started.wrapping_add(1);

        self.bag.refill();
        self.next = Some(self.bag.next_type());
        self.status = GameStatus::Running;
        self.spawn_piece();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines_this_level(&self) -> u32 {
        self.progress.lines_this_level()
    }

    pub fn lines_to_next(&self) -> u32 {
        self.progress.lines_to_next()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    /// Whether background music should currently be playing
    pub fn music_audible(&self) -> bool {
        self.music_on && self.status != GameStatus::Paused
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        speed_interval_ms(self.level())
    }

    pub fn speed_tier(&self) -> SpeedTier {
        SpeedTier::from_interval_ms(self.drop_interval_ms())
    }

    pub fn hud(&self) -> Hud {
        let speed_ms = self.drop_interval_ms();
        Hud {
            score: self.score,
            level: self.level(),
            speed_ms,
            speed_tier: SpeedTier::from_interval_ms(speed_ms),
            lines_to_next: self.lines_to_next(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.next = self.next;
        out.hud = self.hud();
        out.status = self.status;
        out.music_on = self.music_on;
        out.games_started = self.games_started;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Promote the preview to the active piece and draw a new preview.
    ///
    /// The spawn is blocked when the piece collides where it appears or where it
    /// first becomes fully visible (rows above the top never collide). A blocked
    /// spawn ends the game; the board is left untouched and the piece stays
    /// visible. Returns false on game over.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.next_type(),
        };
        let piece = Piece::spawn(kind);
        self.next = Some(self.bag.next_type());
        self.active = Some(piece);

        let entry = piece.shifted(0, -SPAWN_Y);
        if self.board.collides(&piece) || self.board.collides(&entry) {
            self.status = GameStatus::GameOver;
            return false;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    /// Try to move the active piece; silently ignored when blocked
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if !self.board.fits(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Move one column left. No-op unless running.
    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.try_move(-1, 0)
    }

    /// Move one column right. No-op unless running.
    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.try_move(1, 0)
    }

    /// Rotate clockwise with horizontal kick fallback. No-op unless running.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        match try_rotate(&active, |p| board.fits(p)) {
            Some((rotated, _kick)) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Move down one row (+1 point), or lock if the piece cannot descend.
    ///
    /// Returns true if the piece moved. No-op unless running.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.try_move(0, 1) {
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
            true
        } else {
            self.lock_piece();
            false
        }
    }

    /// Drop to the lowest free row (+2 points per row), then lock.
    ///
    /// Returns the number of rows descended. No-op unless running.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let mut rows: u32 = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.score = self.score.saturating_add(calculate_drop_score(rows, true));
        self.lock_piece();
        rows
    }

    /// Merge the active piece, clear lines, award points and spawn the next piece.
    ///
    /// A piece that locks with any cell above the top ends the game instead of
    /// spawning (its hidden cells are dropped).
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let locked_out = active.cells().any(|(_, y)| y < 0);
        self.board.merge(&active);

        let cleared = self.board.clear_lines().len();
        let mut points = 0;
        let mut levels_gained = 0;
        if cleared > 0 {
            // Points use the level the clear happened on.
            points = line_clear_points(cleared, self.level());
            self.score = self.score.saturating_add(points);
            levels_gained = self.progress.add_lines(cleared as u32);
        }

        let spawned = if locked_out {
            self.status = GameStatus::GameOver;
            false
        } else {
            self.spawn_piece()
        };

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            levels_gained,
            level: self.level(),
            game_over: !spawned,
        });
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulator exceeds the level's interval it resets and the piece
    /// steps down once (or locks). Returns true if a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms() {
            return false;
        }

        self.drop_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Pause or resume. With no game in progress this starts one.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.status = GameStatus::Paused,
            GameStatus::Paused => self.status = GameStatus::Running,
            GameStatus::Idle | GameStatus::GameOver => self.start(),
        }
        true
    }

    /// Flip the music flag. Works in every state.
    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        true
    }

    /// Apply a game action; returns true if the state changed.
    ///
    /// Piece actions are ignored unless the game is running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                // Locking also changes state.
                let running = self.is_running();
                self.soft_drop();
                running
            }
            GameAction::HardDrop => {
                let running = self.is_running();
                self.hard_drop();
                running
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::ToggleMusic => self.toggle_music(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Check if the active piece can move by (`dx`, `dy`)
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(active) => self.board.fits(&active.shifted(dx, dy)),
            None => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn running(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    /// Replace the active piece with a fresh spawn of `kind`.
    fn force_active(state: &mut GameState, kind: PieceKind) -> Piece {
        let piece = Piece::spawn(kind);
        state.active = Some(piece);
        piece
    }

    fn fill_row_except(state: &mut GameState, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                state.board.set(x, y, Some(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_game_state_is_idle() {
        let state = GameState::new(12345);
        assert_eq!(state.status(), GameStatus::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines_to_next(), 5);
        assert!(state.active().is_none());
        assert!(state.next_kind().is_none());
        assert!(!state.music_on());
    }

    #[test]
    fn test_start_spawns_first_piece() {
        let state = running(12345);
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.games_started(), 1);
        assert_eq!(state.pieces_spawned(), 1);

        let active = state.active().unwrap();
        assert_eq!(active.y, -2);
        assert_eq!(active, Piece::spawn(active.kind));
        assert!(state.next_kind().is_some());
    }

    #[test]
    fn test_spawn_uses_preview() {
        let mut state = running(12345);
        let next = state.next_kind().unwrap();
        assert!(state.spawn_piece());
        assert_eq!(state.active().unwrap().kind, next);
    }

    #[test]
    fn test_first_seven_pieces_form_a_bag() {
        let mut state = running(777);
        let mut kinds = vec![state.active().unwrap().kind];
        for _ in 0..6 {
            state.spawn_piece();
            kinds.push(state.active().unwrap().kind);
        }
        kinds.sort_by_key(|k| k.as_str());
        let mut all = PieceKind::ALL.to_vec();
        all.sort_by_key(|k| k.as_str());
        assert_eq!(kinds, all);
    }

    #[test]
    fn test_piece_actions_ignored_when_not_running() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert_eq!(state.status(), GameStatus::Idle);

        state.start();
        state.toggle_pause();
        let before = state.active();
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.hard_drop(), 0);
        assert_eq!(state.active(), before);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_move_left_right_and_walls() {
        let mut state = running(1);
        force_active(&mut state, PieceKind::O);
        assert_eq!(state.active().unwrap().x, 4);

        assert!(state.move_right());
        assert_eq!(state.active().unwrap().x, 5);

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_left() {
                moved += 1;
            }
        }
        assert_eq!(moved, 5);
        assert_eq!(state.active().unwrap().x, 0);
        assert!(!state.move_left());
    }

    #[test]
    fn test_move_blocked_by_locked_cells() {
        let mut state = running(1);
        force_active(&mut state, PieceKind::O);
        state.active = Some(state.active().unwrap().shifted(0, 10));
        state.board.set(3, 9, Some(PieceKind::I));
        assert!(!state.move_left());
        assert_eq!(state.active().unwrap().x, 4);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut state = running(1);
        let piece = force_active(&mut state, PieceKind::T);
        assert!(state.rotate());
        let rotated = state.active().unwrap();
        assert_eq!(rotated.shape, piece.shape.rotated_cw());
        assert_eq!(rotated.x, piece.x);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut state = running(1);
        // Vertical I next to the right wall: going back to horizontal needs a kick.
        let vertical = Piece::spawn(PieceKind::I).rotated();
        state.active = Some(Piece { x: 8, y: 5, ..vertical });

        assert!(state.rotate());
        let rotated = state.active().unwrap();
        assert_eq!(rotated.shape.cols(), 4);
        // 0, -1 and +1 still cross the wall; -2 is the first fit.
        assert_eq!(rotated.x, 6);
        assert!(rotated.cells().all(|(x, _)| (0..BOARD_WIDTH as i8).contains(&x)));
    }

    #[test]
    fn test_rotate_fails_when_no_kick_fits() {
        let mut state = running(1);
        let vertical = Piece::spawn(PieceKind::I).rotated();
        let piece = Piece { x: 9, y: 5, ..vertical };
        state.active = Some(piece);

        assert!(!state.rotate());
        assert_eq!(state.active(), Some(piece));
    }

    #[test]
    fn test_rotate_rejected_leaves_piece_unchanged() {
        let mut state = running(1);
        // Vertical I in a one-wide well.
        let vertical = Piece::spawn(PieceKind::I).rotated();
        let piece = Piece { x: 4, y: 10, ..vertical };
        state.active = Some(piece);
        for y in 10..14 {
            fill_row_except(&mut state, y, &[4]);
        }

        assert!(!state.rotate());
        assert_eq!(state.active(), Some(piece));
    }

    #[test]
    fn test_soft_drop_scores_and_moves() {
        let mut state = running(1);
        let y0 = state.active().unwrap().y;
        assert!(state.soft_drop());
        assert_eq!(state.active().unwrap().y, y0 + 1);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_soft_drop_locks_when_blocked() {
        let mut state = running(1);
        let piece = force_active(&mut state, PieceKind::O);
        let grounded = piece.shifted(0, BOARD_HEIGHT as i8);
        state.active = Some(grounded);

        assert!(!state.soft_drop());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_count(), 4);
        assert_eq!(state.pieces_spawned(), 2);
    }

    #[test]
    fn test_hard_drop_i_from_spawn() {
        let mut state = running(1);
        force_active(&mut state, PieceKind::I);

        let rows = state.hard_drop();
        assert_eq!(rows, 21);
        assert_eq!(state.score(), 42);
        for x in 3..7 {
            assert_eq!(state.board().get(x, 19), Some(Some(PieceKind::I)));
        }
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_lock_clears_line_and_scores() {
        let mut state = running(1);
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        force_active(&mut state, PieceKind::I);

        state.hard_drop();
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.score(), 42 + 100);
        assert_eq!(state.lines_this_level(), 1);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 1);
        assert_eq!(ev.points, 100);
        assert!(!ev.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_four_line_clear_scores_and_level_up() {
        let mut state = running(1);
        // One line already banked; a four-line clear then crosses the threshold.
        state.progress.add_lines(1);
        for y in 16..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        let vertical = Piece::spawn(PieceKind::I).rotated();
        state.active = Some(Piece { x: 0, ..vertical });

        let rows = state.hard_drop();
        assert_eq!(rows, 18);
        assert_eq!(state.score(), 36 + 700);
        assert_eq!(state.level(), 2);
        assert_eq!(state.lines_this_level(), 0);
        assert_eq!(state.drop_interval_ms(), 850);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 4);
        assert_eq!(ev.levels_gained, 1);
        assert_eq!(ev.level, 2);
    }

    #[test]
    fn test_line_points_use_level_before_level_up() {
        let mut state = running(1);
        state.progress.add_lines(9);
        assert_eq!(state.level(), 2);
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        force_active(&mut state, PieceKind::I);

        state.hard_drop();
        assert_eq!(state.score(), 42 + 200);
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_gravity_requires_interval_to_be_exceeded() {
        let mut state = running(1);
        let y0 = state.active().unwrap().y;

        assert!(!state.tick(1000));
        assert_eq!(state.active().unwrap().y, y0);

        assert!(state.tick(1));
        assert_eq!(state.active().unwrap().y, y0 + 1);
        assert_eq!(state.drop_timer_ms, 0);
    }

    #[test]
    fn test_gravity_accumulates_small_steps() {
        let mut state = running(1);
        let y0 = state.active().unwrap().y;
        let mut steps = 0;
        for _ in 0..63 {
            if state.tick(16) {
                steps += 1;
            }
        }
        // 63 * 16 = 1008 > 1000
        assert_eq!(steps, 1);
        assert_eq!(state.active().unwrap().y, y0 + 1);
    }

    #[test]
    fn test_gravity_locks_grounded_piece() {
        let mut state = running(1);
        let piece = force_active(&mut state, PieceKind::O);
        state.active = Some(piece.shifted(0, BOARD_HEIGHT as i8));
        assert!(state.tick(1001));
        assert_eq!(state.board().filled_count(), 4);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_no_gravity_while_paused() {
        let mut state = running(1);
        let y0 = state.active().unwrap().y;
        state.toggle_pause();
        assert!(!state.tick(5000));
        assert_eq!(state.active().unwrap().y, y0);

        state.toggle_pause();
        assert!(state.is_running());
        assert!(state.tick(1001));
    }

    #[test]
    fn test_blocked_spawn_is_game_over_without_board_mutation() {
        let mut state = running(1);
        // Block the top rows across the spawn columns (gap keeps them from clearing).
        fill_row_except(&mut state, 0, &[0]);
        fill_row_except(&mut state, 1, &[0]);
        let before = state.board().clone();

        assert!(!state.spawn_piece());
        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.board(), &before);
        assert!(state.active().is_some());

        // The game is frozen.
        assert!(!state.tick(10_000));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_lock_above_top_is_game_over() {
        let mut state = running(1);
        for y in 1..BOARD_HEIGHT as i8 {
            state.board.set(4, y, Some(PieceKind::J));
            state.board.set(5, y, Some(PieceKind::J));
        }
        // O resting on the stack with its top row hidden.
        let piece = force_active(&mut state, PieceKind::O);
        state.active = Some(piece.shifted(0, 1));
        state.lock_piece();

        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.board().get(4, 0), Some(Some(PieceKind::O)));
        let ev = state.take_last_event().unwrap();
        assert!(ev.game_over);
        assert_eq!(ev.lines_cleared, 0);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = running(9);
        state.hard_drop();
        state.progress.add_lines(7);
        assert!(state.score() > 0);

        assert!(state.apply_action(GameAction::Start));
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines_this_level(), 0);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.games_started(), 2);
        assert_eq!(state.pieces_spawned(), 1);
    }

    #[test]
    fn test_pause_from_idle_and_game_over_starts() {
        let mut state = GameState::new(4);
        assert!(state.toggle_pause());
        assert_eq!(state.status(), GameStatus::Running);

        state.status = GameStatus::GameOver;
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.games_started(), 2);
    }

    #[test]
    fn test_music_toggle_and_audibility() {
        let mut state = GameState::new(1);
        assert!(state.apply_action(GameAction::ToggleMusic));
        assert!(state.music_on());
        assert!(state.music_audible());

        state.start();
        state.toggle_pause();
        assert!(state.music_on());
        assert!(!state.music_audible());

        state.toggle_pause();
        assert!(state.music_audible());
        state.toggle_music();
        assert!(!state.music_audible());
    }

    #[test]
    fn test_hud_values() {
        let mut state = running(1);
        state.progress.add_lines(13);
        state.score = 4321;
        let hud = state.hud();
        assert_eq!(hud.score, 4321);
        assert_eq!(hud.level, 3);
        assert_eq!(hud.speed_ms, 700);
        assert_eq!(hud.speed_tier, SpeedTier::Medium);
        assert_eq!(hud.lines_to_next, 2);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let mut state = running(1);
        state.board_mut().set(2, 19, Some(PieceKind::L));
        state.toggle_music();
        let snap = state.snapshot();
        assert_eq!(snap.board[19][2], Some(PieceKind::L));
        assert_eq!(snap.active, state.active());
        assert_eq!(snap.next, state.next_kind());
        assert_eq!(snap.status, GameStatus::Running);
        assert!(snap.music_on);
        assert!(snap.playable());
    }

    #[test]
    fn test_can_move() {
        let mut state = running(1);
        force_active(&mut state, PieceKind::O);
        assert!(state.can_move(0, 1));
        assert!(state.can_move(-4, 0));
        assert!(!state.can_move(-5, 0));
        assert!(!state.can_move(0, 21));
    }
}
