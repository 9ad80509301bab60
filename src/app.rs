//! Frame loop and device policies.
//!
//! Owns the single [`GameState`], turns terminal events into game actions,
//! advances gravity by measured wall-clock deltas and keeps the music player in
//! step with the game.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

use crate::audio::MusicPlayer;
use crate::config::Config;
use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, pointer_press, should_quit, PointerPress};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{GameAction, GameStatus};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminal geometry changed; force a full redraw.
    Redraw,
    Quit,
}

/// Apply an on-screen control press.
///
/// With no game in progress the press first starts one; the pause and start
/// buttons stop there, every other button then performs its own action.
pub fn apply_control(game: &mut GameState, action: GameAction) -> bool {
    if !game.status().in_progress() {
        game.start();
        if matches!(action, GameAction::Pause | GameAction::Start) {
            return true;
        }
        game.apply_action(action);
        return true;
    }
    game.apply_action(action)
}

pub struct App {
    game: GameState,
    view: GameView,
    music: Box<dyn MusicPlayer>,
    viewport: Viewport,
    snap: GameSnapshot,
    fb: FrameBuffer,
    frame: Duration,
    seed: u32,
}

impl App {
    pub fn new(config: &Config, music: Box<dyn MusicPlayer>) -> Self {
        let mut game = GameState::new(config.seed);
        if config.music {
            game.toggle_music();
        }

        let viewport = Viewport::new(80, 24);
        let mut app = Self {
            game,
            view: GameView::new(config.cell_width, 1),
            music,
            viewport,
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            frame: config.frame,
            seed: config.seed,
        };
        app.sync_music();
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn music_playing(&self) -> bool {
        self.music.is_playing()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(press) = pointer_press(mouse) {
                    self.handle_pointer(press);
                }
                Flow::Continue
            }
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(w, h);
                Flow::Redraw
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            return Flow::Quit;
        }
        if let Some(action) = handle_key_event(key) {
            self.apply(action);
        }
        Flow::Continue
    }

    /// Control bar buttons, or the overlay while no game is in progress.
    pub fn handle_pointer(&mut self, press: PointerPress) {
        let layout = self.view.layout(self.viewport);

        if let Some(action) = layout.control_at(press.column, press.row) {
            log::debug!("control pressed: {}", action.as_str());
            let games = self.game.games_started();
            apply_control(&mut self.game, action);
            self.settle(games);
            return;
        }

        let status = self.game.status();
        if matches!(status, GameStatus::Idle | GameStatus::GameOver)
            && layout.frame.contains(press.column, press.row)
        {
            self.apply(GameAction::Start);
        }
    }

    pub fn apply(&mut self, action: GameAction) -> bool {
        let games = self.game.games_started();
        let changed = self.game.apply_action(action);
        if changed && !action.is_piece_action() {
            log::debug!("action {} -> {:?}", action.as_str(), self.game.status());
        }
        self.settle(games);
        changed
    }

    /// Advance gravity by a measured delta.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let games = self.game.games_started();
        self.game.tick(elapsed_ms);
        self.settle(games);
    }

    /// Log what changed and bring the music in line with the game.
    fn settle(&mut self, games_before: u32) {
        let games = self.game.games_started();
        if games != games_before {
            log::info!("game #{games} started (seed {})", self.seed);
        }

        while let Some(ev) = self.game.take_last_event() {
            if ev.lines_cleared > 0 {
                log::debug!("cleared {} line(s) for {} points", ev.lines_cleared, ev.points);
            }
            if ev.levels_gained > 0 {
                log::info!("level up: {}", ev.level);
            }
            if ev.game_over {
                log::info!(
                    "game over: score {} at level {}",
                    self.game.score(),
                    self.game.level()
                );
            }
        }

        self.sync_music();
    }

    fn sync_music(&mut self) {
        let audible = self.game.music_audible();
        if audible != self.music.is_playing() {
            log::debug!("music {}", if audible { "playing" } else { "stopped" });
            self.music.set_playing(audible);
        }
    }

    /// Render into the reusable framebuffer.
    pub fn render(&mut self) -> &mut FrameBuffer {
        self.game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, self.viewport, &mut self.fb);
        &mut self.fb
    }

    /// Run until the player quits. The caller owns terminal setup and teardown.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let (w, h) = crossterm::terminal::size()?;
        self.viewport = Viewport::new(w, h);

        let mut last_tick = Instant::now();

        loop {
            // Render.
            term.draw_swap(self.render())?;

            // Input with timeout until next tick.
            let timeout = self
                .frame
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match self.handle_event(event::read()?) {
                    Flow::Quit => {
                        log::info!("quit with score {}", self.game.score());
                        return Ok(());
                    }
                    Flow::Redraw => term.invalidate(),
                    Flow::Continue => {}
                }
            }

            // Tick with the measured delta.
            let elapsed = last_tick.elapsed();
            if elapsed >= self.frame {
                last_tick = Instant::now();
                let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
                self.advance(ms);
            }
        }
    }
}
