//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout frameworks and renders into a simple framebuffer that is then
//! diffed and flushed to the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot → framebuffer mapping plus pointer hit testing
//! - [`renderer`]: terminal setup/teardown and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{AnchorY, ControlButton, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
