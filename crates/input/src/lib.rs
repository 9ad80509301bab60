//! Terminal input module.
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`] and filters mouse events down to primary-button
//! presses that the view can hit-test.

pub mod map;
pub mod pointer;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{pointer_press, PointerPress};
