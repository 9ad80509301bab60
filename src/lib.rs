//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfall::{core,input,term,types}` and
//! hosts the front-end glue used by the binary: command-line configuration,
//! background music and the frame loop.

pub mod app;
pub mod audio;
pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
