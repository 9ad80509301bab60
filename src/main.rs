//! Terminal runner (default binary).
//!
//! Parses flags, sets up logging and audio, then hands the terminal to the
//! frame loop. The terminal is restored on every exit path.

use anyhow::Result;

use tui_blockfall::app::App;
use tui_blockfall::audio::open_player;
use tui_blockfall::config::{init_logging, Config};
use tui_blockfall::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_ref())?;
    log::info!("starting: {config:?}");

    let mut app = App::new(&config, open_player());

    let mut term = TerminalRenderer::new();
    if !config.mouse {
        term = term.without_mouse();
    }

    let result = term.enter().and_then(|()| app.run(&mut term));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("terminal restore failed: {err}");
    }
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}
