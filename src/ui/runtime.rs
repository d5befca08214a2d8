use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::lookup::HttpLookupClient;
use crate::storage::{JsonFileStore, PreferenceStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::search::SearchController;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal UI until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    // Lookups and the landing timer are spawned from this thread.
    let runtime_guard = runtime.enter();

    let lookup = HttpLookupClient::new(&config.lookup).context("Failed to build HTTP client")?;
    let data_dir = config.storage.resolve_data_dir();
    let preferences = PreferenceStore::load(Box::new(JsonFileStore::new(data_dir)));
    let controller =
        SearchController::new(Arc::new(lookup), preferences, config.ui.history_limit);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        controller,
        Duration::from_millis(config.ui.landing_delay_ms),
        events.sender(),
    );

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::LandingElapsed) => app.on_landing_elapsed(),
            Ok(AppEvent::LookupFinished(outcome)) => app.on_lookup_finished(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    drop(guard);
    drop(runtime_guard);
    // Don't wait on a lookup the user no longer cares about.
    runtime.shutdown_background();
    Ok(())
}
