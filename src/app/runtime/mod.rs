use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::RecipeClient;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
mod init;
mod workers;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::run_event_loop;
use init::{initialize_app_state, trigger_initial_loads};

pub use handlers::{handle_recipes_result, handle_tags_result};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the recipe browser end-to-end: build the HTTP client, initialize
/// terminal and state, spawn the fetch workers, drive the event loop, and
/// restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Settings from `settings.conf` with CLI overrides applied.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable client or terminal errors.
///
/// Details:
/// - Headless mode (`RECIPE_BROWSER_TEST_HEADLESS=1`) skips the terminal and
///   the input thread; the loop then only applies fetch results.
/// - The tag list and the first recipe page are requested concurrently
///   before the first frame.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("RECIPE_BROWSER_TEST_HEADLESS").ok().as_deref() == Some("1");

    let client = RecipeClient::new(
        &settings.base_url,
        Duration::from_secs(settings.request_timeout_secs.max(1)),
    )?;

    if !headless {
        setup_terminal(settings.mouse_enabled)?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = initialize_app_state(&settings, headless);
    let mut channels = Channels::new(Arc::new(client));

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    trigger_initial_loads(&mut app, &channels);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("event loop finished");
    Ok(())
}
