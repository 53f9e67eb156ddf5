use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_recipes_result, handle_tags_result};

/// What: Wait for the next channel message and apply it.
///
/// Inputs:
/// - `app`: Application state.
/// - `channels`: Runtime channels.
///
/// Output:
/// - `true` when the application should exit.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(
                &ev,
                app,
                &channels.recipes_req_tx,
                &channels.tags_req_tx,
            )
        }
        Some(result) = channels.recipes_res_rx.recv() => {
            handle_recipes_result(app, result);
            false
        }
        Some(outcome) = channels.tags_res_rx.recv() => {
            handle_tags_result(app, outcome);
            false
        }
        else => true,
    }
}

/// What: Drive rendering and message handling until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw on; `None` in headless mode.
/// - `app`: Application state.
/// - `channels`: Runtime channels.
///
/// Details:
/// - One frame is drawn before each wait, so every applied message is visible
///   on the next frame.
/// - Exits when the event handler returns `true` or every channel has closed.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "frame draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
