use crate::logic::request_recipes;
use crate::state::AppState;
use crate::theme::Settings;

use super::channels::Channels;

/// What: Build the initial application state from resolved settings.
///
/// Inputs:
/// - `settings`: Settings after CLI overrides.
/// - `headless`: When `true`, skip terminal-dependent defaults.
///
/// Output:
/// - Fresh `AppState` in the loading branch.
pub fn initialize_app_state(settings: &Settings, headless: bool) -> AppState {
    let app = AppState::new(settings);
    tracing::info!(
        base_url = %settings.base_url,
        initial_limit = app.initial_limit,
        limit_step = app.limit_step,
        mode = app.theme.mode.as_config_key(),
        headless,
        "application state initialized"
    );
    app
}

/// What: Kick off the tag fetch and the first recipe fetch.
///
/// Inputs:
/// - `app`: Application state.
/// - `channels`: Runtime channels with live workers.
///
/// Details:
/// - Both requests are sent before the first frame; the workers run them
///   concurrently and the first frame shows the loading branch.
pub fn trigger_initial_loads(app: &mut AppState, channels: &Channels) {
    app.tags_loading = true;
    if channels.tags_req_tx.send(()).is_err() {
        tracing::warn!("tags worker is gone; initial tag load skipped");
    }
    request_recipes(app, &channels.recipes_req_tx);
}
