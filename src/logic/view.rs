//! Render-branch selection and the purely local view operations.

use crate::state::{AppState, Modal, Recipe};

/// Main view branch, evaluated in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// First load still in flight and nothing to show yet.
    Loading,
    /// The latest recipe request failed.
    Error,
    /// Tag bar, grid and pagination controls.
    Browse,
}

/// What: Pick the main view branch for the current state.
///
/// Inputs:
/// - `app`: Application state.
///
/// Output:
/// - `Loading` while a request is in flight with no recipes to show,
///   otherwise `Error` when the last recipe request failed, otherwise `Browse`.
///
/// Details:
/// - A failed tag request never selects `Error`; the tag bar reports it inline.
#[must_use]
pub fn view_state(app: &AppState) -> ViewState {
    if app.loading && app.recipes.is_empty() {
        ViewState::Loading
    } else if app.recipes_error.is_some() {
        ViewState::Error
    } else {
        ViewState::Browse
    }
}

/// Whether the browse branch should show the inline refresh indicator.
#[must_use]
pub fn is_refreshing(app: &AppState) -> bool {
    app.loading && !app.recipes.is_empty()
}

/// Whether the browse branch should show the empty-state message.
#[must_use]
pub fn is_empty_state(app: &AppState) -> bool {
    app.recipes.is_empty()
}

/// Open the detail overlay for `recipe`.
pub fn show_detail(app: &mut AppState, recipe: Recipe) {
    tracing::debug!(id = recipe.id, name = %recipe.name, "opening recipe detail");
    app.modal = Modal::Detail {
        recipe: Box::new(recipe),
        scroll: 0,
    };
}

/// Close the detail overlay; other overlays are left alone.
pub fn close_detail(app: &mut AppState) {
    if matches!(app.modal, Modal::Detail { .. }) {
        app.modal = Modal::None;
    }
}

/// Swap the theme configuration for its toggled counterpart.
pub fn toggle_theme(app: &mut AppState) {
    app.theme = app.theme.toggled();
    tracing::info!(mode = app.theme.mode.as_config_key(), "theme toggled");
}
