//! Pagination over the current recipe list.

use crate::state::{AppState, Recipe};

/// What: Derive the displayed prefix of a recipe list.
///
/// Inputs:
/// - `recipes`: Full list for the current filter.
/// - `limit`: Pagination cutoff.
///
/// Output:
/// - `&recipes[..min(limit, recipes.len())]`.
#[must_use]
pub fn displayed(recipes: &[Recipe], limit: usize) -> &[Recipe] {
    &recipes[..limit.min(recipes.len())]
}

/// What: Compute the limit after one "see more".
///
/// Inputs:
/// - `limit`: Current cutoff.
/// - `step`: Increment per "see more".
/// - `total`: Number of recipes available.
///
/// Output:
/// - `max(limit, min(limit + step, total))`.
///
/// Details:
/// - Never overshoots `total`, so repeated presses stop once everything is
///   visible, and never shrinks below the current value.
#[must_use]
pub fn next_limit(limit: usize, step: usize, total: usize) -> usize {
    limit.max(limit.saturating_add(step).min(total))
}

/// Reveal the next `limit_step` recipes without refetching.
pub fn see_more(app: &mut AppState) {
    let before = app.limit;
    app.limit = next_limit(app.limit, app.limit_step, app.recipes.len());
    tracing::debug!(from = before, to = app.limit, total = app.recipes.len(), "see more");
}

/// Return `limit` to its initial value.
pub(crate) fn reset_limit(app: &mut AppState) {
    app.limit = app.initial_limit;
}
