//! Cursor movement in the tag bar and the recipe grid.

use tokio::sync::mpsc;

use crate::state::{AppState, Recipe, RecipesRequest};

/// Put the card cursor back on the first card.
pub(crate) fn reset_card_cursor(app: &mut AppState) {
    app.card_cursor = 0;
    app.grid_scroll = 0;
}

/// Keep the card cursor inside the displayed cards.
pub fn clamp_card_cursor(app: &mut AppState) {
    let shown = app.displayed_recipes().len();
    app.card_cursor = app.card_cursor.min(shown.saturating_sub(1));
}

/// What: Move the card cursor within the grid.
///
/// Inputs:
/// - `app`: Application state (uses `grid_columns` from the last render).
/// - `dx`: Horizontal step in cards (`-1` left, `1` right).
/// - `dy`: Vertical step in rows (`-1` up, `1` down).
///
/// Details:
/// - Horizontal moves wrap across row ends; vertical moves stop at the first
///   and last card instead of leaving the grid.
pub fn move_card(app: &mut AppState, dx: isize, dy: isize) {
    let shown = app.displayed_recipes().len();
    if shown == 0 {
        app.card_cursor = 0;
        return;
    }
    let cols = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
    let delta = dx.saturating_add(dy.saturating_mul(cols));
    app.card_cursor = step_index(app.card_cursor, delta, shown - 1);
}

/// Move `cur` by `delta`, clamped to `0..=last`.
fn step_index(cur: usize, delta: isize, last: usize) -> usize {
    let moved = if delta < 0 {
        cur.saturating_sub(delta.unsigned_abs())
    } else {
        cur.saturating_add(delta.unsigned_abs())
    };
    moved.min(last)
}

/// Jump the card cursor to the first or last displayed card.
pub fn card_to_edge(app: &mut AppState, end: bool) {
    app.card_cursor = if end {
        app.displayed_recipes().len().saturating_sub(1)
    } else {
        0
    };
}

/// Recipe under the card cursor, if any.
#[must_use]
pub fn focused_recipe(app: &AppState) -> Option<&Recipe> {
    app.displayed_recipes().get(app.card_cursor)
}

/// What: Move the tag bar cursor.
///
/// Inputs:
/// - `app`: Application state.
/// - `delta`: Rows to move; negative moves up.
///
/// Details:
/// - Row 0 is the "All recipes" entry; the cursor is clamped to the rows.
pub fn move_tag_cursor(app: &mut AppState, delta: isize) {
    let last = app.tag_rows().saturating_sub(1);
    app.tag_cursor = step_index(app.tag_cursor, delta, last);
    app.tag_list_state.select(Some(app.tag_cursor));
}

/// What: Apply the tag bar row under the cursor as the filter.
///
/// Inputs:
/// - `app`: Application state.
/// - `recipes_tx`: Channel to the background recipes worker.
///
/// Details:
/// - Row 0 clears the filter; any other row selects `tags[row - 1]`.
pub fn activate_tag_row(app: &mut AppState, recipes_tx: &mpsc::UnboundedSender<RecipesRequest>) {
    activate_tag_index(app, app.tag_cursor, recipes_tx);
}

/// Apply tag bar row `row` as the filter (row 0 clears it).
pub fn activate_tag_index(
    app: &mut AppState,
    row: usize,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
) {
    if row == 0 {
        app.tag_cursor = 0;
        app.tag_list_state.select(Some(0));
        super::clear_tag_filter(app, recipes_tx);
        return;
    }
    let Some(tag) = app.tags.get(row - 1).cloned() else {
        return;
    };
    app.tag_cursor = row;
    app.tag_list_state.select(Some(row));
    super::select_tag(app, &tag, recipes_tx);
}
