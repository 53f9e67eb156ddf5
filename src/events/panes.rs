//! Key handling for the tag bar and the recipe grid.

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::logic::{
    activate_tag_row, card_to_edge, clear_tag_filter, focused_recipe, move_card, move_tag_cursor,
    show_detail,
};
use crate::state::{AppState, Focus, RecipesRequest};

/// Rows moved by PageUp/PageDown in the tag bar.
const TAG_PAGE: isize = 10;

/// What: Handle a key while the tag bar has focus.
///
/// Details:
/// - Up/Down (or `k`/`j`) move the cursor, Enter/Space applies the row,
///   Right/Esc hand focus back to the grid.
pub(super) fn handle_tags_key(
    code: KeyCode,
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => move_tag_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_tag_cursor(app, 1),
        KeyCode::PageUp => move_tag_cursor(app, -TAG_PAGE),
        KeyCode::PageDown => move_tag_cursor(app, TAG_PAGE),
        KeyCode::Home => move_tag_cursor(app, isize::MIN),
        KeyCode::End => move_tag_cursor(app, isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => activate_tag_row(app, recipes_tx),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Esc => app.focus = Focus::Grid,
        _ => {}
    }
}

/// What: Handle a key while the recipe grid has focus.
///
/// Details:
/// - Arrows (or `hjkl`) move between cards, Enter opens the detail overlay,
///   Esc drops an active tag filter.
/// - Left on the first column moves focus to the tag bar.
pub(super) fn handle_grid_key(
    code: KeyCode,
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            if app.card_cursor % app.grid_columns.max(1) == 0 {
                app.focus = Focus::Tags;
            } else {
                move_card(app, -1, 0);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => move_card(app, 1, 0),
        KeyCode::Up | KeyCode::Char('k') => move_card(app, 0, -1),
        KeyCode::Down | KeyCode::Char('j') => move_card(app, 0, 1),
        KeyCode::Home => card_to_edge(app, false),
        KeyCode::End => card_to_edge(app, true),
        KeyCode::Enter => {
            if let Some(recipe) = focused_recipe(app).cloned() {
                show_detail(app, recipe);
            }
        }
        KeyCode::Esc => clear_tag_filter(app, recipes_tx),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Recipe;

    #[test]
    fn left_on_first_column_focuses_tags() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.recipes = vec![Recipe::default(), Recipe::default()];
        app.grid_columns = 2;
        app.card_cursor = 1;
        handle_grid_key(KeyCode::Left, &mut app, &tx);
        assert_eq!(app.card_cursor, 0);
        assert_eq!(app.focus, Focus::Grid);
        handle_grid_key(KeyCode::Left, &mut app, &tx);
        assert_eq!(app.focus, Focus::Tags);
    }

    #[test]
    fn enter_on_empty_grid_opens_nothing() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        handle_grid_key(KeyCode::Enter, &mut app, &tx);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn home_and_end_in_tag_bar() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.tags = (0..25).map(|i| format!("tag{i}")).collect();
        handle_tags_key(KeyCode::End, &mut app, &tx);
        assert_eq!(app.tag_cursor, 25);
        handle_tags_key(KeyCode::PageUp, &mut app, &tx);
        assert_eq!(app.tag_cursor, 15);
        handle_tags_key(KeyCode::Home, &mut app, &tx);
        assert_eq!(app.tag_cursor, 0);
    }
}
