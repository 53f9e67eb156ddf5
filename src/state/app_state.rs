//! Central `AppState` container.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{FetchFailed, Focus, Recipe};
use crate::theme::{KeyMap, Settings, ThemeConfig};

/// View state for the recipe browser, owned by the event loop.
///
/// Fetch results, user input, and the renderer all mutate this structure.
/// Nothing in it survives a restart.
#[derive(Debug)]
pub struct AppState {
    /// Recipes for the current filter, in server order. Replaced wholesale.
    pub recipes: Vec<Recipe>,
    /// Tag list in server order. Fetched once per run.
    pub tags: Vec<String>,
    /// Active tag filter; `None` means unfiltered.
    pub selected_tag: Option<String>,
    /// Pagination cutoff into `recipes`.
    pub limit: usize,
    /// Value `limit` returns to whenever the filter changes.
    pub initial_limit: usize,
    /// Increment applied by "see more".
    pub limit_step: usize,

    /// Whether a recipe request is in flight.
    pub loading: bool,
    /// Whether the tag request is in flight.
    pub tags_loading: bool,
    /// Failure of the latest recipe request, if it failed.
    pub recipes_error: Option<FetchFailed>,
    /// Failure of the tag request, if it failed.
    pub tags_error: Option<FetchFailed>,

    /// Presentation configuration handed to every renderer.
    pub theme: ThemeConfig,
    /// Active overlay (recipe detail, help), if any.
    pub modal: Modal,
    /// Configurable key bindings.
    pub keymap: KeyMap,

    // Request coordination
    /// Identifier of the latest recipe request whose response will be accepted.
    pub latest_recipes_request: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,

    // Navigation
    /// Which pane receives arrow keys.
    pub focus: Focus,
    /// Cursor in the tag bar; row 0 is the "All recipes" entry, row `i + 1` is `tags[i]`.
    pub tag_cursor: usize,
    /// List state backing the tag bar widget.
    pub tag_list_state: ListState,
    /// Index of the highlighted card within `displayed_recipes()`.
    pub card_cursor: usize,
    /// First visible grid row, kept in sync by the grid renderer.
    pub grid_scroll: usize,
    /// Column count used by the last grid render, for Up/Down movement.
    pub grid_columns: usize,

    // Hit-test rectangles written by the renderer for mouse handling
    /// Inner area of the tag list, if rendered.
    pub tag_list_rect: Option<Rect>,
    /// Card rectangles paired with their index into `displayed_recipes()`.
    pub card_rects: Vec<(Rect, usize)>,
    /// "See more" button, if visible.
    pub see_more_rect: Option<Rect>,
    /// "Clear filter" buttons (tag bar and empty state), when visible.
    pub clear_filter_rects: Vec<Rect>,
    /// Detail overlay area, if open.
    pub detail_rect: Option<Rect>,
}

impl AppState {
    /// What: Build a fresh state from user settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed settings (limits, start palette, key map).
    ///
    /// Output:
    /// - State with no data, `loading` set, and the configured limits.
    ///
    /// Details:
    /// - `loading` and `tags_loading` start `true` because both fetches are
    ///   issued at startup; the first frame shows the loading branch.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let initial_limit = settings.initial_limit.max(1);
        let mut tag_list_state = ListState::default();
        tag_list_state.select(Some(0));
        Self {
            recipes: Vec::new(),
            tags: Vec::new(),
            selected_tag: None,
            limit: initial_limit,
            initial_limit,
            limit_step: settings.limit_step.max(1),
            loading: true,
            tags_loading: true,
            recipes_error: None,
            tags_error: None,
            theme: ThemeConfig::new(settings.start_mode),
            modal: Modal::None,
            keymap: settings.keymap.clone(),
            latest_recipes_request: 0,
            next_request_id: 1,
            focus: Focus::Grid,
            tag_cursor: 0,
            tag_list_state,
            card_cursor: 0,
            grid_scroll: 0,
            grid_columns: 1,
            tag_list_rect: None,
            card_rects: Vec::new(),
            see_more_rect: None,
            clear_filter_rects: Vec::new(),
            detail_rect: None,
        }
    }

    /// Recipes currently shown: the first `min(limit, len)` of `recipes`.
    #[must_use]
    pub fn displayed_recipes(&self) -> &[Recipe] {
        crate::logic::displayed(&self.recipes, self.limit)
    }

    /// Whether more recipes exist beyond the displayed prefix.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.displayed_recipes().len() < self.recipes.len()
    }

    /// Number of rows in the tag bar, including the leading "All recipes" entry.
    #[must_use]
    pub const fn tag_rows(&self) -> usize {
        self.tags.len() + 1
    }

    /// Drop hit-test rectangles from the previous frame.
    pub fn clear_hit_rects(&mut self) {
        self.tag_list_rect = None;
        self.card_rects.clear();
        self.see_more_rect = None;
        self.clear_filter_rects.clear();
        self.detail_rect = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    /// What: A new state reflects settings and starts in the loading branch
    ///
    /// Inputs:
    /// - Settings with custom limits and a light palette
    ///
    /// Output:
    /// - Limits copied, loading flags set, nothing displayed
    fn new_state_uses_settings() {
        let settings = Settings {
            initial_limit: 6,
            limit_step: 3,
            start_mode: ThemeMode::Light,
            ..Settings::default()
        };
        let app = AppState::new(&settings);
        assert_eq!(app.limit, 6);
        assert_eq!(app.initial_limit, 6);
        assert_eq!(app.limit_step, 3);
        assert!(!app.theme.is_dark());
        assert!(app.loading);
        assert!(app.tags_loading);
        assert!(app.displayed_recipes().is_empty());
        assert!(!app.has_more());
        assert_eq!(app.tag_rows(), 1);
    }

    #[test]
    fn zero_limits_are_raised_to_one() {
        let settings = Settings {
            initial_limit: 0,
            limit_step: 0,
            ..Settings::default()
        };
        let app = AppState::new(&settings);
        assert_eq!(app.limit, 1);
        assert_eq!(app.limit_step, 1);
    }
}
