//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! Each test builds an `AppState` for one render branch, draws a frame, and
//! checks the buffer text and the hit-test rectangles the renderer records.

use ratatui::{Terminal, backend::TestBackend};

use recipe_browser::logic::{see_more, show_detail, toggle_theme};
use recipe_browser::state::{AppState, FetchFailed, FetchTarget, Modal, Recipe};
use recipe_browser::ui;

fn recipe(id: u64) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {id}"),
        cuisine: Some("Italian".to_string()),
        difficulty: Some("Easy".to_string()),
        prep_time_minutes: 15,
        cook_time_minutes: 30,
        servings: 4,
        ingredients: vec!["Flour".to_string(), "Water".to_string()],
        instructions: vec!["Mix.".to_string(), "Bake.".to_string()],
        calories_per_serving: 250.0,
        ..Recipe::default()
    }
}

/// Create an `AppState` in the browse branch with `n` recipes.
fn browse_state(n: u64) -> AppState {
    let mut app = AppState::default();
    app.loading = false;
    app.tags_loading = false;
    app.tags = vec!["Asian".to_string(), "Breakfast".to_string(), "Dinner".to_string()];
    app.recipes = (1..=n).map(recipe).collect();
    app
}

/// Render UI to a `TestBackend` and return the terminal for assertions.
fn render(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("failed to create test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    terminal
}

/// Concatenate the buffer into one string, row by row.
fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn loading_branch_before_first_response() {
    let mut app = AppState::default();
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("Loading recipes"));
    assert!(app.card_rects.is_empty());
    assert!(app.tag_list_rect.is_none());
}

#[test]
/// What: Browse branch shows `limit` cards and the "see more" button
///
/// Inputs:
/// - 30 recipes, default limit 8, 120x40 terminal
///
/// Output:
/// - 8 card rects in two columns and "See more" recorded; after three
///   "see more" presses the title reads 20 of 30
fn browse_branch_renders_limited_cards() {
    let mut app = browse_state(30);
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("Recipe 1"));
    assert!(text.contains("Showing 8 of 30"));
    assert!(text.contains("See more"));
    assert!(app.see_more_rect.is_some());
    assert_eq!(app.grid_columns, 2);
    assert!(!app.card_rects.is_empty());
    assert!(app.card_rects.iter().all(|(_, i)| *i < 8));

    for _ in 0..3 {
        see_more(&mut app);
    }
    let terminal = render(&mut app, 120, 40);
    assert!(screen_text(&terminal).contains("Showing 20 of 30"));
}

#[test]
fn see_more_hidden_when_everything_shown() {
    let mut app = browse_state(5);
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(!text.contains("See more"));
    assert!(app.see_more_rect.is_none());
    assert!(text.contains("Showing 5 of 5"));
}

#[test]
/// What: Empty state offers "clear filter" only with an active tag
///
/// Inputs:
/// - No recipes, first without then with a selected tag
///
/// Output:
/// - Message both times; clear button rect only in the filtered case
fn empty_state_clear_filter_only_with_tag() {
    let mut app = browse_state(0);
    let terminal = render(&mut app, 120, 40);
    assert!(screen_text(&terminal).contains("No recipes found."));
    assert!(app.clear_filter_rects.is_empty());

    app.selected_tag = Some("Breakfast".to_string());
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("No recipes found."));
    assert!(text.contains("Clear filter"));
    // tag bar button plus the empty-state button
    assert_eq!(app.clear_filter_rects.len(), 2);
}

#[test]
fn error_branch_shows_generic_message_only() {
    let mut app = browse_state(3);
    app.recipes_error = Some(FetchFailed {
        target: FetchTarget::Recipes,
        message: "HTTP 503 from http://example.invalid".to_string(),
    });
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("Error loading recipes"));
    assert!(!text.contains("HTTP 503"));
    assert!(app.card_rects.is_empty());
    assert!(app.tag_list_rect.is_some());
}

#[test]
fn tag_failure_is_inline_and_keeps_grid() {
    let mut app = browse_state(4);
    app.tags.clear();
    app.tags_error = Some(FetchFailed {
        target: FetchTarget::Tags,
        message: "timeout".to_string(),
    });
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("Tags unavailable"));
    assert!(text.contains("Recipe 1"));
    assert!(!text.contains("Error loading recipes"));
}

#[test]
fn refreshing_indicator_over_loaded_recipes() {
    let mut app = browse_state(10);
    app.loading = true;
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    assert!(text.contains("Refreshing"));
    assert!(text.contains("Recipe 1"));
}

#[test]
/// What: Detail overlay shows the full record on top of the grid
///
/// Inputs:
/// - Recipe 2 opened in detail
///
/// Output:
/// - Stat tile labels, ingredients, numbered instructions, and the overlay rect
fn detail_overlay_renders_full_record() {
    let mut app = browse_state(6);
    let r = app.recipes[1].clone();
    show_detail(&mut app, r);
    let terminal = render(&mut app, 120, 40);
    let text = screen_text(&terminal);
    for needle in [
        "Recipe 2",
        "Prep",
        "Cook",
        "Servings",
        "Difficulty",
        "Easy",
        "• Flour",
        "1. Mix.",
        "2. Bake.",
        "Italian",
        "250 kcal per serving",
    ] {
        assert!(text.contains(needle), "missing {needle:?}");
    }
    assert!(app.detail_rect.is_some());
}

#[test]
/// What: Long wrapped instructions can all be scrolled into view
///
/// Inputs:
/// - 60x20 terminal; eight instructions of about 115 characters each, every
///   one ending in a distinct marker word
/// - Scroll offset pushed past the end
///
/// Output:
/// - At the top the last marker is off screen; at the clamped bottom it is
///   visible and the body no longer shows the ingredients heading
fn detail_scrolls_to_last_wrapped_instruction() {
    let mut app = browse_state(1);
    app.recipes[0].instructions = (1..=8)
        .map(|i| {
            format!(
                "Stir the sauce slowly over a low heat until it thickens and coats the back of a spoon then season well mark{i}z"
            )
        })
        .collect();
    let r = app.recipes[0].clone();
    show_detail(&mut app, r);

    let terminal = render(&mut app, 60, 20);
    let text = screen_text(&terminal);
    assert!(text.contains("Ingredients"));
    assert!(!text.contains("mark8z"));

    if let Modal::Detail { scroll, .. } = &mut app.modal {
        *scroll = u16::MAX;
    }
    let terminal = render(&mut app, 60, 20);
    let text = screen_text(&terminal);
    assert!(text.contains("mark8z"), "last instruction must be reachable");
    assert!(!text.contains("Ingredients"));
    assert!(matches!(app.modal, Modal::Detail { scroll, .. } if scroll < u16::MAX));
}

#[test]
fn missing_difficulty_shows_medium() {
    let mut app = browse_state(1);
    app.recipes[0].difficulty = None;
    let terminal = render(&mut app, 120, 40);
    assert!(screen_text(&terminal).contains("Medium"));
}

#[test]
fn theme_toggle_changes_background() {
    let mut app = browse_state(2);
    let dark = render(&mut app, 80, 24);
    let dark_bg = dark.backend().buffer()[(0, 10)].bg;
    toggle_theme(&mut app);
    let light = render(&mut app, 80, 24);
    let light_bg = light.backend().buffer()[(0, 10)].bg;
    assert_ne!(dark_bg, light_bg);
    assert!(screen_text(&light).contains("Light"));
}

#[test]
fn narrow_terminal_uses_single_column() {
    let mut app = browse_state(8);
    let _ = render(&mut app, 60, 30);
    assert_eq!(app.grid_columns, 1);
}
