//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use crate::state::{AppState, Recipe};

/// What: Build a recipe with a name and a few display fields filled in.
///
/// Inputs:
/// - `id`: Recipe identifier; also used in the name.
///
/// Output:
/// - Recipe named `Recipe {id}` with times, servings and one tag.
pub fn recipe(id: u64) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {id}"),
        cuisine: Some("Italian".to_string()),
        difficulty: Some("Easy".to_string()),
        prep_time_minutes: 10,
        cook_time_minutes: 20,
        servings: 4,
        tags: vec!["Dinner".to_string()],
        ..Recipe::default()
    }
}

/// What: Provide an `AppState` in the browse branch with `n` recipes loaded.
///
/// Inputs:
/// - `n`: Number of recipes.
///
/// Output:
/// - State with both loading flags cleared and two tags.
pub fn browse_app(n: u64) -> AppState {
    let mut app = AppState::default();
    app.loading = false;
    app.tags_loading = false;
    app.tags = vec!["Asian".to_string(), "Breakfast".to_string()];
    app.recipes = (1..=n).map(recipe).collect();
    app
}
