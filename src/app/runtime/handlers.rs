use crate::logic::clamp_card_cursor;
use crate::state::{AppState, FetchFailed, FetchTarget, RecipesResult};

/// What: Apply a recipe response to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `result`: Response from the recipes worker.
///
/// Output:
/// - `true` when the response was applied, `false` when it was stale.
///
/// Details:
/// - Only the response to `latest_recipes_request` is accepted; earlier
///   responses are dropped whatever order they arrive in.
/// - Success replaces `recipes` wholesale and clears the recipe error.
/// - Failure records the error and leaves the previous recipes in place.
pub fn handle_recipes_result(app: &mut AppState, result: RecipesResult) -> bool {
    if result.id != app.latest_recipes_request {
        tracing::debug!(
            id = result.id,
            latest = app.latest_recipes_request,
            "dropping stale recipes response"
        );
        return false;
    }
    app.loading = false;
    match result.outcome {
        Ok(list) => {
            tracing::info!(tag = ?result.tag, count = list.len(), "recipes loaded");
            app.recipes = list;
            app.recipes_error = None;
            clamp_card_cursor(app);
        }
        Err(message) => {
            tracing::warn!(tag = ?result.tag, error = %message, "failed to load recipes");
            app.recipes_error = Some(FetchFailed {
                target: FetchTarget::Recipes,
                message,
            });
        }
    }
    true
}

/// What: Apply a tag list response to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Tag list or error text from the tags worker.
///
/// Details:
/// - Success replaces `tags` and repositions the tag cursor on the active
///   filter, if it is still listed.
/// - Failure keeps any previous tags; the tag bar reports it inline.
pub fn handle_tags_result(app: &mut AppState, outcome: Result<Vec<String>, String>) {
    app.tags_loading = false;
    match outcome {
        Ok(tags) => {
            tracing::info!(count = tags.len(), "tags loaded");
            app.tags = tags;
            app.tags_error = None;
            app.tag_cursor = app
                .selected_tag
                .as_deref()
                .and_then(|sel| app.tags.iter().position(|t| t == sel))
                .map_or(0, |i| i + 1);
            app.tag_list_state.select(Some(app.tag_cursor));
        }
        Err(message) => {
            tracing::warn!(error = %message, "failed to load tags");
            app.tags_error = Some(FetchFailed {
                target: FetchTarget::Tags,
                message,
            });
        }
    }
}
