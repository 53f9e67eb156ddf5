//! Tag filtering and the recipe/tag requests it triggers.

use tokio::sync::mpsc;

use crate::state::{AppState, RecipesRequest};

use super::paging::reset_limit;
use super::selection::reset_card_cursor;

/// What: Issue a recipe request for the current filter.
///
/// Inputs:
/// - `app`: Application state; allocates the request id and sets `loading`.
/// - `recipes_tx`: Channel to the background recipes worker.
///
/// Output:
/// - None (side effect: sends a [`RecipesRequest`]).
///
/// Details:
/// - The new id becomes `latest_recipes_request`, so any response to an
///   earlier request is dropped when it arrives.
/// - `recipes` is left untouched; stale cards stay visible while the refetch
///   is in flight.
pub fn request_recipes(app: &mut AppState, recipes_tx: &mpsc::UnboundedSender<RecipesRequest>) {
    let id = app.next_request_id;
    app.next_request_id = app.next_request_id.wrapping_add(1);
    app.latest_recipes_request = id;
    app.loading = true;
    let tag = app.selected_tag.clone();
    tracing::debug!(id, tag = ?tag, "requesting recipes");
    if recipes_tx.send(RecipesRequest { id, tag }).is_err() {
        tracing::warn!(id, "recipes worker is gone; request dropped");
    }
}

/// What: Filter the grid by a tag.
///
/// Inputs:
/// - `app`: Application state.
/// - `tag`: Tag to filter by.
/// - `recipes_tx`: Channel to the background recipes worker.
///
/// Output:
/// - None (side effect: state change and, when the tag changed, a new request).
///
/// Details:
/// - Always resets `limit` to its initial value, before the new list arrives.
/// - Re-selecting the active tag skips the refetch; the list is unchanged.
pub fn select_tag(
    app: &mut AppState,
    tag: &str,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
) {
    reset_limit(app);
    reset_card_cursor(app);
    if app.selected_tag.as_deref() == Some(tag) {
        return;
    }
    tracing::info!(tag = %tag, "tag filter selected");
    app.selected_tag = Some(tag.to_string());
    if let Some(pos) = app.tags.iter().position(|t| t == tag) {
        app.tag_cursor = pos + 1;
        app.tag_list_state.select(Some(app.tag_cursor));
    }
    request_recipes(app, recipes_tx);
}

/// What: Remove the tag filter and load the unfiltered list.
///
/// Inputs:
/// - `app`: Application state.
/// - `recipes_tx`: Channel to the background recipes worker.
///
/// Output:
/// - None (side effect: state change and, when a filter was active, a new request).
///
/// Details:
/// - `limit` is reset even when no filter was active; only the refetch is skipped.
pub fn clear_tag_filter(app: &mut AppState, recipes_tx: &mpsc::UnboundedSender<RecipesRequest>) {
    reset_limit(app);
    reset_card_cursor(app);
    if app.selected_tag.is_none() {
        return;
    }
    tracing::info!("tag filter cleared");
    app.selected_tag = None;
    app.tag_cursor = 0;
    app.tag_list_state.select(Some(0));
    request_recipes(app, recipes_tx);
}

/// What: Re-issue the current recipe request, and the tag request if it failed.
///
/// Inputs:
/// - `app`: Application state.
/// - `recipes_tx`: Channel to the background recipes worker.
/// - `tags_tx`: Channel to the background tags worker.
///
/// Details:
/// - A manual user action; nothing is retried automatically.
/// - Keeps `limit` and the filter as they are.
pub fn reload(
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
    tags_tx: &mpsc::UnboundedSender<()>,
) {
    request_recipes(app, recipes_tx);
    if app.tags_error.is_some() && !app.tags_loading {
        app.tags_loading = true;
        if tags_tx.send(()).is_err() {
            tracing::warn!("tags worker is gone; request dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchFailed, FetchTarget};

    #[test]
    /// What: Selecting a tag resets the limit and sends a filtered request
    ///
    /// Inputs:
    /// - State with `limit = 20` and tags loaded
    ///
    /// Output:
    /// - `limit == 8`, `loading`, one request carrying the tag and the latest id
    fn select_tag_resets_limit_and_requests() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.loading = false;
        app.tags = vec!["Dinner".into(), "Breakfast".into()];
        app.limit = 20;
        select_tag(&mut app, "Breakfast", &tx);
        assert_eq!(app.limit, 8);
        assert!(app.loading);
        assert_eq!(app.selected_tag.as_deref(), Some("Breakfast"));
        assert_eq!(app.tag_cursor, 2);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.tag.as_deref(), Some("Breakfast"));
        assert_eq!(req.id, app.latest_recipes_request);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Re-selecting the active tag resets paging without refetching
    ///
    /// Inputs:
    /// - State filtered by "Dinner" with `limit = 20`, cursor on card 5
    ///
    /// Output:
    /// - `limit == 8`, cursor back at 0, filter unchanged, no request sent
    fn reselecting_active_tag_resets_limit_only() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.loading = false;
        app.selected_tag = Some("Dinner".into());
        app.limit = 20;
        app.card_cursor = 5;
        select_tag(&mut app, "Dinner", &tx);
        assert_eq!(app.limit, 8);
        assert_eq!(app.card_cursor, 0);
        assert_eq!(app.selected_tag.as_deref(), Some("Dinner"));
        assert!(!app.loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clearing_without_filter_resets_limit_only() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.loading = false;
        app.limit = 20;
        clear_tag_filter(&mut app, &tx);
        assert_eq!(app.limit, 8);
        assert_eq!(app.selected_tag, None);
        assert!(!app.loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Clearing an active filter resets the limit and requests the full list
    ///
    /// Inputs:
    /// - State filtered by "Dinner" with `limit = 24`
    ///
    /// Output:
    /// - No filter, `limit == 8`, one unfiltered request; clearing again sends nothing
    fn clear_filter_requests_unfiltered_list() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.selected_tag = Some("Dinner".into());
        app.limit = 24;
        clear_tag_filter(&mut app, &tx);
        assert_eq!(app.selected_tag, None);
        assert_eq!(app.limit, 8);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.tag, None);
        clear_tag_filter(&mut app, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn request_ids_increase_monotonically() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        request_recipes(&mut app, &tx);
        request_recipes(&mut app, &tx);
        let a = rx.try_recv().expect("first").id;
        let b = rx.try_recv().expect("second").id;
        assert!(b > a);
        assert_eq!(app.latest_recipes_request, b);
    }

    #[test]
    fn reload_retries_tags_only_after_failure() {
        let (rtx, mut rrx) = mpsc::unbounded_channel();
        let (ttx, mut trx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.tags_loading = false;
        reload(&mut app, &rtx, &ttx);
        assert!(rrx.try_recv().is_ok());
        assert!(trx.try_recv().is_err());

        app.tags_error = Some(FetchFailed {
            target: FetchTarget::Tags,
            message: "boom".into(),
        });
        reload(&mut app, &rtx, &ttx);
        assert!(rrx.try_recv().is_ok());
        assert!(trx.try_recv().is_ok());
        assert!(app.tags_loading);
    }
}
