use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::RecipeSource;
use crate::state::{RecipesRequest, RecipesResult};

/// What: Spawn background worker for recipe list requests.
///
/// Inputs:
/// - `source`: Recipe source shared by every request.
/// - `req_rx`: Channel receiver for recipe requests.
/// - `res_tx`: Channel sender for recipe results.
///
/// Details:
/// - Each request runs in its own task, so a slow response never blocks a
///   newer one; results may arrive out of order and carry the request id so
///   the handler can drop stale ones.
/// - No retries and no cancellation of earlier in-flight requests.
pub fn spawn_recipes_worker<S: RecipeSource>(
    source: Arc<S>,
    mut req_rx: mpsc::UnboundedReceiver<RecipesRequest>,
    res_tx: mpsc::UnboundedSender<RecipesResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let src = Arc::clone(&source);
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let outcome = src
                    .fetch_recipes(req.tag.as_deref())
                    .await
                    .map_err(|e| e.to_string());
                match &outcome {
                    Ok(list) => {
                        tracing::debug!(id = req.id, tag = ?req.tag, count = list.len(), "recipes fetched");
                    }
                    Err(e) => {
                        tracing::warn!(id = req.id, tag = ?req.tag, error = %e, "recipes fetch failed");
                    }
                }
                let _ = tx.send(RecipesResult {
                    id: req.id,
                    tag: req.tag,
                    outcome,
                });
            });
        }
        tracing::debug!("recipes worker stopped");
    });
}

/// What: Spawn background worker for tag list requests.
///
/// Inputs:
/// - `source`: Recipe source shared by every request.
/// - `req_rx`: Channel receiver; each `()` asks for one tag fetch.
/// - `res_tx`: Channel sender for the tag list or the error text.
///
/// Details:
/// - Requests are served one at a time; the runtime sends one at startup and
///   another only when the user reloads after a failure.
pub fn spawn_tags_worker<S: RecipeSource>(
    source: Arc<S>,
    mut req_rx: mpsc::UnboundedReceiver<()>,
    res_tx: mpsc::UnboundedSender<Result<Vec<String>, String>>,
) {
    tokio::spawn(async move {
        while let Some(()) = req_rx.recv().await {
            let outcome = source.fetch_tags().await.map_err(|e| e.to_string());
            match &outcome {
                Ok(tags) => tracing::debug!(count = tags.len(), "tags fetched"),
                Err(e) => tracing::warn!(error = %e, "tags fetch failed"),
            }
            if res_tx.send(outcome).is_err() {
                break;
            }
        }
        tracing::debug!("tags worker stopped");
    });
}
