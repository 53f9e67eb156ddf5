use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::RecipeSource;
use crate::state::{RecipesRequest, RecipesResult};

use super::workers::{spawn_recipes_worker, spawn_tags_worker};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Holds the terminal event stream plus the request/response pairs for the
///   two fetch workers. Request receivers are handed to the workers at
///   construction, so only their senders live here.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Recipe requests to the recipes worker.
    pub recipes_req_tx: mpsc::UnboundedSender<RecipesRequest>,
    /// Recipe responses, tagged with their request id.
    pub recipes_res_rx: mpsc::UnboundedReceiver<RecipesResult>,
    /// Tag fetch requests to the tags worker.
    pub tags_req_tx: mpsc::UnboundedSender<()>,
    /// Tag list or error text.
    pub tags_res_rx: mpsc::UnboundedReceiver<Result<Vec<String>, String>>,
}

impl Channels {
    /// What: Create all channels and spawn the fetch workers on `source`.
    ///
    /// Inputs:
    /// - `source`: Recipe source shared by both workers.
    ///
    /// Output:
    /// - Channels ready for the event loop.
    ///
    /// Details:
    /// - Must be called inside a tokio runtime; the workers are tokio tasks.
    pub fn new<S: RecipeSource>(source: Arc<S>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (recipes_req_tx, recipes_req_rx) = mpsc::unbounded_channel::<RecipesRequest>();
        let (recipes_res_tx, recipes_res_rx) = mpsc::unbounded_channel::<RecipesResult>();
        let (tags_req_tx, tags_req_rx) = mpsc::unbounded_channel::<()>();
        let (tags_res_tx, tags_res_rx) = mpsc::unbounded_channel::<Result<Vec<String>, String>>();

        spawn_tags_worker(Arc::clone(&source), tags_req_rx, tags_res_tx);
        spawn_recipes_worker(source, recipes_req_rx, recipes_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            recipes_req_tx,
            recipes_res_rx,
            tags_req_tx,
            tags_res_rx,
        }
    }
}
