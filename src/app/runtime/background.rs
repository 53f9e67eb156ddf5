use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking terminal event reader.
///
/// Inputs:
/// - `headless`: When `true`, no reader is started.
/// - `event_tx`: Channel sender for terminal events.
/// - `event_thread_cancelled`: Flag set by the runtime on exit.
///
/// Details:
/// - Runs on a plain OS thread because `crossterm::event::read` blocks.
/// - Polls with a 50 ms timeout so the cancellation flag is honored promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    std::thread::sleep(std::time::Duration::from_millis(50));
                }
            }
        }
        tracing::debug!("event thread stopped");
    });
}
