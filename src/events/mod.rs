//! Event handling layer for the recipe browser.
//!
//! `handle_event` routes overlays first, then global key bindings, then the
//! focused pane; mouse input is delegated to the `mouse` submodule.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::logic::{clear_tag_filter, close_detail, reload, see_more, toggle_theme};
use crate::state::{AppState, Focus, Modal, RecipesRequest};
use crate::theme::KeyMap;

mod mouse;
mod panes;

/// Lines moved by one PageUp/PageDown in the detail overlay.
const DETAIL_PAGE: u16 = 10;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
    tags_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(*ke, app, recipes_tx, tags_tx)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(*me, app, recipes_tx);
            false
        }
        _ => false,
    }
}

fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
    tags_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    if handle_modal_key(ke, app) {
        return false;
    }

    let (code, mods) = (ke.code, ke.modifiers);
    let km = app.keymap.clone();
    if KeyMap::any(&km.quit, code, mods) {
        return true;
    }
    if KeyMap::any(&km.help, code, mods) {
        app.modal = Modal::Help;
    } else if KeyMap::any(&km.toggle_theme, code, mods) {
        toggle_theme(app);
    } else if KeyMap::any(&km.see_more, code, mods) {
        see_more(app);
    } else if KeyMap::any(&km.clear_filter, code, mods) {
        clear_tag_filter(app, recipes_tx);
    } else if KeyMap::any(&km.reload, code, mods) {
        reload(app, recipes_tx, tags_tx);
    } else if KeyMap::any(&km.switch_pane, code, mods) {
        app.focus = match app.focus {
            Focus::Tags => Focus::Grid,
            Focus::Grid => Focus::Tags,
        };
    } else {
        match app.focus {
            Focus::Tags => panes::handle_tags_key(code, app, recipes_tx),
            Focus::Grid => panes::handle_grid_key(code, app, recipes_tx),
        }
    }
    false
}

/// What: Route a key press to the open overlay, if any.
///
/// Output:
/// - `true` when an overlay consumed the key.
///
/// Details:
/// - Overlays swallow every key so nothing behind them changes while open.
fn handle_modal_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match &mut app.modal {
        Modal::None => false,
        Modal::Help => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')) {
                app.modal = Modal::None;
            }
            true
        }
        Modal::Detail { scroll, .. } => {
            match ke.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                    close_detail(app);
                }
                KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
                KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                KeyCode::PageDown => *scroll = scroll.saturating_add(DETAIL_PAGE),
                KeyCode::PageUp => *scroll = scroll.saturating_sub(DETAIL_PAGE),
                KeyCode::Home => *scroll = 0,
                _ => {}
            }
            true
        }
    }
}
