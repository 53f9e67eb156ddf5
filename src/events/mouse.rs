//! Mouse handling against the hit-test rectangles written by the renderer.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use crate::logic::{
    activate_tag_index, clear_tag_filter, close_detail, move_card, see_more, show_detail,
};
use crate::state::{AppState, Focus, Modal, RecipesRequest};

fn hit(rect: Option<Rect>, pos: Position) -> bool {
    rect.is_some_and(|r| r.contains(pos))
}

/// What: Handle a mouse event.
///
/// Inputs:
/// - `me`: Mouse event from crossterm.
/// - `app`: Application state with the rectangles from the last frame.
/// - `recipes_tx`: Channel to the background recipes worker.
///
/// Details:
/// - With the detail overlay open, a click outside it closes it and the wheel
///   scrolls it; nothing behind the overlay reacts.
/// - Otherwise a left click on a card opens its detail, on a tag row applies
///   that filter, and on the "see more" or "clear filter" buttons runs them.
pub(super) fn handle_mouse_event(
    me: MouseEvent,
    app: &mut AppState,
    recipes_tx: &mpsc::UnboundedSender<RecipesRequest>,
) {
    let pos = Position::new(me.column, me.row);
    match &mut app.modal {
        Modal::Help => {
            if matches!(me.kind, MouseEventKind::Down(_)) {
                app.modal = Modal::None;
            }
            return;
        }
        Modal::Detail { scroll, .. } => {
            match me.kind {
                MouseEventKind::ScrollDown => *scroll = scroll.saturating_add(1),
                MouseEventKind::ScrollUp => *scroll = scroll.saturating_sub(1),
                MouseEventKind::Down(MouseButton::Left) if !hit(app.detail_rect, pos) => {
                    close_detail(app);
                }
                _ => {}
            }
            return;
        }
        Modal::None => {}
    }

    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = app
                .card_rects
                .iter()
                .find(|(r, _)| r.contains(pos))
                .map(|(_, i)| *i)
            {
                app.focus = Focus::Grid;
                app.card_cursor = idx;
                if let Some(recipe) = app.displayed_recipes().get(idx).cloned() {
                    show_detail(app, recipe);
                }
            } else if hit(app.see_more_rect, pos) {
                see_more(app);
            } else if app.clear_filter_rects.iter().any(|r| r.contains(pos)) {
                clear_tag_filter(app, recipes_tx);
            } else if let Some(list) = app.tag_list_rect.filter(|r| r.contains(pos)) {
                app.focus = Focus::Tags;
                let row = app.tag_list_state.offset() + usize::from(pos.y - list.y);
                activate_tag_index(app, row, recipes_tx);
            }
        }
        MouseEventKind::ScrollDown => {
            if hit(app.tag_list_rect, pos) {
                crate::logic::move_tag_cursor(app, 1);
            } else {
                move_card(app, 0, 1);
            }
        }
        MouseEventKind::ScrollUp => {
            if hit(app.tag_list_rect, pos) {
                crate::logic::move_tag_cursor(app, -1);
            } else {
                move_card(app, 0, -1);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Recipe;
    use crossterm::event::KeyModifiers;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Clicks hit cards and tag rows by the rectangles of the last frame
    ///
    /// Inputs:
    /// - One card rect, a tag list rect with two tags; clicks on each
    ///
    /// Output:
    /// - Card click opens its detail; outside click closes it; tag click filters
    fn clicks_follow_hit_rects() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.tags = vec!["Asian".into(), "Dessert".into()];
        app.recipes = vec![
            Recipe {
                id: 1,
                ..Recipe::default()
            },
            Recipe {
                id: 2,
                ..Recipe::default()
            },
        ];
        app.card_rects = vec![(Rect::new(30, 4, 20, 6), 1)];
        app.tag_list_rect = Some(Rect::new(1, 4, 20, 10));

        handle_mouse_event(click(35, 6), &mut app, &tx);
        assert_eq!(app.modal.detail_recipe().map(|r| r.id), Some(2));
        app.detail_rect = Some(Rect::new(10, 2, 40, 20));
        handle_mouse_event(click(12, 5), &mut app, &tx);
        assert!(app.modal.is_open());
        handle_mouse_event(click(0, 0), &mut app, &tx);
        assert!(!app.modal.is_open());

        handle_mouse_event(click(3, 6), &mut app, &tx);
        assert_eq!(app.selected_tag.as_deref(), Some("Dessert"));
        assert!(rx.try_recv().is_ok());
        assert_eq!(app.focus, Focus::Tags);
    }

    #[test]
    fn see_more_button_click() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.recipes = vec![Recipe::default(); 20];
        app.see_more_rect = Some(Rect::new(5, 20, 12, 1));
        handle_mouse_event(click(6, 20), &mut app, &tx);
        assert_eq!(app.limit, 12);
    }
}
