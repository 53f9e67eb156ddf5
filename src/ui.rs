//! Frame rendering. `ui` lays out the header, the active view branch, the
//! key hint bar and any overlay, passing the active palette to every pane.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::logic::{ViewState, view_state};
use crate::state::{AppState, Modal};

pub mod detail;
pub mod footer;
pub mod grid;
pub mod header;
pub mod help;
pub mod helpers;
pub mod status;
pub mod tags;

/// Width of the tag bar in cells.
const TAG_BAR_WIDTH: u16 = 26;

/// What: Render one frame for the current state.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; hit-test rectangles are rewritten each frame.
///
/// Details:
/// - Branches are evaluated in precedence order: loading, error, browse.
/// - The error branch keeps the tag bar so another filter can be picked.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    app.clear_hit_rects();
    let th = app.theme.palette();
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(th.base).fg(th.text)),
        area,
    );

    let [header_area, body, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(f, app, &th, header_area);

    match view_state(app) {
        ViewState::Loading => status::render_loading(f, &th, body),
        state => {
            let tag_w = TAG_BAR_WIDTH.min(body.width / 3);
            let [tags_area, main] =
                Layout::horizontal([Constraint::Length(tag_w), Constraint::Min(10)]).areas(body);
            tags::render_tags(f, app, &th, tags_area);
            if state == ViewState::Error {
                status::render_error(f, app, &th, main);
            } else {
                grid::render_grid(f, app, &th, main);
            }
        }
    }

    footer::render_key_hints(f, app, &th, hints_area);

    match app.modal {
        Modal::Detail { .. } => detail::render_detail(f, app, &th, area),
        Modal::Help => help::render_help(f, app, &th, area),
        Modal::None => {}
    }
}
