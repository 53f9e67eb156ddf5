use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use crate::state::{AppState, Focus};
use crate::theme::{KeyMap, Theme};

use super::helpers::hint;

/// What: Render the one-line key hint bar at the bottom of the screen.
///
/// Details:
/// - Hints follow the focused pane and the configured key map.
pub fn render_key_hints(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let km = &app.keymap;
    let mut spans = Vec::new();
    match app.focus {
        Focus::Grid => {
            spans.extend(hint("←↑→↓".into(), "move", th));
            spans.extend(hint("Enter".into(), "open", th));
        }
        Focus::Tags => {
            spans.extend(hint("↑↓".into(), "move", th));
            spans.extend(hint("Enter".into(), "filter", th));
        }
    }
    spans.extend(hint(KeyMap::first_label(&km.switch_pane), "pane", th));
    if app.has_more() {
        spans.extend(hint(KeyMap::first_label(&km.see_more), "more", th));
    }
    if app.selected_tag.is_some() {
        spans.extend(hint(KeyMap::first_label(&km.clear_filter), "clear", th));
    }
    spans.extend(hint(KeyMap::first_label(&km.toggle_theme), "theme", th));
    spans.extend(hint(KeyMap::first_label(&km.reload), "reload", th));
    spans.extend(hint(KeyMap::first_label(&km.help), "help", th));
    spans.extend(hint(KeyMap::first_label(&km.quit), "quit", th));
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.crust)),
        area,
    );
}
