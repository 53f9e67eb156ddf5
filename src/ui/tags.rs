use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::{KeyMap, Theme};
use crate::util::truncate_to_width;

use super::helpers::{border_style, key_style, to_u16};

/// Label of the first tag bar row, which clears the filter.
pub const ALL_RECIPES_ROW: &str = "All recipes";

/// What: Render the tag bar.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (tags, selection, cursor, failures).
/// - `th`: Active palette.
/// - `area`: Tag bar area.
///
/// Output:
/// - Records `tag_list_rect` and, with an active filter, a clear-filter button.
///
/// Details:
/// - The active tag is marked with `●`; the cursor row is highlighted while
///   the bar has focus.
/// - A failed tag fetch shows an inline notice under the list.
pub fn render_tags(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let focused = app.focus == Focus::Tags;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Tags ",
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        ))
        .border_style(border_style(focused, th));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let clear_h = u16::from(app.selected_tag.is_some());
    let notice_h = if app.tags_error.is_some() { 2 } else { 0 };
    let [clear_area, list_area, notice_area] = Layout::vertical([
        Constraint::Length(clear_h),
        Constraint::Min(1),
        Constraint::Length(notice_h),
    ])
    .areas(inner);

    if app.selected_tag.is_some() {
        let label = format!(
            "✕ Clear filter [{}]",
            KeyMap::first_label(&app.keymap.clear_filter)
        );
        let w = to_u16(unicode_width::UnicodeWidthStr::width(label.as_str())).min(clear_area.width);
        let rect = Rect::new(clear_area.x, clear_area.y, w, 1);
        f.render_widget(Paragraph::new(Span::styled(label, key_style(th))), rect);
        app.clear_filter_rects.push(rect);
    }

    let max_w = usize::from(list_area.width.saturating_sub(2));
    let selected = app.selected_tag.as_deref();
    let mut items = Vec::with_capacity(app.tag_rows());
    items.push(tag_item(ALL_RECIPES_ROW, selected.is_none(), max_w, th));
    for t in &app.tags {
        items.push(tag_item(t, selected == Some(t.as_str()), max_w, th));
    }
    if app.tags_loading && app.tags.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "  Loading tags…",
            Style::default().fg(th.subtext0),
        ))));
    }

    let highlight = if focused {
        Style::default()
            .fg(th.crust)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(th.surface1)
    };
    let list = List::new(items).highlight_style(highlight);
    app.tag_list_state.select(Some(app.tag_cursor));
    f.render_stateful_widget(list, list_area, &mut app.tag_list_state);
    app.tag_list_rect = Some(list_area);

    if app.tags_error.is_some() {
        let notice = vec![
            Line::from(Span::styled(
                "Tags unavailable",
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("[{}] retry", KeyMap::first_label(&app.keymap.reload)),
                Style::default().fg(th.subtext0),
            )),
        ];
        f.render_widget(Paragraph::new(notice), notice_area);
    }
}

fn tag_item(label: &str, active: bool, max_w: usize, th: &Theme) -> ListItem<'static> {
    let (marker, style) = if active {
        (
            "● ",
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(th.text))
    };
    ListItem::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(truncate_to_width(label, max_w), style),
    ]))
}
