//! Recipe card grid, pagination bar and empty state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::is_refreshing;
use crate::state::{AppState, Focus, Recipe};
use crate::theme::{KeyMap, Theme};
use crate::util::{format_minutes, truncate_to_width};

use super::helpers::{border_style, centered_line, difficulty_style, key_style, to_u16};

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Text of the empty-state message.
pub const EMPTY_MESSAGE: &str = "No recipes found.";

/// What: Number of card columns for a grid of the given inner width.
///
/// Output:
/// - 3 columns from 105 cells, 2 from 64, otherwise 1.
#[must_use]
pub const fn columns_for_width(width: u16) -> usize {
    if width >= 105 {
        3
    } else if width >= 64 {
        2
    } else {
        1
    }
}

/// What: Render the grid pane: cards over the displayed recipes and the
/// pagination bar below them.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; updates `grid_columns`, `grid_scroll` and the
///   hit-test rectangles.
/// - `th`: Active palette.
/// - `area`: Grid pane area.
pub fn render_grid(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let focused = app.focus == Focus::Grid;
    let shown = app.displayed_recipes().len();
    let title = format!(" Showing {shown} of {} ", app.recipes.len());
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        ))
        .border_style(border_style(focused, th));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [cards_area, bar_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    if app.recipes.is_empty() {
        render_empty(f, app, th, cards_area);
    } else {
        render_cards(f, app, th, cards_area, focused);
    }
    render_pagination_bar(f, app, th, bar_area);
}

fn render_cards(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect, focused: bool) {
    let cols = columns_for_width(area.width);
    app.grid_columns = cols;
    let shown = app.displayed_recipes().len();
    let total_rows = shown.div_ceil(cols);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    let cursor_row = app.card_cursor / cols;
    if cursor_row < app.grid_scroll {
        app.grid_scroll = cursor_row;
    } else if cursor_row >= app.grid_scroll + visible_rows {
        app.grid_scroll = cursor_row + 1 - visible_rows;
    }
    app.grid_scroll = app.grid_scroll.min(total_rows.saturating_sub(visible_rows));

    let card_w = area.width / to_u16(cols);
    let mut rects = Vec::new();
    let last_row = total_rows.min(app.grid_scroll + visible_rows);
    for row in app.grid_scroll..last_row {
        let y = area.y + to_u16(row - app.grid_scroll) * CARD_HEIGHT;
        let h = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        for col in 0..cols {
            let idx = row * cols + col;
            let Some(recipe) = app.displayed_recipes().get(idx) else {
                break;
            };
            let x = area.x + to_u16(col) * card_w;
            let w = if col + 1 == cols {
                area.right() - x
            } else {
                card_w
            };
            let rect = Rect::new(x, y, w, h);
            render_card(f, recipe, th, rect, focused && idx == app.card_cursor);
            rects.push((rect, idx));
        }
    }
    app.card_rects = rects;
}

/// What: Render one recipe card.
///
/// Details:
/// - Shows name, cuisine with difficulty, total time with servings, and tags,
///   each truncated to the card width.
fn render_card(f: &mut Frame, recipe: &Recipe, th: &Theme, rect: Rect, selected: bool) {
    let block = Block::bordered()
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style(selected, th))
        .style(Style::default().bg(if selected { th.surface1 } else { th.base }));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let w = usize::from(inner.width);
    let difficulty = recipe.difficulty_label();
    let cuisine = recipe.cuisine.as_deref().unwrap_or("Unknown cuisine");
    let cuisine_w = w.saturating_sub(difficulty.width() + 3);
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&recipe.name, w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                truncate_to_width(cuisine, cuisine_w),
                Style::default().fg(th.subtext0),
            ),
            Span::styled(" · ", Style::default().fg(th.overlay2)),
            Span::styled(difficulty.to_string(), difficulty_style(difficulty, th)),
        ]),
        Line::from(Span::styled(
            truncate_to_width(
                &format!(
                    "⏱ {}  · {} servings",
                    format_minutes(recipe.total_minutes()),
                    recipe.servings
                ),
                w,
            ),
            Style::default().fg(th.subtext1),
        )),
        Line::from(Span::styled(
            truncate_to_width(&recipe.tags.join(", "), w),
            Style::default().fg(th.lavender),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// What: Render the empty-state message.
///
/// Details:
/// - A clear-filter button is offered only while a tag filter is active.
fn render_empty(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    app.grid_scroll = 0;
    let top = area.y + area.height.saturating_sub(3) / 2;
    let msg = Rect::new(area.x, top, area.width, 1.min(area.height));
    f.render_widget(
        Paragraph::new(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        msg,
    );
    if app.selected_tag.is_some() && area.height >= 3 {
        let label = format!(
            "[ Clear filter ({}) ]",
            KeyMap::first_label(&app.keymap.clear_filter)
        );
        let rect = centered_line(area, top + 2, to_u16(label.width()));
        f.render_widget(Paragraph::new(Span::styled(label, key_style(th))), rect);
        app.clear_filter_rects.push(rect);
    }
}

/// Indicator drawn while a request is in flight over loaded recipes.
const REFRESHING_LABEL: &str = "⟳ Refreshing…";

/// What: Render the bar under the grid: refresh indicator and "see more".
///
/// Details:
/// - "See more" is shown only while more recipes exist than are displayed.
/// - The refresh indicator is shown while a request is in flight over
///   already-loaded recipes. It takes the left end of the bar and the button
///   is centered in what remains, so neither overwrites the other.
fn render_pagination_bar(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let mut button_area = area;
    if is_refreshing(app) {
        let [indicator, rest] = Layout::horizontal([
            Constraint::Length(to_u16(REFRESHING_LABEL.width() + 1)),
            Constraint::Min(0),
        ])
        .areas(area);
        f.render_widget(
            Paragraph::new(Span::styled(REFRESHING_LABEL, Style::default().fg(th.yellow))),
            indicator,
        );
        button_area = rest;
    }
    if app.has_more() && button_area.width > 0 {
        let label = format!(
            "[ See more ({}) ]",
            KeyMap::first_label(&app.keymap.see_more)
        );
        let rect = centered_line(button_area, button_area.y, to_u16(label.width()));
        f.render_widget(Paragraph::new(Span::styled(label, key_style(th))), rect);
        app.see_more_rect = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draw only the pagination bar on a one-row terminal of `width` cells.
    fn bar_text(app: &mut AppState, width: u16) -> String {
        let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(width, 1))
            .expect("test terminal");
        terminal
            .draw(|f| render_pagination_bar(f, app, &Theme::dark(), f.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    /// What: Refresh indicator and "see more" share the bar without overlap
    ///
    /// Inputs:
    /// - 20 recipes with 8 shown, a request in flight, a 34-cell bar
    ///
    /// Output:
    /// - Indicator intact at the left; button starts after it
    fn refreshing_and_see_more_do_not_overlap() {
        let mut app = crate::test_utils::browse_app(20);
        app.loading = true;
        let text = bar_text(&mut app, 34);
        assert!(text.starts_with(REFRESHING_LABEL));
        let button = app.see_more_rect.expect("see more shown");
        assert!(usize::from(button.x) > REFRESHING_LABEL.width());
        assert!(text.contains("[ See more"));
    }

    #[test]
    fn see_more_centered_when_idle() {
        let mut app = crate::test_utils::browse_app(20);
        let text = bar_text(&mut app, 40);
        assert!(!text.contains("Refreshing"));
        let button = app.see_more_rect.expect("see more shown");
        assert_eq!(button.x, (40 - button.width) / 2);
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(columns_for_width(40), 1);
        assert_eq!(columns_for_width(64), 2);
        assert_eq!(columns_for_width(104), 2);
        assert_eq!(columns_for_width(140), 3);
    }
}
