use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Modal, Recipe};
use crate::theme::Theme;
use crate::util::{format_calories, format_minutes, truncate_to_width};

use super::helpers::{centered_rect, difficulty_style};

/// What: Build the scrollable body of the detail overlay.
///
/// Inputs:
/// - `recipe`: Recipe to describe.
/// - `th`: Active palette.
///
/// Output:
/// - Ingredients as a bulleted list and instructions as a numbered list,
///   both in source order.
pub fn detail_body_lines(recipe: &Recipe, th: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(th.text);
    let mut lines = Vec::with_capacity(recipe.ingredients.len() + recipe.instructions.len() + 4);
    lines.push(Line::from(Span::styled("Ingredients", heading)));
    for ing in &recipe.ingredients {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(th.green)),
            Span::styled(ing.clone(), text),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Instructions", heading)));
    for (i, step) in recipe.instructions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(th.sapphire)),
            Span::styled(step.clone(), text),
        ]));
    }
    lines
}

/// What: Wrap styled lines into rows no wider than `width` columns.
///
/// Inputs:
/// - `lines`: Logical lines, possibly longer than `width`.
/// - `width`: Available columns (treated as at least 1).
///
/// Output:
/// - One `Line` per rendered row, so `len()` is the exact scrollable height.
///
/// Details:
/// - Breaks at spaces; a word wider than the row is split at character
///   boundaries. Span styles are carried onto every row they cover.
pub fn wrap_lines(lines: &[Line<'static>], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0usize;
        for span in &line.spans {
            for word in span.content.split_inclusive(' ') {
                let mut piece = word;
                while !piece.is_empty() {
                    let fits = used + piece.trim_end_matches(' ').width() <= width;
                    if fits {
                        row.push(Span::styled(piece.to_string(), span.style));
                        used += piece.width();
                        break;
                    }
                    if used > 0 {
                        rows.push(Line::from(std::mem::take(&mut row)));
                        used = 0;
                        piece = piece.trim_start_matches(' ');
                        continue;
                    }
                    let (head, tail) = split_at_width(piece, width);
                    row.push(Span::styled(head.to_string(), span.style));
                    rows.push(Line::from(std::mem::take(&mut row)));
                    piece = tail;
                }
            }
        }
        rows.push(Line::from(row));
    }
    rows
}

/// Split `s` after the longest prefix fitting `width` columns (at least one char).
fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if idx > 0 && used + w > width {
            return s.split_at(idx);
        }
        used += w;
    }
    (s, "")
}

/// Footer line: cuisine, calories per serving, and rating when present.
pub fn detail_footer_line(recipe: &Recipe, th: &Theme) -> Line<'static> {
    let dim = Style::default().fg(th.subtext0);
    let mut spans = vec![
        Span::styled("Cuisine: ", dim),
        Span::styled(
            recipe
                .cuisine
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            Style::default().fg(th.text),
        ),
        Span::styled("  ·  ", dim),
        Span::styled(
            format!("{} per serving", format_calories(recipe.calories_per_serving)),
            Style::default().fg(th.text),
        ),
    ];
    if let Some(rating) = recipe.rating {
        spans.push(Span::styled("  ·  ", dim));
        spans.push(Span::styled(
            format!("★ {rating:.1}"),
            Style::default().fg(th.yellow),
        ));
        if let Some(n) = recipe.review_count {
            spans.push(Span::styled(format!(" ({n} reviews)"), dim));
        }
    }
    Line::from(spans)
}

fn stat_tile(f: &mut Frame, label: &str, value: Span<'static>, th: &Theme, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(th.subtext1),
        ));
    f.render_widget(
        Paragraph::new(Line::from(value)).alignment(Alignment::Center).block(block),
        area,
    );
}

/// What: Render the recipe detail overlay on top of the current view.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; the scroll offset is clamped to the body and
///   the overlay area is recorded for mouse hit-testing.
/// - `th`: Active palette.
/// - `area`: Whole frame area.
///
/// Details:
/// - Shows name, image URL, four stat tiles (prep, cook, servings,
///   difficulty), the body lists, and the footer line.
pub fn render_detail(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let Modal::Detail { recipe, scroll } = &mut app.modal else {
        return;
    };
    let rect = centered_rect(80, 85, area);
    f.render_widget(Clear, rect);

    let block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .title(Span::styled(
            " Recipe ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc close · ↑↓ scroll ").right_aligned())
        .style(Style::default().bg(th.base));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let [name_area, image_area, tiles_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let w = usize::from(inner.width);
    f.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&recipe.name, w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        name_area,
    );
    let image = if recipe.image.is_empty() {
        "(no image)".to_string()
    } else {
        recipe.image.clone()
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&format!("Image: {image}"), w),
            Style::default().fg(th.sapphire).add_modifier(Modifier::UNDERLINED),
        )),
        image_area,
    );

    let tiles: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(tiles_area);
    let plain = Style::default().fg(th.text);
    stat_tile(
        f,
        "Prep",
        Span::styled(format_minutes(recipe.prep_time_minutes), plain),
        th,
        tiles[0],
    );
    stat_tile(
        f,
        "Cook",
        Span::styled(format_minutes(recipe.cook_time_minutes), plain),
        th,
        tiles[1],
    );
    stat_tile(
        f,
        "Servings",
        Span::styled(recipe.servings.to_string(), plain),
        th,
        tiles[2],
    );
    let difficulty = recipe.difficulty_label().to_string();
    let dstyle = difficulty_style(&difficulty, th);
    stat_tile(f, "Difficulty", Span::styled(difficulty, dstyle), th, tiles[3]);

    let rows = wrap_lines(
        &detail_body_lines(recipe, th),
        usize::from(body_area.width),
    );
    let max_scroll = rows
        .len()
        .saturating_sub(usize::from(body_area.height));
    *scroll = (*scroll).min(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    f.render_widget(Paragraph::new(rows).scroll((*scroll, 0)), body_area);
    f.render_widget(Paragraph::new(detail_footer_line(recipe, th)), footer_area);

    app.detail_rect = Some(rect);
}
