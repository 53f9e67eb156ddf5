//! Small utility helpers for URL encoding, text fitting, and display formatting.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Percent-encode a string for use in URL path segments according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - Non-ASCII input is encoded byte by byte from its UTF-8 form.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// What: Fit text into a fixed number of terminal columns.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Available display columns.
///
/// Output:
/// - `text` unchanged when it fits; otherwise a prefix ending in `…`.
///
/// Details:
/// - Widths come from `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Format a duration in minutes as "45 min" or "1 h 15 min".
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    match (h, m) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Format a calorie count without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_calories(kcal: f64) -> String {
    if kcal.fract().abs() < f64::EPSILON {
        format!("{kcal:.0} kcal")
    } else {
        format!("{kcal:.1} kcal")
    }
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - `YYYY-MM-DD-T HH:MM:SS` string.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encode_tags() {
        assert_eq!(percent_encode("Breakfast"), "Breakfast");
        assert_eq!(percent_encode("Middle Eastern"), "Middle%20Eastern");
        assert_eq!(percent_encode("Stir-fry"), "Stir-fry");
        assert_eq!(percent_encode("a/b&c"), "a%2Fb%26c");
        assert_eq!(percent_encode("Crème"), "Cr%C3%A8me");
    }

    #[test]
    /// What: Truncation respects display width and appends an ellipsis
    ///
    /// Inputs:
    /// - ASCII and wide-glyph strings against narrow widths
    ///
    /// Output:
    /// - Result never exceeds the requested width
    fn truncate_to_width_fits() {
        assert_eq!(truncate_to_width("Pasta", 10), "Pasta");
        assert_eq!(truncate_to_width("Chicken Alfredo", 8), "Chicken…");
        assert_eq!(truncate_to_width("Chicken", 0), "");
        let wide = truncate_to_width("寿司寿司寿司", 5);
        assert!(wide.width() <= 5);
        assert!(wide.ends_with('…'));
    }

    #[test]
    fn minutes_and_calories() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(60), "1 h");
        assert_eq!(format_minutes(75), "1 h 15 min");
        assert_eq!(format_calories(300.0), "300 kcal");
        assert_eq!(format_calories(245.5), "245.5 kcal");
    }

    #[test]
    fn log_timestamp_shape() {
        let ts = log_timestamp();
        assert_eq!(ts.len(), "2025-01-01-T 00:00:00".len());
        assert!(ts.contains("-T "));
    }
}
