//! URL construction for the three read endpoints.

use crate::util::percent_encode;

/// `GET {base}/recipes/tags`
#[must_use]
pub fn tags_url(base_url: &str) -> String {
    format!("{}/recipes/tags", base_url.trim_end_matches('/'))
}

/// What: Build the recipe list URL for an optional tag filter.
///
/// Inputs:
/// - `base_url`: API base, with or without trailing slash.
/// - `tag`: Tag filter; `None` selects the unfiltered endpoint.
///
/// Output:
/// - `{base}/recipes` or `{base}/recipes/tag/{tag}` with the tag percent-encoded.
#[must_use]
pub fn recipes_url(base_url: &str, tag: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match tag {
        Some(t) => format!("{base}/recipes/tag/{}", percent_encode(t)),
        None => format!("{base}/recipes"),
    }
}
