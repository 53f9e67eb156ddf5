//! Remote data retrieval for tags and recipes.

mod client;
mod endpoints;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use client::{RecipeClient, RecipeSource, parse_recipes, parse_tags};
pub use endpoints::{recipes_url, tags_url};
