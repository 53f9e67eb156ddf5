//! HTTP client for the recipes API.

use std::future::Future;
use std::time::Duration;

use crate::state::{Recipe, RecipePage};

use super::Result;
use super::endpoints::{recipes_url, tags_url};

/// What: Read-only access to the remote recipe collection.
///
/// Details:
/// - Implemented by [`RecipeClient`] for the live API; tests substitute
///   in-memory sources to drive the workers deterministically.
/// - Every failure (transport, status, body) is a plain boxed error; callers
///   do not distinguish them.
pub trait RecipeSource: Send + Sync + 'static {
    /// Fetch the full tag list in server order.
    fn fetch_tags(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Fetch recipes, filtered server-side when `tag` is set.
    fn fetch_recipes(&self, tag: Option<&str>) -> impl Future<Output = Result<Vec<Recipe>>> + Send;
}

/// What: Parse a tag list body.
///
/// Inputs:
/// - `body`: JSON array of strings.
///
/// Output:
/// - Tags in body order, or an error for any other shape.
///
/// # Errors
/// - Returns `Err` when the body is not a JSON array of strings.
pub fn parse_tags(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str::<Vec<String>>(body)?)
}

/// What: Parse a recipe list body.
///
/// Inputs:
/// - `body`: JSON object with a `recipes` array.
///
/// Output:
/// - Recipes in body order.
///
/// # Errors
/// - Returns `Err` when the body is not JSON or `recipes` holds malformed entries.
pub fn parse_recipes(body: &str) -> Result<Vec<Recipe>> {
    let page: RecipePage = serde_json::from_str(body)?;
    Ok(page.recipes)
}

/// Live client for the recipes API with connection pooling.
#[derive(Clone, Debug)]
pub struct RecipeClient {
    /// Shared reqwest client.
    http: reqwest::Client,
    /// API base without trailing slash.
    base_url: String,
}

impl RecipeClient {
    /// What: Build a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: API base such as `https://dummyjson.com`.
    /// - `timeout`: Whole-request timeout.
    ///
    /// Output:
    /// - Configured client.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend or client builder fails to initialize.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("recipe-browser/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API base this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: GET `url` and return the body of a successful response.
    ///
    /// # Errors
    /// - Returns `Err` on transport failure or any non-2xx status.
    async fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP {status} from {url}").into());
        }
        Ok(resp.text().await?)
    }
}

impl RecipeSource for RecipeClient {
    async fn fetch_tags(&self) -> Result<Vec<String>> {
        let url = tags_url(&self.base_url);
        tracing::debug!(url = %url, "fetching tags");
        let body = self.get_text(&url).await?;
        parse_tags(&body)
    }

    async fn fetch_recipes(&self, tag: Option<&str>) -> Result<Vec<Recipe>> {
        let url = recipes_url(&self.base_url, tag);
        tracing::debug!(url = %url, "fetching recipes");
        let body = self.get_text(&url).await?;
        parse_recipes(&body)
    }
}
