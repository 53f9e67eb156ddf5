//! Core value types used by the recipe browser state.

use serde::Deserialize;

/// Difficulty label shown when a recipe does not carry one.
pub const DEFAULT_DIFFICULTY: &str = "Medium";

/// A single recipe as returned by the remote recipes API.
///
/// The remote shape is trusted as-is: only the consumed attributes are listed
/// here, unknown fields are ignored, and missing numeric or list fields
/// default to zero or empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier assigned by the API.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Tags in source order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cuisine label, if any.
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Difficulty label from an open set ("Easy", "Medium", ...).
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time_minutes: u32,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time_minutes: u32,
    /// Number of servings.
    #[serde(default)]
    pub servings: u32,
    /// Ingredients in source order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps in source order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Calories per serving.
    #[serde(default)]
    pub calories_per_serving: f64,
    /// Average user rating, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews behind `rating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Meal types such as "Dinner" or "Snack".
    #[serde(default)]
    pub meal_type: Vec<String>,
}

impl Recipe {
    /// Difficulty label for display, falling back to [`DEFAULT_DIFFICULTY`].
    #[must_use]
    pub fn difficulty_label(&self) -> &str {
        self.difficulty
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DIFFICULTY)
    }

    /// Total time (prep + cook) in minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

/// Envelope returned by the `/recipes` and `/recipes/tag/{tag}` endpoints.
///
/// Paging metadata (`total`, `skip`, `limit`) is ignored; pagination is local.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipePage {
    /// Recipes in server order.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Which remote collection a failed request was loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTarget {
    /// The tag list.
    Tags,
    /// A recipe list (filtered or not).
    Recipes,
}

impl FetchTarget {
    /// Short lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Recipes => "recipes",
        }
    }
}

/// What: The single failure kind surfaced to the view.
///
/// Details:
/// - Transport errors, non-success statuses and malformed bodies all collapse
///   into this value; `message` only feeds the log, the UI shows a generic text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchFailed {
    /// Collection that failed to load.
    pub target: FetchTarget,
    /// Underlying error text, for logging.
    pub message: String,
}

/// Recipe list request sent to the background recipes worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipesRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Tag filter; `None` requests the unfiltered list.
    pub tag: Option<String>,
}

/// Result corresponding to a prior [`RecipesRequest`].
#[derive(Clone, Debug)]
pub struct RecipesResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed tag filter.
    pub tag: Option<String>,
    /// Recipes on success; error text on failure.
    pub outcome: Result<Vec<Recipe>, String>,
}

/// Which pane receives navigation keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Tag filter bar (left).
    Tags,
    /// Recipe grid (center).
    #[default]
    Grid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Deserialize a recipe in the API's camelCase shape
    ///
    /// Inputs:
    /// - JSON object with the consumed fields plus an unknown one
    ///
    /// Output:
    /// - Fields land in snake_case members; the unknown key is ignored
    fn recipe_deserializes_camel_case_fields() {
        let v = serde_json::json!({
            "id": 7,
            "name": "Shakshuka",
            "image": "https://cdn.example/7.webp",
            "tags": ["Breakfast", "Middle Eastern"],
            "cuisine": "Middle Eastern",
            "difficulty": "Easy",
            "prepTimeMinutes": 10,
            "cookTimeMinutes": 20,
            "servings": 2,
            "ingredients": ["Eggs", "Tomatoes"],
            "instructions": ["Simmer", "Crack eggs"],
            "caloriesPerServing": 240.5,
            "userId": 99
        });
        let r: Recipe = serde_json::from_value(v).expect("valid recipe json");
        assert_eq!(r.id, 7);
        assert_eq!(r.prep_time_minutes, 10);
        assert_eq!(r.cook_time_minutes, 20);
        assert_eq!(r.total_minutes(), 30);
        assert_eq!(r.tags, vec!["Breakfast", "Middle Eastern"]);
        assert!((r.calories_per_serving - 240.5).abs() < f64::EPSILON);
        assert_eq!(r.difficulty_label(), "Easy");
    }

    #[test]
    /// What: Missing optional attributes fall back to defaults
    ///
    /// Inputs:
    /// - JSON object carrying only `id` and `name`
    ///
    /// Output:
    /// - Empty lists, zero numbers, and the "Medium" difficulty fallback
    fn recipe_missing_fields_use_defaults() {
        let r: Recipe = serde_json::from_str(r#"{"id": 1, "name": "Toast"}"#)
            .expect("minimal recipe json");
        assert!(r.ingredients.is_empty());
        assert!(r.instructions.is_empty());
        assert_eq!(r.servings, 0);
        assert_eq!(r.cuisine, None);
        assert_eq!(r.difficulty_label(), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn blank_difficulty_uses_fallback() {
        let r = Recipe {
            difficulty: Some("  ".into()),
            ..Recipe::default()
        };
        assert_eq!(r.difficulty_label(), "Medium");
    }
}
