//! Application state: the view model and the values flowing through it.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    DEFAULT_DIFFICULTY, FetchFailed, FetchTarget, Focus, Recipe, RecipePage, RecipesRequest,
    RecipesResult,
};
