//! Modal overlay state for the UI.

use crate::state::types::Recipe;

/// Overlay drawn on top of whichever main view branch is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Full record for one recipe.
    Detail {
        /// Recipe being shown.
        recipe: Box<Recipe>,
        /// Vertical scroll offset inside the overlay body.
        scroll: u16,
    },
    /// Key binding reference.
    Help,
}

impl Modal {
    /// Recipe shown by the detail overlay, if that overlay is open.
    #[must_use]
    pub fn detail_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Detail { recipe, .. } => Some(recipe),
            _ => None,
        }
    }

    /// Whether any overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
