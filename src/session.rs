//! Edit Session State Machine
//!
//! One recipe draft at a time: either no dialog is open, or a single draft
//! is being edited. The snapshot taken at session entry is the fixed base
//! for all scaling, so dragging the servings slider never compounds error.

use crate::models::Recipe;
use crate::scaler::scale_ingredients;

/// State of the (single) edit dialog
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession {
    Idle,
    Editing {
        /// Recipe as it was when the dialog opened; scaling base
        snapshot: Recipe,
        /// Working copy, committed on save and discarded on cancel
        draft: Recipe,
        /// Current slider position (1-10)
        multiplier: u32,
    },
}

impl EditSession {
    /// Open an edit session for this recipe. The slider starts at 1.
    pub fn begin(recipe: Recipe) -> Self {
        Self::Editing {
            draft: recipe.clone(),
            snapshot: recipe,
            multiplier: 1,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Recipe> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    pub fn multiplier(&self) -> u32 {
        match self {
            Self::Editing { multiplier, .. } => *multiplier,
            Self::Idle => 1,
        }
    }

    /// Rescale the draft ingredients to `target` servings.
    ///
    /// Amounts are recomputed from the session-entry snapshot, never from
    /// the previous draft, so any sequence of slider moves that ends on the
    /// original servings count restores the original amounts. Name and
    /// instruction edits in the draft are left alone.
    pub fn scale_to(&mut self, target: u32) {
        if let Self::Editing {
            snapshot,
            draft,
            multiplier,
        } = self
        {
            let target = target.max(1);
            draft.ingredients = scale_ingredients(&snapshot.ingredients, snapshot.servings, target);
            draft.servings = target;
            *multiplier = target;
        }
    }

    pub fn set_name(&mut self, name: String) {
        if let Self::Editing { draft, .. } = self {
            draft.name = name;
        }
    }

    pub fn set_instructions(&mut self, text: String) {
        if let Self::Editing { draft, .. } = self {
            draft.instructions = text;
        }
    }

    /// Take the draft for committing; the session returns to Idle.
    pub fn take_draft(&mut self) -> Option<Recipe> {
        match std::mem::replace(self, Self::Idle) {
            Self::Editing { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
