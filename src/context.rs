//! Application Context
//!
//! Shared state provided via Leptos Context API. All UI mutations route
//! through these methods; components never touch the store directly.

use leptos::prelude::*;

use crate::session::EditSession;
use crate::store::RecipeStore;

/// App-wide state handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Recipe collection with write-through persistence
    pub store: RwSignal<RecipeStore>,
    /// Active edit session, if any
    pub session: RwSignal<EditSession>,
}

impl AppContext {
    pub fn new(store: RwSignal<RecipeStore>, session: RwSignal<EditSession>) -> Self {
        Self { store, session }
    }

    /// Create a recipe; returns false when the trimmed name was empty
    pub fn add_recipe(&self, name: &str) -> bool {
        self.store
            .try_update(|store| store.add(name).is_some())
            .unwrap_or(false)
    }

    pub fn delete_recipe(&self, id: u64) {
        self.store.update(|store| store.remove(id));
    }

    /// Open the edit dialog for this recipe
    pub fn begin_edit(&self, id: u64) {
        let recipe = self
            .store
            .with(|store| store.recipes().iter().find(|r| r.id == id).cloned());
        if let Some(recipe) = recipe {
            self.session.set(EditSession::begin(recipe));
        }
    }

    /// Rescale the draft for a new servings target (slider input)
    pub fn scale_draft(&self, target: u32) {
        self.session.update(|session| session.scale_to(target));
    }

    pub fn set_draft_name(&self, name: String) {
        self.session.update(|session| session.set_name(name));
    }

    pub fn set_draft_instructions(&self, text: String) {
        self.session.update(|session| session.set_instructions(text));
    }

    /// Commit the draft back into the store and close the dialog
    pub fn save_edit(&self) {
        let draft = self
            .session
            .try_update(|session| session.take_draft())
            .flatten();
        if let Some(draft) = draft {
            self.store.update(|store| store.update(draft));
        }
    }

    /// Discard the draft and close the dialog
    pub fn cancel_edit(&self) {
        self.session.update(|session| session.cancel());
    }
}
