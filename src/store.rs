//! Recipe Store
//!
//! Owns the recipe collection. Every mutation writes the whole collection
//! through to the injected storage slot as one JSON payload, so a later
//! `open` on the same slot (including after a restart) sees the same data.

use std::sync::Arc;

use crate::models::Recipe;
use crate::seed::seed_recipes;
use crate::storage::StorageSlot;

/// Recipe collection with write-through persistence
#[derive(Clone)]
pub struct RecipeStore {
    slot: Arc<dyn StorageSlot>,
    recipes: Vec<Recipe>,
    /// Next id to hand out, always past every id seen in the collection
    next_id: u64,
}

impl RecipeStore {
    /// Load the persisted collection from the slot.
    ///
    /// An absent or unparseable payload yields an empty collection; the
    /// caller decides whether to seed it.
    pub fn open(slot: Arc<dyn StorageSlot>) -> Self {
        let recipes: Vec<Recipe> = slot
            .read()
            .and_then(|payload| serde_json::from_str(&payload).ok())
            .unwrap_or_default();
        let next_id = Self::next_id_after(&recipes);
        Self {
            slot,
            recipes,
            next_id,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Populate a first-run empty collection with the default recipes and
    /// persist them. Does nothing once any recipe exists.
    pub fn seed(&mut self) {
        if !self.recipes.is_empty() {
            return;
        }
        self.recipes = seed_recipes();
        self.next_id = Self::next_id_after(&self.recipes);
        self.persist();
    }

    /// Append a new empty recipe and return its id.
    ///
    /// Whitespace-only names are silently ignored. Ids come from a monotonic
    /// counter seeded past the largest persisted id, so two adds in the same
    /// instant cannot collide.
    pub fn add(&mut self, name: &str) -> Option<u64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.recipes.push(Recipe::new(id, name.to_string()));
        self.persist();
        Some(id)
    }

    /// Remove the recipe with this id; unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.recipes.retain(|recipe| recipe.id != id);
        self.persist();
    }

    /// Replace the recipe whose id matches, keeping its position in the
    /// collection; unknown ids are a no-op.
    pub fn update(&mut self, updated: Recipe) {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == updated.id) {
            *recipe = updated;
            self.persist();
        }
    }

    fn next_id_after(recipes: &[Recipe]) -> u64 {
        recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    fn persist(&self) {
        if let Ok(payload) = serde_json::to_string(&self.recipes) {
            self.slot.write(&payload);
        }
    }
}
