//! Recipe Book App
//!
//! Main application component: loads the persisted collection, seeds it on
//! first run, and wires the form, list, and edit dialog together.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{AddRecipeForm, EditDialog, RecipeList};
use crate::context::AppContext;
use crate::session::EditSession;
use crate::storage::{LocalStorageSlot, StorageSlot, STORAGE_KEY};
use crate::store::RecipeStore;

#[component]
pub fn App() -> impl IntoView {
    let slot: Arc<dyn StorageSlot> = Arc::new(LocalStorageSlot::new(STORAGE_KEY));
    let mut store = RecipeStore::open(slot);
    if store.is_empty() {
        web_sys::console::log_1(&"[APP] Empty collection, seeding default recipes".into());
        store.seed();
    }
    web_sys::console::log_1(&format!("[APP] Loaded {} recipes", store.recipes().len()).into());

    let store = RwSignal::new(store);
    let session = RwSignal::new(EditSession::Idle);

    // Provide context to all children
    provide_context(AppContext::new(store, session));

    view! {
        <div class="app-container">
            <h1>"Funky Recipe Book"</h1>

            <AddRecipeForm />

            <RecipeList />

            <p class="recipe-count">
                {move || format!("{} recipes", store.with(|s| s.recipes().len()))}
            </p>

            <EditDialog />
        </div>
    }
}
