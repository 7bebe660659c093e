//! Recipe List Component
//!
//! Renders the collection with per-row edit and delete actions.

use leptos::prelude::*;

use crate::context::AppContext;

/// List of recipes showing name and servings for each entry
#[component]
pub fn RecipeList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="recipe-list">
            <For
                each=move || ctx.store.with(|s| s.recipes().to_vec())
                key=|recipe| recipe.id
                children=move |recipe| {
                    let id = recipe.id;
                    view! {
                        <li class="recipe-row">
                            <div class="recipe-summary">
                                <span class="recipe-name">{recipe.name.clone()}</span>
                                <span class="recipe-servings">
                                    {format!("Servings: {}", recipe.servings)}
                                </span>
                            </div>
                            <div class="recipe-actions">
                                <button class="edit-btn" on:click=move |_| ctx.begin_edit(id)>
                                    "Edit"
                                </button>
                                <button class="delete-btn" on:click=move |_| ctx.delete_recipe(id)>
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
