//! Add Recipe Form Component
//!
//! Text input plus submit button for creating new recipes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for creating a new, empty recipe. Enter submits; a blank name is
/// silently ignored and the field keeps its content.
#[component]
pub fn AddRecipeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_name, set_new_name) = signal(String::new());

    let add_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if ctx.add_recipe(&name) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="add-recipe-form" on:submit=add_recipe>
            <input
                type="text"
                placeholder="New Recipe"
                prop:value=move || new_name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_name.set(input.value());
                }
            />
            <button type="submit">"Add Recipe"</button>
        </form>
    }
}
