//! Edit Dialog Component
//!
//! Modal for the active edit session: name field, read-only ingredient
//! lines, instructions textarea, and the servings slider (1-10).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Edit dialog, visible while an edit session is active
#[component]
pub fn EditDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let draft_name =
        move || ctx.session.with(|s| s.draft().map(|d| d.name.clone()).unwrap_or_default());
    let draft_instructions = move || {
        ctx.session
            .with(|s| s.draft().map(|d| d.instructions.clone()).unwrap_or_default())
    };
    let ingredient_lines = move || {
        ctx.session.with(|s| {
            s.draft()
                .map(|d| d.ingredients.iter().map(|i| i.display_line()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let multiplier = move || ctx.session.with(|s| s.multiplier());

    view! {
        <Show when=move || ctx.session.with(|s| s.is_editing())>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>"Edit Recipe"</h2>

                    <label>"Recipe Name"</label>
                    <input
                        type="text"
                        prop:value=draft_name
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            ctx.set_draft_name(input.value());
                        }
                    />

                    <p>"Ingredients:"</p>
                    <ul class="ingredient-list">
                        {move || ingredient_lines()
                            .into_iter()
                            .map(|line| view! { <li class="ingredient-line">{line}</li> })
                            .collect_view()}
                    </ul>

                    <label>"Instructions"</label>
                    <textarea
                        prop:value=draft_instructions
                        rows="4"
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            ctx.set_draft_instructions(area.value());
                        }
                    ></textarea>

                    <label>"Adjust Servings: " {multiplier}</label>
                    <input
                        type="range"
                        min="1"
                        max="10"
                        step="1"
                        prop:value=move || multiplier().to_string()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let slider = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let servings = slider.value().parse().unwrap_or(1);
                            ctx.scale_draft(servings);
                        }
                    />

                    <div class="dialog-actions">
                        <button class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                            "Cancel"
                        </button>
                        <button class="save-btn" on:click=move |_| ctx.save_edit()>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
