//! UI Components

mod add_recipe_form;
mod edit_dialog;
mod recipe_list;

pub use add_recipe_form::AddRecipeForm;
pub use edit_dialog::EditDialog;
pub use recipe_list::RecipeList;
