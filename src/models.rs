//! Recipe Data Model
//!
//! Entities persisted to the browser storage slot.

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Amount sized for the recipe's current servings count
    pub amount: f64,
    /// Measurement unit, may be empty for countable ingredients ("3 Eggs")
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: &str, amount: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    /// Read-only display line for the edit dialog, e.g. "400.00 g Spaghetti"
    pub fn display_line(&self) -> String {
        format!("{:.2} {} {}", self.amount, self.unit, self.name)
    }
}

/// A named dish with ingredients, instructions, and a servings count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier within the collection
    pub id: u64,
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Free-text preparation steps
    pub instructions: String,
    /// Number of portions the ingredient amounts are sized for, always >= 1
    pub servings: u32,
}

impl Recipe {
    /// Create a new recipe as the add form does: no ingredients, no
    /// instructions, one serving.
    pub fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            ingredients: Vec::new(),
            instructions: String::new(),
            servings: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe_defaults() {
        let recipe = Recipe::new(7, "Pancakes".to_string());
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.name, "Pancakes");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.servings, 1);
    }

    #[test]
    fn test_display_line_rounds_to_two_decimals() {
        let ingredient = Ingredient::new("Spaghetti", 400.0, "g");
        assert_eq!(ingredient.display_line(), "400.00 g Spaghetti");

        let fractional = Ingredient::new("Soy sauce", 1.5, "tbsp");
        assert_eq!(fractional.display_line(), "1.50 tbsp Soy sauce");
    }
}
