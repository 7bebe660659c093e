//! Seed Recipes
//!
//! Fixed default dataset used to populate an empty collection on first load.

use crate::models::{Ingredient, Recipe};

/// The five default recipes, ids 1-5
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Spaghetti Carbonara".to_string(),
            ingredients: vec![
                Ingredient::new("Spaghetti", 400.0, "g"),
                Ingredient::new("Eggs", 4.0, ""),
                Ingredient::new("Pancetta", 200.0, "g"),
                Ingredient::new("Parmesan cheese", 100.0, "g"),
            ],
            instructions: "Cook pasta. Mix eggs, cheese, and pancetta. Combine and serve."
                .to_string(),
            servings: 4,
        },
        Recipe {
            id: 2,
            name: "Chicken Stir Fry".to_string(),
            ingredients: vec![
                Ingredient::new("Chicken breast", 500.0, "g"),
                Ingredient::new("Mixed vegetables", 400.0, "g"),
                Ingredient::new("Soy sauce", 3.0, "tbsp"),
            ],
            instructions: "Cook chicken. Add vegetables. Stir fry with soy sauce.".to_string(),
            servings: 3,
        },
        Recipe {
            id: 3,
            name: "Greek Salad".to_string(),
            ingredients: vec![
                Ingredient::new("Cucumber", 1.0, ""),
                Ingredient::new("Tomatoes", 3.0, ""),
                Ingredient::new("Feta cheese", 150.0, "g"),
                Ingredient::new("Olives", 50.0, "g"),
            ],
            instructions: "Chop vegetables. Mix with cheese and olives. Add dressing.".to_string(),
            servings: 2,
        },
        Recipe {
            id: 4,
            name: "Banana Smoothie".to_string(),
            ingredients: vec![
                Ingredient::new("Bananas", 2.0, ""),
                Ingredient::new("Milk", 250.0, "ml"),
                Ingredient::new("Honey", 1.0, "tbsp"),
            ],
            instructions: "Blend all ingredients until smooth.".to_string(),
            servings: 1,
        },
        Recipe {
            id: 5,
            name: "Vegetable Soup".to_string(),
            ingredients: vec![
                Ingredient::new("Mixed vegetables", 500.0, "g"),
                Ingredient::new("Vegetable stock", 1.0, "L"),
                Ingredient::new("Onion", 1.0, ""),
            ],
            instructions: "Sauté onion. Add vegetables and stock. Simmer until cooked."
                .to_string(),
            servings: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_five_seed_recipes_with_ids_one_to_five() {
        let recipes = seed_recipes();
        assert_eq!(recipes.len(), 5);
        let ids: Vec<u64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_recipes_satisfy_invariants() {
        for recipe in seed_recipes() {
            assert!(!recipe.name.trim().is_empty());
            assert!(recipe.servings >= 1);
            for ingredient in &recipe.ingredients {
                assert!(ingredient.amount > 0.0, "{} has no amount", ingredient.name);
            }
        }
    }

    #[test]
    fn test_carbonara_is_sized_for_four_servings() {
        let recipes = seed_recipes();
        let carbonara = &recipes[0];
        assert_eq!(carbonara.name, "Spaghetti Carbonara");
        assert_eq!(carbonara.servings, 4);
        assert_eq!(carbonara.ingredients[0].amount, 400.0);
        assert_eq!(carbonara.ingredients[0].unit, "g");
    }
}
