//! Servings Scaler
//!
//! Pure recalculation of ingredient amounts for a new serving count.

use crate::models::Ingredient;

/// Rescale `base` amounts, sized for `base_servings` portions, to `target`
/// portions: each amount becomes `amount / base_servings * target`.
///
/// Callers pass the amounts captured at edit-session entry, never a
/// previously scaled output, so repeated calls cannot accumulate
/// floating-point error. No rounding happens here; the display layer rounds
/// to two decimals. A zero target is clamped to 1 so servings stay >= 1.
pub fn scale_ingredients(
    base: &[Ingredient],
    base_servings: u32,
    target: u32,
) -> Vec<Ingredient> {
    let target = target.max(1);
    base.iter()
        .map(|ingredient| Ingredient {
            amount: ingredient.amount / f64::from(base_servings) * f64::from(target),
            ..ingredient.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn spaghetti_base() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Spaghetti", 400.0, "g"),
            Ingredient::new("Eggs", 4.0, ""),
        ]
    }

    #[test]
    fn test_scaling_four_to_eight_doubles_amounts() {
        let scaled = scale_ingredients(&spaghetti_base(), 4, 8);
        assert_eq!(scaled[0].amount, 800.0);
        assert_eq!(scaled[1].amount, 8.0);
    }

    #[test]
    fn test_scaling_four_to_two_halves_amounts() {
        let scaled = scale_ingredients(&spaghetti_base(), 4, 2);
        assert_eq!(scaled[0].amount, 200.0);
        assert_eq!(scaled[1].amount, 2.0);
    }

    #[test]
    fn test_same_target_is_a_noop() {
        let base = spaghetti_base();
        let scaled = scale_ingredients(&base, 4, 4);
        assert_eq!(scaled, base);
    }

    #[test]
    fn test_round_trip_restores_amounts_within_tolerance() {
        let base = vec![
            Ingredient::new("Feta cheese", 150.0, "g"),
            Ingredient::new("Olive oil", 0.3, "dl"),
            Ingredient::new("Oregano", 7.77, "g"),
        ];
        let scaled = scale_ingredients(&base, 3, 7);
        let restored = scale_ingredients(&scaled, 7, 3);
        for (restored, original) in restored.iter().zip(&base) {
            assert!((restored.amount - original.amount).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_zero_target_is_clamped_to_one_serving() {
        let scaled = scale_ingredients(&spaghetti_base(), 4, 0);
        assert_eq!(scaled[0].amount, 100.0);
    }

    #[test]
    fn test_names_units_and_order_are_preserved() {
        let scaled = scale_ingredients(&spaghetti_base(), 4, 5);
        assert_eq!(scaled[0].name, "Spaghetti");
        assert_eq!(scaled[0].unit, "g");
        assert_eq!(scaled[1].name, "Eggs");
        assert_eq!(scaled[1].unit, "");
    }
}
