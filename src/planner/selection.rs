use std::collections::HashMap;

use crate::catalog::FoodCatalog;
use crate::models::{FoodCategory, FoodProfile, MealType, Restriction};
use crate::planner::constants::*;
use crate::planner::nutrition::meal_calorie_target;

/// Score a catalog candidate for one slot component.
///
/// Balances cost efficiency against the day's remaining budget, calorie
/// fit for the meal type, protein and fiber content, and how often the
/// food has already been assigned in this run.
pub fn score_candidate(
    food: &FoodProfile,
    meal_type: MealType,
    daily_budget_left: f64,
    times_used: u32,
) -> f64 {
    let mut score = BASE_SCORE;

    let serving_cost = food.serving_cost();
    if daily_budget_left <= 0.0 || serving_cost > daily_budget_left {
        score -= OVER_BUDGET_PENALTY;
    } else {
        score -= serving_cost / daily_budget_left * COST_RATIO_WEIGHT;
    }

    let target = meal_calorie_target(meal_type);
    let serving = food.nutrients_for(food.serving_size);
    if target > 0.0 {
        score -= (serving.calories - target).abs() / target * CALORIE_FIT_WEIGHT;
    }

    if serving.protein >= PROTEIN_BONUS_THRESHOLD {
        score += PROTEIN_BONUS;
    }
    if serving.fiber >= FIBER_BONUS_THRESHOLD {
        score += FIBER_BONUS;
    }

    score - times_used as f64 * REPETITION_PENALTY
}

/// Pick a catalog food for one category component of a slot.
///
/// The best-scoring affordable candidate wins. When the best-scoring
/// candidate does not fit the remaining overall budget, the cheapest
/// affordable one is taken instead; when nothing fits, the component is
/// skipped. Ties break deterministically: lower serving cost, then name.
pub fn select_from_catalog<'a>(
    catalog: &'a FoodCatalog,
    category: FoodCategory,
    meal_type: MealType,
    restrictions: &[Restriction],
    daily_budget_left: f64,
    overall_budget_left: f64,
    used_counts: &HashMap<String, u32>,
) -> Option<&'a FoodProfile> {
    let candidates = catalog.compatible_by_category(category, restrictions);
    if candidates.is_empty() {
        return None;
    }

    let mut scored: Vec<(&FoodProfile, f64)> = candidates
        .into_iter()
        .map(|food| {
            let times_used = used_counts.get(&food.key()).copied().unwrap_or(0);
            let score = score_candidate(food, meal_type, daily_budget_left, times_used);
            (food, score)
        })
        .collect();

    scored.sort_by(|(food_a, score_a), (food_b, score_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                food_a
                    .serving_cost()
                    .partial_cmp(&food_b.serving_cost())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| food_a.name.cmp(&food_b.name))
    });

    let best = scored[0].0;
    if best.serving_cost() <= overall_budget_left {
        return Some(best);
    }

    // Best choice does not fit: fall back to the cheapest affordable one.
    scored
        .into_iter()
        .map(|(food, _)| food)
        .filter(|food| food.serving_cost() <= overall_budget_left)
        .min_by(|a, b| {
            a.serving_cost()
                .partial_cmp(&b.serving_cost())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FoodCatalog {
        FoodCatalog::builtin()
    }

    #[test]
    fn test_score_penalizes_repetition() {
        let catalog = catalog();
        let rice = catalog.get("brown_rice").unwrap();

        let fresh = score_candidate(rice, MealType::Lunch, 500.0, 0);
        let repeated = score_candidate(rice, MealType::Lunch, 500.0, 3);

        assert!((fresh - repeated - 3.0 * REPETITION_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_score_penalizes_unaffordable_serving() {
        let catalog = catalog();
        let salmon = catalog.get("salmon").unwrap();

        let roomy = score_candidate(salmon, MealType::Dinner, 1000.0, 0);
        let tight = score_candidate(salmon, MealType::Dinner, 10.0, 0);

        assert!(roomy > tight);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let catalog = catalog();
        let used = HashMap::new();

        let first = select_from_catalog(
            &catalog,
            FoodCategory::Vegetable,
            MealType::Dinner,
            &[],
            500.0,
            3000.0,
            &used,
        )
        .unwrap();
        let second = select_from_catalog(
            &catalog,
            FoodCategory::Vegetable,
            MealType::Dinner,
            &[],
            500.0,
            3000.0,
            &used,
        )
        .unwrap();

        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_selection_rotates_under_repetition_penalty() {
        let catalog = catalog();
        let mut used: HashMap<String, u32> = HashMap::new();

        let first = select_from_catalog(
            &catalog,
            FoodCategory::Protein,
            MealType::Dinner,
            &[],
            500.0,
            10_000.0,
            &used,
        )
        .unwrap();
        used.insert(first.key(), 4);

        let second = select_from_catalog(
            &catalog,
            FoodCategory::Protein,
            MealType::Dinner,
            &[],
            500.0,
            10_000.0,
            &used,
        )
        .unwrap();

        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn test_budget_ceiling_falls_back_to_cheapest() {
        let catalog = catalog();
        let used = HashMap::new();

        // Only a handful of money left overall: selection must fit it.
        let pick = select_from_catalog(
            &catalog,
            FoodCategory::Protein,
            MealType::Dinner,
            &[],
            500.0,
            15.0,
            &used,
        )
        .unwrap();
        assert!(pick.serving_cost() <= 15.0);

        // Nothing affordable at all: the component is skipped.
        let none = select_from_catalog(
            &catalog,
            FoodCategory::Protein,
            MealType::Dinner,
            &[],
            500.0,
            0.5,
            &used,
        );
        assert!(none.is_none());
    }

    #[test]
    fn test_selection_honors_restrictions() {
        let catalog = catalog();
        let used = HashMap::new();

        let pick = select_from_catalog(
            &catalog,
            FoodCategory::Protein,
            MealType::Lunch,
            &[Restriction::Vegan],
            500.0,
            3000.0,
            &used,
        )
        .unwrap();
        assert!(pick.is_allowed(&[Restriction::Vegan]));
    }
}
