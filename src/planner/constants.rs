use crate::models::{FoodCategory, MealType, Nutrient};

/// Daily requirement band for one nutrient.
#[derive(Debug, Clone, Copy)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

/// Daily requirement bands (general guidelines, grams except calories).
pub fn daily_requirement(nutrient: Nutrient) -> NutrientRange {
    match nutrient {
        Nutrient::Calories => NutrientRange { min: 1800.0, max: 2500.0, optimal: 2000.0 },
        Nutrient::Protein => NutrientRange { min: 50.0, max: 150.0, optimal: 75.0 },
        Nutrient::Carbs => NutrientRange { min: 225.0, max: 325.0, optimal: 275.0 },
        Nutrient::Fats => NutrientRange { min: 44.0, max: 78.0, optimal: 65.0 },
        Nutrient::Fiber => NutrientRange { min: 25.0, max: 35.0, optimal: 30.0 },
    }
}

/// Share of the daily intake assigned to each meal.
pub fn meal_share(meal_type: MealType) -> f64 {
    match meal_type {
        MealType::Breakfast => 0.25,
        MealType::Lunch => 0.35,
        MealType::Dinner => 0.35,
        MealType::Snack => 0.05,
    }
}

/// Category composition per meal type.
pub fn meal_template(meal_type: MealType) -> &'static [FoodCategory] {
    use FoodCategory::*;
    match meal_type {
        MealType::Breakfast => &[Grain, Protein, Fruit, Dairy],
        MealType::Lunch | MealType::Dinner => &[Protein, Grain, Vegetable, Vegetable],
        MealType::Snack => &[Fruit],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Candidate scoring weights
// ─────────────────────────────────────────────────────────────────────────────

/// Starting score for every catalog candidate.
pub const BASE_SCORE: f64 = 100.0;

/// Flat penalty when a serving costs more than the day's remaining budget.
pub const OVER_BUDGET_PENALTY: f64 = 40.0;

/// Weight of the serving-cost-to-daily-budget ratio.
pub const COST_RATIO_WEIGHT: f64 = 20.0;

/// Weight of the calorie gap to the meal's calorie target.
pub const CALORIE_FIT_WEIGHT: f64 = 15.0;

/// Bonus for protein-rich servings.
pub const PROTEIN_BONUS: f64 = 10.0;
pub const PROTEIN_BONUS_THRESHOLD: f64 = 15.0;

/// Bonus for fiber-rich servings.
pub const FIBER_BONUS: f64 = 5.0;
pub const FIBER_BONUS_THRESHOLD: f64 = 3.0;

/// Penalty per prior assignment of the same food in the plan. Keeps the
/// grid from converging on one food per category.
pub const REPETITION_PENALTY: f64 = 12.0;

// ─────────────────────────────────────────────────────────────────────────────
// Substitution search
// ─────────────────────────────────────────────────────────────────────────────

/// An alternative must cost at most this fraction of the original.
pub const ALTERNATIVE_COST_RATIO: f64 = 0.8;

/// How many expensive shopping lines get substitution suggestions.
pub const MAX_EXPENSIVE_LINES: usize = 5;

/// Suggestions per expensive line.
pub const MAX_ALTERNATIVES_PER_LINE: usize = 3;
