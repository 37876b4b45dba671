use crate::models::{DayTotals, MealType, Nutrient, NutrientReport, NutritionAnalysis};
use crate::planner::constants::{daily_requirement, meal_share};

/// Calorie target for one meal of a given type.
pub fn meal_calorie_target(meal_type: MealType) -> f64 {
    daily_requirement(Nutrient::Calories).optimal * meal_share(meal_type)
}

fn nutrient_value(totals: &DayTotals, nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Calories => totals.calories,
        Nutrient::Protein => totals.protein,
        Nutrient::Carbs => totals.carbs,
        Nutrient::Fats => totals.fats,
        Nutrient::Fiber => totals.fiber,
    }
}

/// Validate daily totals against the requirement bands.
pub fn validate_daily(totals: &DayTotals) -> Vec<NutrientReport> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let range = daily_requirement(nutrient);
            let actual = nutrient_value(totals, nutrient);
            NutrientReport {
                nutrient,
                actual,
                min: range.min,
                max: range.max,
                optimal: range.optimal,
                meets_min: actual >= range.min,
                within_range: actual >= range.min && actual <= range.max,
                percentage: if range.optimal > 0.0 {
                    actual / range.optimal * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Overall score in [0, 100].
///
/// Each nutrient contributes half its share for meeting the minimum and
/// half for staying within the band.
pub fn overall_score(validation: &[NutrientReport]) -> u32 {
    if validation.is_empty() {
        return 0;
    }

    let per_nutrient = 50.0 / validation.len() as f64;
    let score: f64 = validation
        .iter()
        .map(|report| {
            let mut s = 0.0;
            if report.meets_min {
                s += per_nutrient;
            }
            if report.within_range {
                s += per_nutrient;
            }
            s
        })
        .sum();

    score.round() as u32
}

/// Build the nutrition report for a finished assignment.
///
/// The score is a deterministic function of the final grid; it is
/// reported, not optimized directly.
pub fn analyze(daily_totals: &[DayTotals]) -> NutritionAnalysis {
    let days = daily_totals.len().max(1) as f64;

    let mut averages = DayTotals::default();
    for totals in daily_totals {
        averages.calories += totals.calories;
        averages.protein += totals.protein;
        averages.carbs += totals.carbs;
        averages.fats += totals.fats;
        averages.fiber += totals.fiber;
    }
    averages.calories /= days;
    averages.protein /= days;
    averages.carbs /= days;
    averages.fats /= days;
    averages.fiber /= days;

    let validation = validate_daily(&averages);
    let score = overall_score(&validation);

    NutritionAnalysis {
        daily_totals: daily_totals.to_vec(),
        weekly_averages: averages,
        weekly_validation: validation,
        overall_score: score,
    }
}
