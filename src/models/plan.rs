use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::food::{FoodCategory, Nutrients};

/// The four meal types planned per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One food assignment within a meal slot. Created once, immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItem {
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    /// Marginal cost: zero when the item is drawn from inventory.
    pub estimated_cost: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub uses_inventory: bool,
    #[serde(default)]
    pub inventory_item_id: Option<Uuid>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One (day, meal-type) cell in the planning grid.
///
/// Slots may carry zero items when nothing affordable was found; the grid
/// itself is always complete (duration x 4 slots).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    pub day: u32,
    pub meal_type: MealType,
    pub items: Vec<MealItem>,
}

impl MealSlot {
    pub fn uses_inventory(&self) -> bool {
        self.items.iter().any(|i| i.uses_inventory)
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.estimated_cost).sum()
    }
}

/// Nutrient totals for one day of the plan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl DayTotals {
    pub fn add(&mut self, n: &Nutrients) {
        self.calories += n.calories;
        self.protein += n.protein;
        self.carbs += n.carbs;
        self.fats += n.fats;
        self.fiber += n.fiber;
    }
}

/// The nutrients tracked against daily requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
    Fiber,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fats,
        Nutrient::Fiber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fats => "fats",
            Nutrient::Fiber => "fiber",
        }
    }
}

/// Validation of one nutrient against its daily requirement band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientReport {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
    pub meets_min: bool,
    pub within_range: bool,
    /// Actual as a percentage of the optimal value.
    pub percentage: f64,
}

/// Nutrition report for a whole plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    /// Totals per day, indexed by day.
    pub daily_totals: Vec<DayTotals>,
    /// Per-day averages over the plan duration.
    pub weekly_averages: DayTotals,
    /// Averages validated against the daily requirement bands.
    pub weekly_validation: Vec<NutrientReport>,
    /// 0-100, from the validation results.
    pub overall_score: u32,
}

/// Summary of how the plan drew on existing inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryUsage {
    /// Number of slots in the grid (duration x 4).
    pub total_meals: u32,
    /// Slots with at least one inventory-sourced item.
    pub meals_from_inventory: u32,
    pub usage_percent: f64,
    /// Market value of everything drawn from inventory.
    pub estimated_cost_saved: f64,
    pub waste_reduction: String,
}

/// One aggregated purchase requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingLine {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub category: FoodCategory,
    pub estimated_cost: f64,
}

/// A cheaper same-category candidate for an expensive purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeOption {
    pub name: String,
    pub cost_per_100: f64,
    pub estimated_savings: f64,
}

/// Substitution suggestion for one expensive shopping line. Advisory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub original_item: String,
    pub original_cost: f64,
    pub options: Vec<AlternativeOption>,
}

/// Complete output of one optimizer run. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub target_budget: f64,
    pub duration_days: u32,
    pub use_inventory: bool,
    pub total_cost: f64,
    pub budget_remaining: f64,
    pub budget_utilization: f64,
    /// The full duration x 4 grid, empty slots included.
    pub slots: Vec<MealSlot>,
    pub nutrition_analysis: NutritionAnalysis,
    pub inventory_usage: InventoryUsage,
    pub shopping_list: Vec<ShoppingLine>,
    pub alternatives: Vec<Alternative>,
    pub generated_at: DateTime<Utc>,
}

impl OptimizationResult {
    /// All assigned items across the grid.
    pub fn meal_items(&self) -> impl Iterator<Item = (&MealSlot, &MealItem)> {
        self.slots
            .iter()
            .flat_map(|slot| slot.items.iter().map(move |item| (slot, item)))
    }

    pub fn items_count(&self) -> usize {
        self.slots.iter().map(|s| s.items.len()).sum()
    }
}

/// One persisted item with its grid address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanItem {
    pub day: u32,
    pub meal_type: MealType,
    #[serde(flatten)]
    pub item: MealItem,
}

/// The persisted form of an optimization result.
///
/// Plans are created once and never updated in place; regenerating always
/// produces a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_budget: f64,
    pub total_cost: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<PlanItem>,
}

impl MealPlan {
    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cost: f64, uses_inventory: bool) -> MealItem {
        MealItem {
            food_name: name.to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
            estimated_cost: cost,
            calories: 150.0,
            protein: 5.0,
            carbs: 20.0,
            fats: 3.0,
            uses_inventory,
            inventory_item_id: None,
            notes: None,
        }
    }

    #[test]
    fn test_slot_inventory_flag_and_cost() {
        let slot = MealSlot {
            day: 0,
            meal_type: MealType::Lunch,
            items: vec![item("Pasta", 6.4, false), item("Milk", 0.0, true)],
        };

        assert!(slot.uses_inventory());
        assert!((slot.total_cost() - 6.4).abs() < 1e-9);

        let empty = MealSlot {
            day: 1,
            meal_type: MealType::Snack,
            items: vec![],
        };
        assert!(!empty.uses_inventory());
        assert_eq!(empty.total_cost(), 0.0);
    }

    #[test]
    fn test_day_totals_accumulate() {
        let mut totals = DayTotals::default();
        totals.add(&Nutrients {
            calories: 300.0,
            protein: 10.0,
            carbs: 40.0,
            fats: 5.0,
            fiber: 3.0,
            cost: 12.0,
        });
        totals.add(&Nutrients {
            calories: 200.0,
            protein: 20.0,
            carbs: 10.0,
            fats: 8.0,
            fiber: 1.0,
            cost: 30.0,
        });

        assert!((totals.calories - 500.0).abs() < 1e-9);
        assert!((totals.protein - 30.0).abs() < 1e-9);
        assert!((totals.fiber - 4.0).abs() < 1e-9);
    }
}
