//! Wire representation of optimizer output.
//!
//! The internal model keeps the grid of slots; consumers expect a flat
//! `meal_items` list with day/meal addressing. Field naming drifted across
//! client revisions, so the mapping to the wire shape is explicit here
//! rather than derived from the canonical structs.

use serde::{Deserialize, Serialize};

use crate::models::plan::{
    Alternative, InventoryUsage, MealType, NutritionAnalysis, OptimizationResult, ShoppingLine,
};

/// One flattened meal item as consumers see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMealItem {
    pub day_of_week: u32,
    pub meal_type: MealType,
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_cost: f64,
    pub uses_inventory: bool,
    pub calories: f64,
}

/// The response body for an optimize call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub total_cost: f64,
    pub budget_remaining: f64,
    pub budget_utilization: f64,
    pub nutrition_analysis: NutritionAnalysis,
    pub inventory_usage: InventoryUsage,
    pub meal_items: Vec<WireMealItem>,
    pub shopping_list: Vec<ShoppingLine>,
    pub alternatives: Vec<Alternative>,
}

impl From<&OptimizationResult> for OptimizeResponse {
    fn from(result: &OptimizationResult) -> Self {
        let meal_items = result
            .meal_items()
            .map(|(slot, item)| WireMealItem {
                day_of_week: slot.day,
                meal_type: slot.meal_type,
                food_name: item.food_name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                estimated_cost: item.estimated_cost,
                uses_inventory: item.uses_inventory,
                calories: item.calories,
            })
            .collect();

        OptimizeResponse {
            total_cost: result.total_cost,
            budget_remaining: result.budget_remaining,
            budget_utilization: result.budget_utilization,
            nutrition_analysis: result.nutrition_analysis.clone(),
            inventory_usage: result.inventory_usage.clone(),
            meal_items,
            shopping_list: result.shopping_list.clone(),
            alternatives: result.alternatives.clone(),
        }
    }
}
