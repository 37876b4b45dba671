use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::{debug, info};

use crate::catalog::FoodCatalog;
use crate::error::{PlanError, Result};
use crate::models::{
    Alternative, AlternativeOption, DayTotals, InventoryItem, InventoryUsage, MealItem, MealSlot,
    MealType, OptimizationResult, Restriction, ShoppingLine,
};
use crate::planner::constants::*;
use crate::planner::nutrition;
use crate::planner::selection::select_from_catalog;
use crate::state::WorkingInventory;

/// Input to one optimize call.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub target_budget: f64,
    pub duration_days: u32,
    pub use_inventory: bool,
}

/// The meal plan optimizer.
///
/// One call runs to completion synchronously; the catalog is read-only and
/// the inventory snapshot is only decremented in a private working copy.
pub struct MealOptimizer<'a> {
    catalog: &'a FoodCatalog,
    restrictions: Vec<Restriction>,
}

impl<'a> MealOptimizer<'a> {
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            restrictions: Vec::new(),
        }
    }

    pub fn with_restrictions(mut self, restrictions: Vec<Restriction>) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Generate an optimized plan.
    ///
    /// Fills the duration x 4 grid slot by slot, drawing on inventory
    /// before the catalog and never letting purchases exceed the budget.
    /// An infeasibly small budget yields a sparse plan, not an error.
    pub fn optimize(
        &self,
        request: &PlanRequest,
        snapshot: &[InventoryItem],
    ) -> Result<OptimizationResult> {
        if request.target_budget <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "target budget must be positive, got {}",
                request.target_budget
            )));
        }
        if request.duration_days == 0 {
            return Err(PlanError::InvalidInput(
                "duration must be at least one day".to_string(),
            ));
        }
        if self.catalog.is_empty() {
            return Err(PlanError::CatalogUnavailable(
                "catalog has no foods".to_string(),
            ));
        }

        info!(
            budget = request.target_budget,
            days = request.duration_days,
            use_inventory = request.use_inventory,
            inventory_items = snapshot.len(),
            "starting meal plan optimization"
        );

        let mut working = request
            .use_inventory
            .then(|| WorkingInventory::new(snapshot, self.catalog));

        let daily_budget = request.target_budget / request.duration_days as f64;
        let mut overall_left = request.target_budget;
        let mut total_cost = 0.0;
        let mut cost_saved = 0.0;
        let mut used_counts: HashMap<String, u32> = HashMap::new();
        let mut slots = Vec::with_capacity(request.duration_days as usize * MealType::ALL.len());
        let mut daily_totals = Vec::with_capacity(request.duration_days as usize);

        for day in 0..request.duration_days {
            let mut day_nutrition = DayTotals::default();
            let mut daily_left = daily_budget;

            for meal_type in MealType::ALL {
                let mut items = Vec::new();

                for &category in meal_template(meal_type) {
                    // Inventory first: waste reduction is the point.
                    if let Some(draw) = working.as_mut().and_then(|w| {
                        w.draw_for_category(category, self.catalog, &self.restrictions)
                    }) {
                        let profile = self.catalog.require(&draw.catalog_key)?;
                        let nutrients = profile.nutrients_for(draw.amount);
                        cost_saved += nutrients.cost;
                        day_nutrition.add(&nutrients);
                        *used_counts.entry(profile.key()).or_insert(0) += 1;

                        items.push(MealItem {
                            food_name: profile.name.clone(),
                            quantity: draw.amount,
                            unit: profile.unit.clone(),
                            estimated_cost: 0.0,
                            calories: nutrients.calories,
                            protein: nutrients.protein,
                            carbs: nutrients.carbs,
                            fats: nutrients.fats,
                            uses_inventory: true,
                            inventory_item_id: draw.inventory_id,
                            notes: draw
                                .expiration_date
                                .map(|d| format!("From inventory - use by {}", d)),
                        });
                        continue;
                    }

                    let Some(food) = select_from_catalog(
                        self.catalog,
                        category,
                        meal_type,
                        &self.restrictions,
                        daily_left,
                        overall_left,
                        &used_counts,
                    ) else {
                        debug!(
                            day,
                            meal = %meal_type,
                            category = %category,
                            "no affordable candidate, leaving component empty"
                        );
                        continue;
                    };

                    let nutrients = food.nutrients_for(food.serving_size);
                    total_cost += nutrients.cost;
                    overall_left -= nutrients.cost;
                    daily_left -= nutrients.cost;
                    day_nutrition.add(&nutrients);
                    *used_counts.entry(food.key()).or_insert(0) += 1;

                    items.push(MealItem {
                        food_name: food.name.clone(),
                        quantity: food.serving_size,
                        unit: food.unit.clone(),
                        estimated_cost: nutrients.cost,
                        calories: nutrients.calories,
                        protein: nutrients.protein,
                        carbs: nutrients.carbs,
                        fats: nutrients.fats,
                        uses_inventory: false,
                        inventory_item_id: None,
                        notes: None,
                    });
                }

                slots.push(MealSlot {
                    day,
                    meal_type,
                    items,
                });
            }

            daily_totals.push(day_nutrition);
        }

        let shopping_list = self.aggregate_shopping_list(&slots);
        let alternatives = self.suggest_alternatives(&shopping_list)?;
        let nutrition_analysis = nutrition::analyze(&daily_totals);
        let inventory_usage = inventory_usage(&slots, request.duration_days, cost_saved);

        let total_cost = round2(total_cost);
        let result = OptimizationResult {
            target_budget: request.target_budget,
            duration_days: request.duration_days,
            use_inventory: request.use_inventory,
            total_cost,
            budget_remaining: round2(request.target_budget - total_cost),
            budget_utilization: round1(total_cost / request.target_budget * 100.0),
            slots,
            nutrition_analysis,
            inventory_usage,
            shopping_list,
            alternatives,
            generated_at: Utc::now(),
        };

        info!(
            total_cost = result.total_cost,
            score = result.nutrition_analysis.overall_score,
            meals_from_inventory = result.inventory_usage.meals_from_inventory,
            "optimization complete"
        );

        Ok(result)
    }

    /// Group purchased items by food and unit into one line each.
    fn aggregate_shopping_list(&self, slots: &[MealSlot]) -> Vec<ShoppingLine> {
        let mut grouped: BTreeMap<(String, String), (f64, f64)> = BTreeMap::new();

        for slot in slots {
            for item in slot.items.iter().filter(|i| !i.uses_inventory) {
                let entry = grouped
                    .entry((item.food_name.clone(), item.unit.clone()))
                    .or_insert((0.0, 0.0));
                entry.0 += item.quantity;
                entry.1 += item.estimated_cost;
            }
        }

        let mut lines: Vec<ShoppingLine> = grouped
            .into_iter()
            .map(|((item, unit), (quantity, cost))| {
                let category = self
                    .catalog
                    .get(&item)
                    .map(|f| f.category)
                    .unwrap_or(crate::models::FoodCategory::Other);
                ShoppingLine {
                    item,
                    quantity: round1(quantity),
                    unit,
                    category,
                    estimated_cost: round2(cost),
                }
            })
            .collect();

        lines.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.item.cmp(&b.item)));
        lines
    }

    /// Suggest cheaper same-category substitutes for the costliest lines.
    ///
    /// Advisory output only; the chosen plan is not mutated. Lines with no
    /// cheaper same-category food are omitted.
    fn suggest_alternatives(&self, shopping_list: &[ShoppingLine]) -> Result<Vec<Alternative>> {
        let mut by_cost: Vec<&ShoppingLine> = shopping_list.iter().collect();
        by_cost.sort_by(|a, b| {
            b.estimated_cost
                .partial_cmp(&a.estimated_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.item.cmp(&b.item))
        });

        let mut alternatives = Vec::new();
        for line in by_cost.into_iter().take(MAX_EXPENSIVE_LINES) {
            let original = self.catalog.require(&line.item)?;
            let options: Vec<AlternativeOption> = self
                .catalog
                .find_alternatives(&line.item, ALTERNATIVE_COST_RATIO)
                .into_iter()
                .take(MAX_ALTERNATIVES_PER_LINE)
                .map(|alt| AlternativeOption {
                    name: alt.name.clone(),
                    cost_per_100: alt.cost_per_100,
                    estimated_savings: round2(
                        (original.cost_per_100 - alt.cost_per_100) * line.quantity / 100.0,
                    ),
                })
                .collect();

            if !options.is_empty() {
                alternatives.push(Alternative {
                    original_item: line.item.clone(),
                    original_cost: line.estimated_cost,
                    options,
                });
            }
        }

        Ok(alternatives)
    }
}

fn inventory_usage(slots: &[MealSlot], duration_days: u32, cost_saved: f64) -> InventoryUsage {
    let total_meals = duration_days * MealType::ALL.len() as u32;
    let meals_from_inventory = slots.iter().filter(|s| s.uses_inventory()).count() as u32;
    let usage_percent = if total_meals > 0 {
        round1(meals_from_inventory as f64 / total_meals as f64 * 100.0)
    } else {
        0.0
    };

    InventoryUsage {
        total_meals,
        meals_from_inventory,
        usage_percent,
        estimated_cost_saved: round2(cost_saved),
        waste_reduction: format!(
            "{} of {} meals drew on existing inventory to reduce waste",
            meals_from_inventory, total_meals
        ),
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
