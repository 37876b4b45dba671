use crate::models::{FoodProfile, MealPlan, MealType, OptimizationResult};

/// Display a full optimization result.
pub fn display_result(result: &OptimizationResult) {
    println!();
    println!("=== Optimized Meal Plan ({} days) ===", result.duration_days);
    println!();

    for day in 0..result.duration_days {
        println!("Day {}", day + 1);
        for meal_type in MealType::ALL {
            let slot = result
                .slots
                .iter()
                .find(|s| s.day == day && s.meal_type == meal_type);

            let Some(slot) = slot else { continue };

            if slot.items.is_empty() {
                println!("  {:<10} (nothing assigned)", format!("{}:", meal_type));
                continue;
            }

            let names: Vec<String> = slot
                .items
                .iter()
                .map(|item| {
                    let marker = if item.uses_inventory { " [inventory]" } else { "" };
                    format!(
                        "{} ({:.0} {}){}",
                        item.food_name, item.quantity, item.unit, marker
                    )
                })
                .collect();

            println!("  {:<10} {}", format!("{}:", meal_type), names.join(", "));
        }
        println!();
    }

    println!("--- Summary ---");
    println!("Total cost:        {:.2}", result.total_cost);
    println!(
        "Budget remaining:  {:.2} of {:.2} ({:.1}% used)",
        result.budget_remaining, result.target_budget, result.budget_utilization
    );
    println!(
        "Nutrition score:   {}/100",
        result.nutrition_analysis.overall_score
    );
    println!(
        "Inventory usage:   {}/{} meals, {:.2} saved",
        result.inventory_usage.meals_from_inventory,
        result.inventory_usage.total_meals,
        result.inventory_usage.estimated_cost_saved
    );
    println!("{}", result.inventory_usage.waste_reduction);
    println!();

    display_shopping_list(result);
    display_alternatives(result);
}

fn display_shopping_list(result: &OptimizationResult) {
    if result.shopping_list.is_empty() {
        println!("Shopping list: (nothing to buy)");
        println!();
        return;
    }

    println!("--- Shopping List ---");
    let max_name_len = result
        .shopping_list
        .iter()
        .map(|l| l.item.len())
        .max()
        .unwrap_or(10);

    for line in &result.shopping_list {
        println!(
            "  {:<width$}  {:>7.1} {:<3} {:<10} {:>8.2}",
            line.item,
            line.quantity,
            line.unit,
            line.category,
            line.estimated_cost,
            width = max_name_len
        );
    }

    let total: f64 = result.shopping_list.iter().map(|l| l.estimated_cost).sum();
    println!("  Total: {:.2}", total);
    println!();
}

fn display_alternatives(result: &OptimizationResult) {
    if result.alternatives.is_empty() {
        return;
    }

    println!("--- Cheaper Alternatives ---");
    for alternative in &result.alternatives {
        println!(
            "  {} ({:.2}):",
            alternative.original_item, alternative.original_cost
        );
        for option in &alternative.options {
            println!(
                "    -> {} (save ~{:.2})",
                option.name, option.estimated_savings
            );
        }
    }
    println!();
}

/// Display a list of saved plans.
pub fn display_plan_list(plans: &[MealPlan]) {
    if plans.is_empty() {
        println!("No saved meal plans.");
        return;
    }

    println!();
    println!("=== Saved Meal Plans ({}) ===", plans.len());
    println!();

    for plan in plans {
        println!(
            "  {}  {} -> {}  budget {:.2}  cost {:.2}  {} items  [{}]",
            plan.id,
            plan.start_date,
            plan.end_date,
            plan.target_budget,
            plan.total_cost,
            plan.items_count(),
            plan.name
        );
    }
    println!();
}

/// Display one saved plan with its full item grid.
pub fn display_plan(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.name);
    println!("{}", plan.description);
    println!(
        "{} -> {}  budget {:.2}  cost {:.2}  status {}",
        plan.start_date, plan.end_date, plan.target_budget, plan.total_cost, plan.status
    );
    println!();

    let mut last_day = u32::MAX;
    for entry in &plan.items {
        if entry.day != last_day {
            println!("Day {}", entry.day + 1);
            last_day = entry.day;
        }
        let marker = if entry.item.uses_inventory { " [inventory]" } else { "" };
        println!(
            "  {:<10} {} ({:.0} {}) {:.2}{}",
            format!("{}:", entry.meal_type),
            entry.item.food_name,
            entry.item.quantity,
            entry.item.unit,
            entry.item.estimated_cost,
            marker
        );
    }
    println!();
}

/// Display the reference catalog.
pub fn display_catalog(foods: &[&FoodProfile]) {
    println!();
    println!("=== Food Catalog ({} foods) ===", foods.len());
    println!();

    for food in foods {
        println!(
            "  {:<18} {:<10} {:>6.2}/100{}  {:>5.0} cal  serving {:.0} {}",
            food.name,
            food.category,
            food.cost_per_100,
            food.unit,
            food.calories,
            food.serving_size,
            food.unit
        );
    }
    println!();
}
