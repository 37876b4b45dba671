//! Built-in reference foods with nutrition and market cost per 100 g/ml.

use crate::models::{FoodCategory, FoodOrigin, FoodProfile};

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    category: FoodCategory,
    origin: FoodOrigin,
    contains_gluten: bool,
    cost_per_100: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    fiber: f64,
    serving_size: f64,
    unit: &str,
) -> FoodProfile {
    FoodProfile {
        name: name.to_string(),
        category,
        origin,
        contains_gluten,
        cost_per_100,
        calories,
        protein,
        carbs,
        fats,
        fiber,
        serving_size,
        unit: unit.to_string(),
    }
}

/// The default food catalog.
pub fn seed_foods() -> Vec<FoodProfile> {
    use FoodCategory::*;
    use FoodOrigin::{Egg, Fish, Meat, Plant};

    vec![
        // Proteins
        food("Chicken Breast", Protein, Meat, false, 32.0, 165.0, 31.0, 0.0, 3.6, 0.0, 150.0, "g"),
        food("Eggs", Protein, Egg, false, 14.0, 155.0, 13.0, 1.1, 11.0, 0.0, 100.0, "g"),
        food("Salmon", Protein, Fish, false, 160.0, 208.0, 20.0, 0.0, 13.0, 0.0, 150.0, "g"),
        food("Ground Beef", Protein, Meat, false, 45.0, 250.0, 26.0, 0.0, 15.0, 0.0, 150.0, "g"),
        food("Tofu", Protein, Plant, false, 25.0, 76.0, 8.0, 1.9, 4.8, 0.3, 150.0, "g"),
        food("Nuts Almonds", Protein, Plant, false, 80.0, 579.0, 21.0, 22.0, 50.0, 12.5, 30.0, "g"),
        // Grains
        food("Brown Rice", Grain, Plant, false, 7.0, 370.0, 7.9, 77.0, 2.9, 3.5, 75.0, "g"),
        food("Whole Wheat Bread", Grain, Plant, true, 10.0, 247.0, 13.0, 41.0, 3.4, 7.0, 60.0, "g"),
        food("Oatmeal", Grain, Plant, false, 12.0, 389.0, 16.9, 66.0, 6.9, 10.6, 50.0, "g"),
        food("Pasta", Grain, Plant, true, 8.0, 371.0, 13.0, 74.0, 1.5, 3.2, 80.0, "g"),
        // Vegetables
        food("Broccoli", Vegetable, Plant, false, 8.0, 34.0, 2.8, 7.0, 0.4, 2.6, 150.0, "g"),
        food("Spinach", Vegetable, Plant, false, 6.0, 23.0, 2.9, 3.6, 0.4, 2.2, 100.0, "g"),
        food("Carrots", Vegetable, Plant, false, 5.0, 41.0, 0.9, 10.0, 0.2, 2.8, 100.0, "g"),
        food("Bell Peppers", Vegetable, Plant, false, 12.0, 31.0, 1.0, 6.0, 0.3, 2.1, 150.0, "g"),
        food("Tomatoes", Vegetable, Plant, false, 6.0, 18.0, 0.9, 3.9, 0.2, 1.2, 150.0, "g"),
        food("Avocado", Vegetable, Plant, false, 40.0, 160.0, 2.0, 9.0, 15.0, 7.0, 100.0, "g"),
        // Fruits
        food("Banana", Fruit, Plant, false, 8.0, 89.0, 1.1, 23.0, 0.3, 2.6, 120.0, "g"),
        food("Apple", Fruit, Plant, false, 18.0, 52.0, 0.3, 14.0, 0.2, 2.4, 150.0, "g"),
        food("Orange", Fruit, Plant, false, 15.0, 47.0, 0.9, 12.0, 0.1, 2.4, 130.0, "g"),
        food("Berries", Fruit, Plant, false, 35.0, 57.0, 0.7, 14.0, 0.3, 2.4, 100.0, "g"),
        // Dairy
        food("Milk", Dairy, FoodOrigin::Dairy, false, 11.0, 42.0, 3.4, 5.0, 1.0, 0.0, 250.0, "ml"),
        food("Greek Yogurt", Dairy, FoodOrigin::Dairy, false, 44.0, 59.0, 10.0, 3.6, 0.4, 0.0, 170.0, "g"),
        food("Cheese", Dairy, FoodOrigin::Dairy, false, 90.0, 402.0, 25.0, 1.3, 33.0, 0.0, 30.0, "g"),
        // Fats
        food("Olive Oil", Fat, Plant, false, 60.0, 884.0, 0.0, 0.0, 100.0, 0.0, 15.0, "ml"),
    ]
}
