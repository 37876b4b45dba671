pub mod food;
pub mod inventory;
pub mod plan;
pub mod wire;

pub use food::{FoodCategory, FoodOrigin, FoodProfile, Nutrients, Restriction};
pub use inventory::{InventoryItem, InventorySnapshot};
pub use plan::{
    Alternative, AlternativeOption, DayTotals, InventoryUsage, MealItem, MealPlan, MealSlot,
    MealType, Nutrient, NutrientReport, NutritionAnalysis, OptimizationResult, PlanItem,
    ShoppingLine,
};
pub use wire::{OptimizeResponse, WireMealItem};
