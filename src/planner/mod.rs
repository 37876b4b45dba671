pub mod constants;
pub mod engine;
pub mod nutrition;
pub mod selection;

pub use constants::*;
pub use engine::{MealOptimizer, PlanRequest};
pub use nutrition::{analyze, meal_calorie_target, overall_score, validate_daily};
pub use selection::{score_candidate, select_from_catalog};
