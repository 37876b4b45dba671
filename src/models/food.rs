use serde::{Deserialize, Serialize};

/// Food categories used for meal composition and shopping-list grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Grain,
    Vegetable,
    Fruit,
    Dairy,
    Fat,
    Other,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Grain => "grain",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fat => "fat",
            FoodCategory::Other => "other",
        }
    }

    /// Parse a category from free-form text. Unknown values map to `Other`.
    pub fn parse(s: &str) -> FoodCategory {
        match s.trim().to_lowercase().as_str() {
            "protein" => FoodCategory::Protein,
            "grain" => FoodCategory::Grain,
            "vegetable" => FoodCategory::Vegetable,
            "fruit" => FoodCategory::Fruit,
            "dairy" => FoodCategory::Dairy,
            "fat" => FoodCategory::Fat,
            _ => FoodCategory::Other,
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a food comes from. Drives the dietary-restriction filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodOrigin {
    Plant,
    Meat,
    Fish,
    Egg,
    Dairy,
}

/// Dietary restrictions a plan must honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Restriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl Restriction {
    /// Parse a comma-separated restriction string ("vegan, gluten-free").
    ///
    /// "lactose" is accepted as an alias for dairy-free. Unknown entries
    /// are ignored.
    pub fn parse_list(s: &str) -> Vec<Restriction> {
        let mut out = Vec::new();
        for part in s.split(',') {
            let restriction = match part.trim().to_lowercase().as_str() {
                "vegetarian" => Some(Restriction::Vegetarian),
                "vegan" => Some(Restriction::Vegan),
                "gluten-free" | "gluten free" => Some(Restriction::GlutenFree),
                "dairy-free" | "dairy free" | "lactose" | "lactose-intolerant" => {
                    Some(Restriction::DairyFree)
                }
                _ => None,
            };
            if let Some(r) = restriction {
                if !out.contains(&r) {
                    out.push(r);
                }
            }
        }
        out
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Restriction::Vegetarian => "vegetarian",
            Restriction::Vegan => "vegan",
            Restriction::GlutenFree => "gluten-free",
            Restriction::DairyFree => "dairy-free",
        }
    }
}

/// Nutrition and cost for a concrete quantity of one food.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub cost: f64,
}

/// Reference entry for one kind of food.
///
/// Nutrition values and cost are per 100 g (or 100 ml for liquids).
/// Immutable reference data owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodProfile {
    pub name: String,
    pub category: FoodCategory,
    pub origin: FoodOrigin,
    #[serde(default)]
    pub contains_gluten: bool,
    pub cost_per_100: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub serving_size: f64,
    pub unit: String,
}

impl FoodProfile {
    /// Canonical key for lookups (lowercase, spaces as underscores).
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Market cost of one serving.
    pub fn serving_cost(&self) -> f64 {
        self.cost_per_100 * self.serving_size / 100.0
    }

    /// Nutrition and market cost for an arbitrary quantity in base units.
    pub fn nutrients_for(&self, quantity: f64) -> Nutrients {
        let factor = quantity / 100.0;
        Nutrients {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
            fiber: self.fiber * factor,
            cost: self.cost_per_100 * factor,
        }
    }

    /// Check this food against a set of dietary restrictions.
    pub fn is_allowed(&self, restrictions: &[Restriction]) -> bool {
        for restriction in restrictions {
            let blocked = match restriction {
                Restriction::Vegetarian => {
                    matches!(self.origin, FoodOrigin::Meat | FoodOrigin::Fish)
                }
                Restriction::Vegan => !matches!(self.origin, FoodOrigin::Plant),
                Restriction::GlutenFree => self.contains_gluten,
                Restriction::DairyFree => self.origin == FoodOrigin::Dairy,
            };
            if blocked {
                return false;
            }
        }
        true
    }

    /// Basic validation: non-negative values and a positive serving size.
    pub fn is_valid(&self) -> bool {
        self.cost_per_100 >= 0.0
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fats >= 0.0
            && self.fiber >= 0.0
            && self.serving_size > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodProfile {
        FoodProfile {
            name: "Greek Yogurt".to_string(),
            category: FoodCategory::Dairy,
            origin: FoodOrigin::Dairy,
            contains_gluten: false,
            cost_per_100: 44.0,
            calories: 59.0,
            protein: 10.0,
            carbs: 3.6,
            fats: 0.4,
            fiber: 0.0,
            serving_size: 170.0,
            unit: "g".to_string(),
        }
    }

    #[test]
    fn test_key_normalization() {
        assert_eq!(sample_food().key(), "greek_yogurt");
    }

    #[test]
    fn test_serving_cost() {
        let food = sample_food();
        assert!((food.serving_cost() - 74.8).abs() < 0.001);
    }

    #[test]
    fn test_nutrients_scale_linearly() {
        let food = sample_food();
        let n = food.nutrients_for(200.0);
        assert!((n.calories - 118.0).abs() < 0.001);
        assert!((n.protein - 20.0).abs() < 0.001);
        assert!((n.cost - 88.0).abs() < 0.001);
    }

    #[test]
    fn test_dietary_filters() {
        let yogurt = sample_food();
        assert!(yogurt.is_allowed(&[Restriction::Vegetarian]));
        assert!(!yogurt.is_allowed(&[Restriction::Vegan]));
        assert!(!yogurt.is_allowed(&[Restriction::DairyFree]));

        let mut bread = sample_food();
        bread.name = "Whole Wheat Bread".to_string();
        bread.category = FoodCategory::Grain;
        bread.origin = FoodOrigin::Plant;
        bread.contains_gluten = true;
        assert!(bread.is_allowed(&[Restriction::Vegan]));
        assert!(!bread.is_allowed(&[Restriction::GlutenFree]));
    }

    #[test]
    fn test_parse_restrictions() {
        let parsed = Restriction::parse_list("Vegan, lactose, nonsense, vegan");
        assert_eq!(parsed, vec![Restriction::Vegan, Restriction::DairyFree]);
    }

    #[test]
    fn test_category_parse_fallback() {
        assert_eq!(FoodCategory::parse("Dairy"), FoodCategory::Dairy);
        assert_eq!(FoodCategory::parse("mystery"), FoodCategory::Other);
    }
}
