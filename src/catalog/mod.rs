//! The nutrition and cost knowledge base.
//!
//! Reference data only: the optimizer looks foods up here but never
//! mutates them.

mod seed;

use std::collections::HashMap;
use std::path::Path;

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{FoodCategory, FoodProfile, Restriction};

pub use seed::seed_foods;

/// Minimum similarity for fuzzy name resolution.
const FUZZY_RESOLVE_THRESHOLD: f64 = 0.85;

/// Lookup table of reference foods keyed by normalized name.
pub struct FoodCatalog {
    foods: HashMap<String, FoodProfile>,
}

impl FoodCatalog {
    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        Self::from_foods(seed::seed_foods())
    }

    /// Build a catalog from a list of profiles.
    ///
    /// Deduplicates by normalized name (last occurrence wins).
    pub fn from_foods(foods: Vec<FoodProfile>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Load a catalog from a CSV file with one profile per row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref()).map_err(|e| {
            PlanError::CatalogUnavailable(format!("{}: {}", path.as_ref().display(), e))
        })?;

        let mut foods = Vec::new();
        for row in reader.deserialize() {
            let food: FoodProfile = row?;
            if !food.is_valid() {
                return Err(PlanError::InvalidInput(format!(
                    "invalid catalog entry: {}",
                    food.name
                )));
            }
            foods.push(food);
        }

        if foods.is_empty() {
            return Err(PlanError::CatalogUnavailable(format!(
                "no foods in {}",
                path.as_ref().display()
            )));
        }

        Ok(Self::from_foods(foods))
    }

    /// Get a food by normalized key.
    pub fn get(&self, key: &str) -> Option<&FoodProfile> {
        self.foods.get(&normalize(key))
    }

    /// Get a food by key, failing with `FoodNotFound`.
    pub fn require(&self, key: &str) -> Result<&FoodProfile> {
        self.get(key)
            .ok_or_else(|| PlanError::FoodNotFound(key.to_string()))
    }

    /// All foods in a category, ordered by name.
    pub fn by_category(&self, category: FoodCategory) -> Vec<&FoodProfile> {
        let mut foods: Vec<&FoodProfile> = self
            .foods
            .values()
            .filter(|f| f.category == category)
            .collect();
        foods.sort_by(|a, b| a.name.cmp(&b.name));
        foods
    }

    /// Foods in a category that pass the dietary restrictions, by name.
    pub fn compatible_by_category(
        &self,
        category: FoodCategory,
        restrictions: &[Restriction],
    ) -> Vec<&FoodProfile> {
        self.by_category(category)
            .into_iter()
            .filter(|f| f.is_allowed(restrictions))
            .collect()
    }

    /// Same-category foods cheaper than `max_cost_ratio` x the original's
    /// unit price, cheapest first.
    ///
    /// Cross-category swaps are never suggested.
    pub fn find_alternatives(&self, key: &str, max_cost_ratio: f64) -> Vec<&FoodProfile> {
        let Some(original) = self.get(key) else {
            return Vec::new();
        };
        let max_cost = original.cost_per_100 * max_cost_ratio;

        let mut alternatives: Vec<&FoodProfile> = self
            .foods
            .values()
            .filter(|f| {
                f.key() != original.key()
                    && f.category == original.category
                    && f.cost_per_100 <= max_cost
            })
            .collect();
        alternatives.sort_by(|a, b| {
            a.cost_per_100
                .partial_cmp(&b.cost_per_100)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        alternatives
    }

    /// Resolve a free-form name to a catalog food.
    ///
    /// Tries an exact normalized match, then substring containment
    /// ("rice" resolves to "brown_rice"), then the closest fuzzy match
    /// above the similarity threshold.
    pub fn resolve(&self, name: &str) -> Option<&FoodProfile> {
        let needle = normalize(name);
        if needle.is_empty() {
            return None;
        }

        if let Some(food) = self.foods.get(&needle) {
            return Some(food);
        }

        let mut contained: Vec<&FoodProfile> = self
            .foods
            .iter()
            .filter(|(key, _)| key.contains(needle.as_str()) || needle.contains(key.as_str()))
            .map(|(_, food)| food)
            .collect();
        contained.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(food) = contained.first() {
            return Some(food);
        }

        self.foods
            .iter()
            .map(|(key, food)| (jaro_winkler(&needle, key), food))
            .filter(|(score, _)| *score >= FUZZY_RESOLVE_THRESHOLD)
            .max_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, food)| food)
    }

    /// All foods, ordered by category then name.
    pub fn all(&self) -> Vec<&FoodProfile> {
        let mut foods: Vec<&FoodProfile> = self.foods.values().collect();
        foods.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = FoodCatalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 24);

        let milk = catalog.get("milk").unwrap();
        assert_eq!(milk.name, "Milk");
        assert_eq!(milk.category, FoodCategory::Dairy);
        assert_eq!(milk.unit, "ml");
    }

    #[test]
    fn test_get_accepts_display_names() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.get("Chicken Breast").is_some());
        assert!(catalog.get("chicken_breast").is_some());
        assert!(catalog.require("dragonfruit").is_err());
    }

    #[test]
    fn test_resolve_substring_and_fuzzy() {
        let catalog = FoodCatalog::builtin();

        // Substring: generic pantry names map onto catalog entries.
        assert_eq!(catalog.resolve("rice").unwrap().name, "Brown Rice");
        assert_eq!(catalog.resolve("bread").unwrap().name, "Whole Wheat Bread");

        // Fuzzy: minor typos still resolve.
        assert_eq!(catalog.resolve("brocolli").unwrap().name, "Broccoli");

        assert!(catalog.resolve("motor oil filter").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_alternatives_same_category_cheaper() {
        let catalog = FoodCatalog::builtin();
        let alternatives = catalog.find_alternatives("salmon", 0.8);

        assert!(!alternatives.is_empty());
        let salmon_cost = catalog.get("salmon").unwrap().cost_per_100;
        for alt in &alternatives {
            assert_eq!(alt.category, FoodCategory::Protein);
            assert!(alt.cost_per_100 <= salmon_cost * 0.8);
        }
        // Cheapest first
        for pair in alternatives.windows(2) {
            assert!(pair[0].cost_per_100 <= pair[1].cost_per_100);
        }
    }

    #[test]
    fn test_no_alternatives_below_cheapest() {
        let catalog = FoodCatalog::builtin();
        // Carrots are the cheapest vegetable; nothing qualifies below 80%.
        assert!(catalog.find_alternatives("carrots", 0.8).is_empty());
    }

    #[test]
    fn test_compatible_by_category_filters() {
        let catalog = FoodCatalog::builtin();
        let vegan_proteins =
            catalog.compatible_by_category(FoodCategory::Protein, &[Restriction::Vegan]);

        assert!(!vegan_proteins.is_empty());
        for food in vegan_proteins {
            assert!(food.is_allowed(&[Restriction::Vegan]));
        }
    }
}
