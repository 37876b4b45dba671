use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::food::FoodCategory;

/// One on-hand item as reported by the inventory store.
///
/// Quantities are in base units (grams or milliliters), matching the
/// catalog's per-100 reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: Option<Uuid>,

    pub name: String,

    /// Quantity on hand in grams or milliliters.
    pub quantity: f64,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub category: Option<FoodCategory>,

    /// Purchase cost of the item, informational only.
    #[serde(default)]
    pub cost: f64,

    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryItem {
    /// Canonical key for catalog matching (lowercase, underscores).
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Days until expiration relative to `today`, negative if already past.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiration_date
            .map(|d| d.signed_duration_since(today).num_days())
    }
}

/// The inventory visible to the optimizer, read once at planning time.
pub type InventorySnapshot = Vec<InventoryItem>;
