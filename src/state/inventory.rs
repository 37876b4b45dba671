use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::catalog::FoodCatalog;
use crate::error::{PlanError, Result};
use crate::models::{FoodCategory, InventoryItem, Restriction};

/// Load an inventory snapshot from a JSON file.
///
/// A failing read or parse is a dependency failure: the optimizer must not
/// run against a half-read snapshot.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryItem>> {
    let content = fs::read_to_string(&path).map_err(|e| {
        PlanError::InventoryUnavailable(format!("{}: {}", path.as_ref().display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        PlanError::InventoryUnavailable(format!("{}: {}", path.as_ref().display(), e))
    })
}

/// Save an inventory snapshot to a JSON file.
pub fn save_snapshot<P: AsRef<Path>>(path: P, items: &[InventoryItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// One snapshot item resolved against the catalog.
#[derive(Debug, Clone)]
struct WorkingEntry {
    inventory_id: Option<Uuid>,
    catalog_key: String,
    category: FoodCategory,
    remaining: f64,
    expiration_date: Option<NaiveDate>,
}

/// A single draw from the working copy.
#[derive(Debug, Clone)]
pub struct InventoryDraw {
    pub catalog_key: String,
    pub amount: f64,
    pub inventory_id: Option<Uuid>,
    pub expiration_date: Option<NaiveDate>,
}

/// The optimizer's private, mutable view of the inventory snapshot.
///
/// The real inventory store is never written during planning; draws only
/// decrement this copy so quantities are not double-assigned across slots
/// within one run.
pub struct WorkingInventory {
    entries: Vec<WorkingEntry>,
}

impl WorkingInventory {
    /// Resolve snapshot items against the catalog.
    ///
    /// Items that resolve to no catalog food are skipped: without a profile
    /// they cannot be costed or scored. Duplicate foods keep separate
    /// entries so the earlier-expiring batch is cleared first.
    pub fn new(snapshot: &[InventoryItem], catalog: &FoodCatalog) -> Self {
        let entries = snapshot
            .iter()
            .filter(|item| item.quantity > 0.0)
            .filter_map(|item| {
                catalog.resolve(&item.name).map(|profile| WorkingEntry {
                    inventory_id: item.id,
                    catalog_key: profile.key(),
                    category: profile.category,
                    remaining: item.quantity,
                    expiration_date: item.expiration_date,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        !self.entries.iter().any(|e| e.remaining > 1e-6)
    }

    /// Total quantity remaining for one catalog food.
    pub fn remaining_for(&self, catalog_key: &str) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.catalog_key == catalog_key)
            .map(|e| e.remaining)
            .sum()
    }

    /// Draw one serving (or the remainder, if smaller) of the best
    /// category candidate.
    ///
    /// Candidate order: earliest expiration first (undated last), then
    /// larger remaining quantity, then key.
    pub fn draw_for_category(
        &mut self,
        category: FoodCategory,
        catalog: &FoodCatalog,
        restrictions: &[Restriction],
    ) -> Option<InventoryDraw> {
        let mut best: Option<usize> = None;

        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.remaining <= 1e-6 || entry.category != category {
                continue;
            }
            let Some(profile) = catalog.get(&entry.catalog_key) else {
                continue;
            };
            if !profile.is_allowed(restrictions) {
                continue;
            }

            best = match best {
                None => Some(idx),
                Some(current) => {
                    if precedes(entry, &self.entries[current]) {
                        Some(idx)
                    } else {
                        Some(current)
                    }
                }
            };
        }

        let idx = best?;
        let serving = catalog.get(&self.entries[idx].catalog_key)?.serving_size;

        let entry = &mut self.entries[idx];
        let amount = serving.min(entry.remaining);
        entry.remaining -= amount;

        Some(InventoryDraw {
            catalog_key: entry.catalog_key.clone(),
            amount,
            inventory_id: entry.inventory_id,
            expiration_date: entry.expiration_date,
        })
    }
}

/// Whether `a` should be consumed before `b`.
fn precedes(a: &WorkingEntry, b: &WorkingEntry) -> bool {
    let expiry_a = a.expiration_date.unwrap_or(NaiveDate::MAX);
    let expiry_b = b.expiration_date.unwrap_or(NaiveDate::MAX);

    expiry_a
        .cmp(&expiry_b)
        .then_with(|| {
            b.remaining
                .partial_cmp(&a.remaining)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .then_with(|| a.catalog_key.cmp(&b.catalog_key))
        .is_lt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: f64, expiry: Option<(i32, u32, u32)>) -> InventoryItem {
        InventoryItem {
            id: None,
            name: name.to_string(),
            quantity,
            unit: None,
            category: None,
            cost: 0.0,
            expiration_date: expiry.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            notes: None,
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let snapshot = vec![
            item("milk", 1000.0, Some((2026, 8, 24))),
            item("rice", 2000.0, None),
        ];
        save_snapshot(&path, &snapshot).unwrap();

        let reloaded = load_snapshot(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].name, "milk");
        assert_eq!(reloaded[0].expiration_date, snapshot[0].expiration_date);
        assert!((reloaded[1].quantity - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_snapshot_is_dependency_failure() {
        let err = load_snapshot("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PlanError::InventoryUnavailable(_)));
    }

    #[test]
    fn test_unresolved_items_are_skipped() {
        let catalog = FoodCatalog::builtin();
        let snapshot = vec![item("laundry detergent", 500.0, None), item("milk", 1000.0, None)];
        let working = WorkingInventory::new(&snapshot, &catalog);

        assert!((working.remaining_for("milk") - 1000.0).abs() < 1e-9);
        assert!(!working.is_empty());
    }

    #[test]
    fn test_near_expiry_drawn_first() {
        let catalog = FoodCatalog::builtin();
        let snapshot = vec![
            item("apple", 600.0, Some((2026, 9, 22))),
            item("banana", 600.0, Some((2026, 8, 24))),
        ];
        let mut working = WorkingInventory::new(&snapshot, &catalog);

        let draw = working
            .draw_for_category(FoodCategory::Fruit, &catalog, &[])
            .unwrap();
        assert_eq!(draw.catalog_key, "banana");
    }

    #[test]
    fn test_equal_expiry_prefers_larger_quantity() {
        let catalog = FoodCatalog::builtin();
        let snapshot = vec![
            item("apple", 300.0, Some((2026, 9, 1))),
            item("banana", 900.0, Some((2026, 9, 1))),
        ];
        let mut working = WorkingInventory::new(&snapshot, &catalog);

        let draw = working
            .draw_for_category(FoodCategory::Fruit, &catalog, &[])
            .unwrap();
        assert_eq!(draw.catalog_key, "banana");
    }

    #[test]
    fn test_dated_precedes_undated() {
        let catalog = FoodCatalog::builtin();
        let snapshot = vec![
            item("apple", 900.0, None),
            item("orange", 300.0, Some((2026, 12, 1))),
        ];
        let mut working = WorkingInventory::new(&snapshot, &catalog);

        let draw = working
            .draw_for_category(FoodCategory::Fruit, &catalog, &[])
            .unwrap();
        assert_eq!(draw.catalog_key, "orange");
    }

    #[test]
    fn test_draws_decrement_until_exhausted() {
        let catalog = FoodCatalog::builtin();
        // Milk serving is 250 ml; 600 ml covers two full draws and one partial.
        let snapshot = vec![item("milk", 600.0, None)];
        let mut working = WorkingInventory::new(&snapshot, &catalog);

        let first = working
            .draw_for_category(FoodCategory::Dairy, &catalog, &[])
            .unwrap();
        assert!((first.amount - 250.0).abs() < 1e-9);

        let second = working
            .draw_for_category(FoodCategory::Dairy, &catalog, &[])
            .unwrap();
        assert!((second.amount - 250.0).abs() < 1e-9);

        let third = working
            .draw_for_category(FoodCategory::Dairy, &catalog, &[])
            .unwrap();
        assert!((third.amount - 100.0).abs() < 1e-9);

        assert!(working
            .draw_for_category(FoodCategory::Dairy, &catalog, &[])
            .is_none());
    }

    #[test]
    fn test_restrictions_filter_draws() {
        let catalog = FoodCatalog::builtin();
        let snapshot = vec![item("milk", 1000.0, None)];
        let mut working = WorkingInventory::new(&snapshot, &catalog);

        assert!(working
            .draw_for_category(FoodCategory::Dairy, &catalog, &[Restriction::DairyFree])
            .is_none());
    }
}
