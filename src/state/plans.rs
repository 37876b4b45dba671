use std::fs;
use std::path::PathBuf;

use chrono::{Days, Local, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::{PlanError, Result};
use crate::models::{MealPlan, OptimizationResult, PlanItem};

/// JSON-file-backed store of persisted meal plans.
///
/// Plans are created once per successful optimize call and never updated
/// in place. Every mutation rewrites the whole file, so a failed write
/// never leaves a half-written plan behind.
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn load_all(&self) -> Result<Vec<MealPlan>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, plans: &[MealPlan]) -> Result<()> {
        let json = serde_json::to_string_pretty(plans)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// All plans, most recently created first.
    pub fn list(&self) -> Result<Vec<MealPlan>> {
        let mut plans = self.load_all()?;
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    /// Fetch one plan with its full item grid.
    pub fn get(&self, id: &Uuid) -> Result<MealPlan> {
        self.load_all()?
            .into_iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| PlanError::PlanNotFound(id.to_string()))
    }

    /// Persist an optimization result as a new plan.
    ///
    /// The plan starts today and ends after the planned duration.
    pub fn create(
        &self,
        result: &OptimizationResult,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<MealPlan> {
        let start_date = Local::now().date_naive();
        let end_date = start_date
            .checked_add_days(Days::new(result.duration_days.saturating_sub(1) as u64))
            .ok_or_else(|| PlanError::InvalidInput("plan end date out of range".to_string()))?;

        let items: Vec<PlanItem> = result
            .meal_items()
            .map(|(slot, item)| PlanItem {
                day: slot.day,
                meal_type: slot.meal_type,
                item: item.clone(),
            })
            .collect();

        let plan = MealPlan {
            id: Uuid::new_v4(),
            name: name.unwrap_or_else(|| {
                format!("Optimized Plan - {}", start_date.format("%b %d, %Y"))
            }),
            description: description.unwrap_or_else(|| {
                format!(
                    "Meal plan generated with a budget of {:.2} over {} days",
                    result.target_budget, result.duration_days
                )
            }),
            start_date,
            end_date,
            target_budget: result.target_budget,
            total_cost: result.total_cost,
            status: "active".to_string(),
            created_at: Utc::now(),
            items,
        };

        let mut plans = self.load_all()?;
        plans.push(plan.clone());
        self.write_all(&plans)?;

        debug!(id = %plan.id, items = plan.items.len(), "persisted meal plan");
        Ok(plan)
    }

    /// Delete a plan by id.
    pub fn delete(&self, id: &Uuid) -> Result<()> {
        let mut plans = self.load_all()?;
        let before = plans.len();
        plans.retain(|p| p.id != *id);
        if plans.len() == before {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        self.write_all(&plans)?;

        debug!(id = %id, "deleted meal plan");
        Ok(())
    }
}
