use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Food not found in catalog: {0}")]
    FoodNotFound(String),

    #[error("Meal plan not found: {0}")]
    PlanNotFound(String),

    #[error("Food catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Inventory unavailable: {0}")]
    InventoryUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
