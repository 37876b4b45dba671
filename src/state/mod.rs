mod inventory;
mod plans;
mod preferences;

pub use inventory::{InventoryDraw, WorkingInventory, load_snapshot, save_snapshot};
pub use plans::PlanStore;
pub use preferences::Preferences;
