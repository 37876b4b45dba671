pub mod prompts;
pub mod render;

pub use prompts::{prompt_budget, prompt_yes_no};
pub use render::{display_catalog, display_plan, display_plan_list, display_result};
