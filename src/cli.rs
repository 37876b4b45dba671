use clap::{Parser, Subcommand};

/// PantryPlanner: budget- and inventory-aware meal plan optimization.
#[derive(Parser, Debug)]
#[command(name = "pantry_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding saved plans and preferences.
    #[arg(long, default_value = ".")]
    pub data_dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an optimized meal plan.
    Optimize {
        /// Target budget for the whole plan.
        #[arg(short, long)]
        budget: Option<f64>,

        /// Number of days to plan.
        #[arg(short, long, default_value_t = 7)]
        days: u32,

        /// Plan purchases only, ignoring on-hand inventory.
        #[arg(long)]
        no_inventory: bool,

        /// Path to the inventory snapshot JSON file.
        #[arg(short, long, default_value = "inventory.json")]
        inventory: String,

        /// Load the food catalog from CSV instead of the built-in set.
        #[arg(long)]
        catalog: Option<String>,

        /// Persist the generated plan without asking.
        #[arg(long)]
        save: bool,

        /// Emit the result as JSON on stdout.
        #[arg(long)]
        json: bool,
    },

    /// List saved meal plans.
    Plans,

    /// Show one saved plan by id.
    Show { id: String },

    /// Delete a saved plan by id.
    Delete { id: String },

    /// List the reference food catalog.
    Catalog {
        /// Load the catalog from CSV instead of the built-in set.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show or update planning preferences.
    Prefs {
        /// Comma-separated dietary restrictions
        /// (vegetarian, vegan, gluten-free, dairy-free).
        #[arg(long)]
        restrictions: Option<String>,

        /// Free-form dietary preference text.
        #[arg(long)]
        preference: Option<String>,

        /// Default budget used when --budget is omitted.
        #[arg(long)]
        budget: Option<f64>,

        /// Clear all stored preferences.
        #[arg(long)]
        clear: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize {
            budget: None,
            days: 7,
            no_inventory: false,
            inventory: "inventory.json".to_string(),
            catalog: None,
            save: false,
            json: false,
        }
    }
}
