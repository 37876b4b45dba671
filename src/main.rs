use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use pantry_planner::catalog::FoodCatalog;
use pantry_planner::cli::{Cli, Command};
use pantry_planner::error::{PlanError, Result};
use pantry_planner::interface::{
    display_catalog, display_plan, display_plan_list, display_result, prompt_budget, prompt_yes_no,
};
use pantry_planner::models::{OptimizeResponse, Restriction};
use pantry_planner::planner::{MealOptimizer, PlanRequest};
use pantry_planner::state::{PlanStore, Preferences, load_snapshot};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = PathBuf::from(&cli.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Optimize {
            budget,
            days,
            no_inventory,
            inventory,
            catalog,
            save,
            json,
        } => cmd_optimize(
            &data_dir,
            budget,
            days,
            no_inventory,
            &inventory,
            catalog.as_deref(),
            save,
            json,
        ),
        Command::Plans => cmd_plans(&data_dir),
        Command::Show { id } => cmd_show(&data_dir, &id),
        Command::Delete { id } => cmd_delete(&data_dir, &id),
        Command::Catalog { csv } => cmd_catalog(csv.as_deref()),
        Command::Prefs {
            restrictions,
            preference,
            budget,
            clear,
        } => cmd_prefs(&data_dir, restrictions.as_deref(), preference, budget, clear),
    }
}

fn plan_store(data_dir: &Path) -> PlanStore {
    PlanStore::new(data_dir.join("plans.json"))
}

fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join("preferences.json")
}

/// Generate an optimized meal plan and optionally persist it.
#[allow(clippy::too_many_arguments)]
fn cmd_optimize(
    data_dir: &Path,
    budget: Option<f64>,
    days: u32,
    no_inventory: bool,
    inventory_path: &str,
    catalog_path: Option<&str>,
    save: bool,
    json: bool,
) -> Result<()> {
    let prefs = Preferences::load(prefs_path(data_dir))?;

    let budget = match budget.or(prefs.default_budget) {
        Some(b) => b,
        None if json => {
            return Err(PlanError::InvalidInput(
                "--budget is required with --json".to_string(),
            ));
        }
        None => prompt_budget(None)?,
    };

    let catalog = match catalog_path {
        Some(path) => FoodCatalog::from_csv_path(path)?,
        None => FoodCatalog::builtin(),
    };

    let use_inventory = !no_inventory;
    let snapshot = if use_inventory && Path::new(inventory_path).exists() {
        load_snapshot(inventory_path)?
    } else {
        if use_inventory && !json {
            eprintln!(
                "No inventory file at {}, planning purchases only.",
                inventory_path
            );
        }
        Vec::new()
    };

    let request = PlanRequest {
        target_budget: budget,
        duration_days: days,
        use_inventory,
    };

    let optimizer =
        MealOptimizer::new(&catalog).with_restrictions(prefs.dietary_restrictions.clone());
    let result = optimizer.optimize(&request, &snapshot)?;

    if json {
        let response = OptimizeResponse::from(&result);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_result(&result);
    }

    let persist = save || (!json && prompt_yes_no("Save this plan?", true)?);
    if persist {
        let plan = plan_store(data_dir).create(&result, None, None)?;
        if !json {
            println!("Saved plan {} ({})", plan.id, plan.name);
        }
    }

    Ok(())
}

fn cmd_plans(data_dir: &Path) -> Result<()> {
    let plans = plan_store(data_dir).list()?;
    display_plan_list(&plans);
    Ok(())
}

fn cmd_show(data_dir: &Path, id: &str) -> Result<()> {
    let id = parse_plan_id(id)?;
    let plan = plan_store(data_dir).get(&id)?;
    display_plan(&plan);
    Ok(())
}

fn cmd_delete(data_dir: &Path, id: &str) -> Result<()> {
    let id = parse_plan_id(id)?;
    plan_store(data_dir).delete(&id)?;
    println!("Deleted plan {}", id);
    Ok(())
}

fn cmd_catalog(csv: Option<&str>) -> Result<()> {
    let catalog = match csv {
        Some(path) => FoodCatalog::from_csv_path(path)?,
        None => FoodCatalog::builtin(),
    };
    display_catalog(&catalog.all());
    Ok(())
}

fn cmd_prefs(
    data_dir: &Path,
    restrictions: Option<&str>,
    preference: Option<String>,
    budget: Option<f64>,
    clear: bool,
) -> Result<()> {
    let path = prefs_path(data_dir);
    let mut prefs = if clear {
        Preferences::default()
    } else {
        Preferences::load(&path)?
    };

    let mut changed = clear;
    if let Some(raw) = restrictions {
        prefs.dietary_restrictions = Restriction::parse_list(raw);
        changed = true;
    }
    if let Some(text) = preference {
        prefs.dietary_preference = Some(text);
        changed = true;
    }
    if let Some(b) = budget {
        if b <= 0.0 {
            return Err(PlanError::InvalidInput(
                "default budget must be positive".to_string(),
            ));
        }
        prefs.default_budget = Some(b);
        changed = true;
    }

    if changed {
        prefs.save(&path)?;
        println!("Preferences saved.");
    }

    let restriction_names: Vec<&str> = prefs
        .dietary_restrictions
        .iter()
        .map(|r| r.as_str())
        .collect();
    println!(
        "Restrictions: {}",
        if restriction_names.is_empty() {
            "(none)".to_string()
        } else {
            restriction_names.join(", ")
        }
    );
    println!(
        "Preference:   {}",
        prefs.dietary_preference.as_deref().unwrap_or("(none)")
    );
    match prefs.default_budget {
        Some(b) => println!("Budget:       {:.2}", b),
        None => println!("Budget:       (none)"),
    }

    Ok(())
}

fn parse_plan_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| PlanError::InvalidInput(format!("not a plan id: {id}")))
}
