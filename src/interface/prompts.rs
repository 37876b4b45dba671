use dialoguer::{Confirm, Input};

use crate::error::{PlanError, Result};

/// Yes/no confirmation with a default.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for the plan budget when it was not given on the command line.
pub fn prompt_budget(default: Option<f64>) -> Result<f64> {
    let mut input = Input::new().with_prompt("Target budget for the plan");
    if let Some(default) = default {
        input = input.default(format!("{default}"));
    }
    let raw: String = input.interact_text()?;

    let budget: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("not a number: {raw}")))?;

    if budget <= 0.0 {
        return Err(PlanError::InvalidInput(
            "budget must be positive".to_string(),
        ));
    }

    Ok(budget)
}
