use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Restriction;

/// User-scoped planning preferences, persisted as a small JSON document.
///
/// Kept behind a plain read/write interface and out of the optimizer core;
/// the core only ever sees the parsed restrictions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<Restriction>,

    /// Free-form preference text ("high protein"), informational only.
    #[serde(default)]
    pub dietary_preference: Option<String>,

    #[serde(default)]
    pub default_budget: Option<f64>,
}

impl Preferences {
    /// Load preferences, defaulting when the file does not exist yet.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("prefs.json")).unwrap();
        assert!(prefs.dietary_restrictions.is_empty());
        assert!(prefs.default_budget.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences {
            dietary_restrictions: vec![Restriction::Vegetarian, Restriction::GlutenFree],
            dietary_preference: Some("high protein".to_string()),
            default_budget: Some(3500.0),
        };
        prefs.save(&path).unwrap();

        let reloaded = Preferences::load(&path).unwrap();
        assert_eq!(reloaded.dietary_restrictions, prefs.dietary_restrictions);
        assert_eq!(reloaded.dietary_preference, prefs.dietary_preference);
        assert_eq!(reloaded.default_budget, Some(3500.0));
    }
}
