//! Dropdown choice lists for the categorical columns.

use crate::domain::request::Column;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Allowed values for Crop, Season and State, in display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceLists {
    pub crops: Vec<String>,
    pub seasons: Vec<String>,
    pub states: Vec<String>,
}

impl ChoiceLists {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read choices file: {}", path.display()))?;
        let choices = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid choices file: {}", path.display()))?;

        info!(
            "Loaded {} crops, {} seasons, {} states from {:?}",
            choices.crops.len(),
            choices.seasons.len(),
            choices.states.len(),
            path
        );
        Ok(choices)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let choices: ChoiceLists =
            toml::from_str(content).context("Failed to parse choices TOML")?;
        choices.validate()?;
        Ok(choices)
    }

    pub fn for_column(&self, column: Column) -> Option<&[String]> {
        match column {
            Column::Crop => Some(&self.crops),
            Column::Season => Some(&self.seasons),
            Column::State => Some(&self.states),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        for column in [Column::Crop, Column::Season, Column::State] {
            let values = self.for_column(column).unwrap_or_default();
            if values.is_empty() {
                bail!("No choices configured for {}", column);
            }
            let mut seen = HashSet::new();
            for value in values {
                if value.trim().is_empty() {
                    bail!("Blank choice configured for {}", column);
                }
                if !seen.insert(value.as_str()) {
                    bail!("Duplicate choice '{}' configured for {}", value, column);
                }
            }
        }
        Ok(())
    }
}
