//! Configuration module for the crop yield predictor.
//!
//! Paths come from environment variables (optionally via `.env`); the
//! dropdown choice lists come from a TOML file.

mod choices_config;

pub use choices_config::ChoiceLists;

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "knn_crop_yield_model.json";
pub const DEFAULT_CHOICES_PATH: &str = "config/choices.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Main application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model_path: PathBuf,
    pub choices_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            choices_path: PathBuf::from(DEFAULT_CHOICES_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            model_path: get("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            choices_path: get("CHOICES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.choices_path),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn load_choices(&self) -> Result<ChoiceLists> {
        ChoiceLists::load(&self.choices_path).with_context(|| {
            format!(
                "Failed to load choice lists from {:?}",
                self.choices_path
            )
        })
    }
}
