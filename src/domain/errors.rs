use crate::domain::request::Column;
use std::path::PathBuf;
use thiserror::Error;

/// The model artifact could not be made available for inference
#[derive(Debug, Error)]
pub enum ModelUnavailableError {
    #[error("Model file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read model file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode model file '{}': {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Unsupported model format '{}' (expected .json or .onnx)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Model runtime error for '{}': {reason}", path.display())]
    Runtime { path: PathBuf, reason: String },

    #[error("The prediction model was not loaded: {reason}")]
    NotLoaded { reason: String },
}

/// Raw input that cannot become a prediction request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{column} is required")]
    MissingValue { column: Column },

    #[error("{column} must be a whole number, got '{value}'")]
    InvalidInteger { column: Column, value: String },

    #[error("{column} must be a number, got '{value}'")]
    InvalidNumber { column: Column, value: String },

    #[error("Crop_Year {year} is too large for a {span}-year trend")]
    YearOverflow { year: i32, span: usize },
}

/// Inference failed for an otherwise valid request
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("{column} value '{value}' was not seen when the model was trained")]
    UnknownCategory { column: Column, value: String },

    #[error("{column} is not a finite number")]
    NonFiniteFeature { column: Column },

    #[error("Model expects {expected} features, encoder produced {actual}")]
    FeatureShape { expected: usize, actual: usize },

    #[error("Model backend failed: {0}")]
    Backend(String),

    #[error("Model returned no prediction")]
    EmptyOutput,
}

/// Everything the interactive prediction handler can report
#[derive(Debug, Error)]
pub enum YieldError {
    #[error(transparent)]
    ModelUnavailable(#[from] ModelUnavailableError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl YieldError {
    /// Dialog title shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            YieldError::ModelUnavailable(_) => "Model Error",
            YieldError::Validation(_) => "Input Error",
            YieldError::Prediction(_) => "Prediction Error",
        }
    }

    /// Dialog body shown to the user
    pub fn user_message(&self) -> String {
        match self {
            YieldError::ModelUnavailable(e) => e.to_string(),
            YieldError::Validation(e) => format!(
                "{}\nPlease enter valid numerical values for Year, Rainfall, Fertilizer, and Pesticide.",
                e
            ),
            YieldError::Prediction(e) => format!(
                "An error occurred during prediction: {}\nCheck the log for details.",
                e
            ),
        }
    }
}
