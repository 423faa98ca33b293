use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;

/// Interface for trained yield regressors
pub trait YieldModel: Send + Sync {
    /// Predict the yield for a single labeled row
    fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
