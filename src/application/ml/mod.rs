pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

use crate::domain::errors::ModelUnavailableError;
use onnx_predictor::OnnxPredictor;
use predictor::YieldModel;
use smartcore_predictor::SmartCorePredictor;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load the model artifact, picking the backend from the file extension.
pub fn load_model(path: &Path) -> Result<Arc<dyn YieldModel>, ModelUnavailableError> {
    info!("Loading model from {:?}...", path);

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let model: Arc<dyn YieldModel> = match extension.as_deref() {
        Some("json") => Arc::new(SmartCorePredictor::load(path)?),
        Some("onnx") => Arc::new(OnnxPredictor::load(path)?),
        _ => {
            return Err(ModelUnavailableError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    info!("Model loaded successfully: {} ({})", model.name(), model.version());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let result = load_model(Path::new("knn_crop_yield_model.pkl"));
        assert!(matches!(
            result,
            Err(ModelUnavailableError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_json_model() {
        let result = load_model(Path::new("definitely_missing_model.json"));
        assert!(matches!(result, Err(ModelUnavailableError::NotFound { .. })));
    }
}
