use super::predictor::YieldModel;
use crate::domain::errors::{ModelUnavailableError, PredictionError};
use crate::domain::ml::feature_registry::FeatureEncoder;
use crate::domain::request::PredictionRequest;
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Regressor exported to ONNX, fed with the encoded feature vector.
///
/// The encoder is stored beside the graph as `<stem>.encoder.json`.
pub struct OnnxPredictor {
    session: Mutex<Session>,
    encoder: FeatureEncoder,
    name: String,
}

impl OnnxPredictor {
    pub fn load(model_path: &Path) -> Result<Self, ModelUnavailableError> {
        if !model_path.exists() {
            return Err(ModelUnavailableError::NotFound {
                path: model_path.to_path_buf(),
            });
        }

        let encoder = load_encoder(&encoder_path(model_path))?;

        let mut session = Session::builder()
            .map_err(|e| runtime_error(model_path, e))?
            .commit_from_file(model_path)
            .map_err(|e| runtime_error(model_path, e))?;

        // Dry run on a zero row so a graph/encoder width mismatch fails here
        let width = encoder.feature_len();
        run_session(&mut session, vec![0.0; width]).map_err(|e| {
            runtime_error(
                model_path,
                format!("model rejects a {}-feature input: {}", width, e),
            )
        })?;

        info!(
            "Successfully loaded ONNX model from {:?} ({} features)",
            model_path,
            encoder.feature_len()
        );

        Ok(Self {
            session: Mutex::new(session),
            encoder,
            name: model_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "onnx".to_string()),
        })
    }
}

/// `models/knn.onnx` -> `models/knn.encoder.json`
pub fn encoder_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("encoder.json")
}

fn runtime_error(path: &Path, e: impl std::fmt::Display) -> ModelUnavailableError {
    ModelUnavailableError::Runtime {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn load_encoder(path: &Path) -> Result<FeatureEncoder, ModelUnavailableError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ModelUnavailableError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModelUnavailableError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&content).map_err(|e| ModelUnavailableError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn run_session(session: &mut Session, features: Vec<f32>) -> Result<f64, PredictionError> {
    let shape = vec![1, features.len()];

    let input_value = ort::value::Value::from_array((shape.as_slice(), features))
        .map_err(|e| PredictionError::Backend(format!("Input value creation failed: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_value])
        .map_err(|e| PredictionError::Backend(e.to_string()))?;

    let output_value = outputs
        .iter()
        .next()
        .map(|(_, v)| v)
        .ok_or(PredictionError::EmptyOutput)?;
    let data = output_value
        .try_extract_tensor::<f32>()
        .map_err(|e| PredictionError::Backend(e.to_string()))?;

    data.1
        .iter()
        .next()
        .map(|v| *v as f64)
        .ok_or(PredictionError::EmptyOutput)
}

impl YieldModel for OnnxPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        let features = self.encoder.encode_f32(request)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::Backend(format!("Mutex lock failed: {}", e)))?;

        run_session(&mut session, features)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "onnx"
    }
}
