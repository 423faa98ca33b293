use super::predictor::YieldModel;
use crate::domain::errors::{ModelUnavailableError, PredictionError};
use crate::domain::ml::feature_registry::FeatureEncoder;
use crate::domain::request::PredictionRequest;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_regressor::KNNRegressor;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub type KnnModel = KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>;
pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum Regressor {
    Knn(KnnModel),
    RandomForest(ForestModel),
}

/// On-disk form of a smartcore model (serde_json)
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    /// Width of the matrix the regressor was fitted on
    pub n_features: usize,
    pub encoder: FeatureEncoder,
    pub regressor: Regressor,
}

pub struct SmartCorePredictor {
    artifact: ModelArtifact,
}

impl SmartCorePredictor {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    pub fn load(path: &Path) -> Result<Self, ModelUnavailableError> {
        if !path.exists() {
            return Err(ModelUnavailableError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| ModelUnavailableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file)).map_err(
            |e| ModelUnavailableError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        )?;

        if artifact.n_features != artifact.encoder.feature_len() {
            return Err(ModelUnavailableError::Decode {
                path: path.to_path_buf(),
                reason: format!(
                    "regressor was fitted on {} features but the encoder produces {}",
                    artifact.n_features,
                    artifact.encoder.feature_len()
                ),
            });
        }

        info!(
            "Successfully loaded {} {} from {:?} ({} features)",
            artifact.name,
            artifact.version,
            path,
            artifact.encoder.feature_len()
        );
        Ok(Self::from_artifact(artifact))
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.artifact.encoder
    }
}

impl YieldModel for SmartCorePredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        let input_vec = self.artifact.encoder.encode(request)?;
        // smartcore panics on a width mismatch instead of returning an error
        if input_vec.len() != self.artifact.n_features {
            return Err(PredictionError::FeatureShape {
                expected: self.artifact.n_features,
                actual: input_vec.len(),
            });
        }
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| PredictionError::Backend(format!("Matrix creation failed: {}", e)))?;

        let predictions = match &self.artifact.regressor {
            Regressor::Knn(model) => model.predict(&input_matrix),
            Regressor::RandomForest(model) => model.predict(&input_matrix),
        }
        .map_err(|e| PredictionError::Backend(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or(PredictionError::EmptyOutput)
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn version(&self) -> &str {
        &self.artifact.version
    }
}
