use crate::domain::errors::PredictionError;
use crate::domain::request::{Column, FeatureValue, PredictionRequest};
use serde::{Deserialize, Serialize};

/// Number of numeric columns (Crop_Year, Annual_Rainfall, Fertilizer, Pesticide).
pub const NUMERIC_COLUMNS: usize = 4;

/// Standard scaling applied to the numeric columns, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericScaling {
    pub mean: [f64; NUMERIC_COLUMNS],
    pub scale: [f64; NUMERIC_COLUMNS],
}

/// Turns a prediction row into the numeric vector a regressor was fitted on.
///
/// Layout follows `Column::ALL`: each categorical column expands into a
/// one-hot block over its vocabulary, each numeric column is passed through
/// (optionally standardized). Categories are matched exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    pub crops: Vec<String>,
    pub seasons: Vec<String>,
    pub states: Vec<String>,
    #[serde(default)]
    pub scaling: Option<NumericScaling>,
}

impl FeatureEncoder {
    pub fn feature_len(&self) -> usize {
        self.crops.len() + self.seasons.len() + self.states.len() + NUMERIC_COLUMNS
    }

    pub fn vocabulary(&self, column: Column) -> Option<&[String]> {
        match column {
            Column::Crop => Some(&self.crops),
            Column::Season => Some(&self.seasons),
            Column::State => Some(&self.states),
            _ => None,
        }
    }

    pub fn encode(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        let mut features = Vec::with_capacity(self.feature_len());
        let mut numeric_idx = 0;

        for (column, value) in request.row() {
            match value {
                FeatureValue::Category(category) => {
                    let vocabulary = self.vocabulary(column).unwrap_or_default();
                    let hot = vocabulary
                        .iter()
                        .position(|known| known == category)
                        .ok_or_else(|| PredictionError::UnknownCategory {
                            column,
                            value: category.to_string(),
                        })?;
                    features
                        .extend((0..vocabulary.len()).map(|i| if i == hot { 1.0 } else { 0.0 }));
                }
                numeric => {
                    let raw = numeric.as_f64().unwrap_or(f64::NAN);
                    if !raw.is_finite() {
                        return Err(PredictionError::NonFiniteFeature { column });
                    }
                    let scaled = match &self.scaling {
                        Some(s) if s.scale[numeric_idx] != 0.0 => {
                            (raw - s.mean[numeric_idx]) / s.scale[numeric_idx]
                        }
                        Some(s) => raw - s.mean[numeric_idx],
                        None => raw,
                    };
                    features.push(scaled);
                    numeric_idx += 1;
                }
            }
        }

        Ok(features)
    }

    /// f32 variant for ONNX inference.
    pub fn encode_f32(&self, request: &PredictionRequest) -> Result<Vec<f32>, PredictionError> {
        Ok(self.encode(request)?.into_iter().map(|v| v as f32).collect())
    }
}
