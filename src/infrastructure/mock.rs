use crate::application::ml::predictor::YieldModel;
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;
use std::sync::Mutex;

/// Deterministic model that records every request it receives.
///
/// Predicts `base + slope * (Crop_Year - 2000)`; requests for `fail_on_crop`
/// fail with an unknown-category error.
pub struct MockYieldModel {
    base: f64,
    slope: f64,
    fail_on_crop: Option<String>,
    calls: Mutex<Vec<PredictionRequest>>,
}

impl MockYieldModel {
    pub fn new(base: f64, slope: f64) -> Self {
        Self {
            base,
            slope,
            fail_on_crop: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, crop: &str) -> Self {
        self.fail_on_crop = Some(crop.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PredictionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MockYieldModel {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

impl YieldModel for MockYieldModel {
    fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        if self.fail_on_crop.as_deref() == Some(request.crop.as_str()) {
            return Err(PredictionError::UnknownCategory {
                column: crate::domain::request::Column::Crop,
                value: request.crop.clone(),
            });
        }

        Ok(self.base + self.slope * f64::from(request.crop_year - 2000))
    }

    fn name(&self) -> &str {
        "Mock"
    }

    fn version(&self) -> &str {
        "test"
    }
}
