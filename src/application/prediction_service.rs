use crate::application::input_collector::RawInputs;
use crate::application::ml::predictor::YieldModel;
use crate::domain::errors::{ModelUnavailableError, ValidationError, YieldError};
use crate::domain::request::PredictionRequest;
use crate::domain::result::{
    PredictionMode, PredictionReport, PredictionResult, TREND_YEARS, TrendPoint, YieldTrend,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Invokes the loaded model for point and trend predictions.
///
/// Stateless apart from the read-only model handle.
#[derive(Clone)]
pub struct PredictionService {
    model: Option<Arc<dyn YieldModel>>,
    unavailable_reason: String,
}

impl PredictionService {
    pub fn new(model: Arc<dyn YieldModel>) -> Self {
        Self {
            model: Some(model),
            unavailable_reason: String::new(),
        }
    }

    /// A service whose model never loaded. Every call fails with `NotLoaded`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            model: None,
            unavailable_reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> Result<&Arc<dyn YieldModel>, ModelUnavailableError> {
        self.model
            .as_ref()
            .ok_or_else(|| ModelUnavailableError::NotLoaded {
                reason: self.unavailable_reason.clone(),
            })
    }

    pub fn predict_point(&self, request: &PredictionRequest) -> Result<f64, YieldError> {
        let model = self.model()?;
        Ok(model.predict(request)?)
    }

    /// One call per year `Y..=Y+9`, ascending, all other fields unchanged.
    pub fn predict_trend(&self, request: &PredictionRequest) -> Result<YieldTrend, YieldError> {
        let model = self.model()?;
        let years = trend_years(request.crop_year)?;

        let mut points = Vec::with_capacity(TREND_YEARS);
        for year in years {
            let predicted_yield = model.predict(&request.with_year(year))?;
            debug!(year, predicted_yield, "trend point");
            points.push(TrendPoint {
                year,
                predicted_yield,
            });
        }
        Ok(YieldTrend::new(points))
    }

    pub fn predict(
        &self,
        request: &PredictionRequest,
        mode: PredictionMode,
    ) -> Result<PredictionResult, YieldError> {
        match mode {
            PredictionMode::Point => self.predict_point(request).map(PredictionResult::Point),
            PredictionMode::Trend => self.predict_trend(request).map(PredictionResult::Trend),
        }
    }

    /// Collect, validate and predict for one user action.
    ///
    /// Failures are logged here and handed back for display; none are fatal.
    pub fn submit(
        &self,
        inputs: &RawInputs,
        mode: PredictionMode,
    ) -> Result<PredictionReport, YieldError> {
        let outcome = inputs
            .collect()
            .map_err(YieldError::from)
            .and_then(|request| {
                let result = self.predict(&request, mode)?;
                Ok(PredictionReport { request, result })
            });

        match &outcome {
            Ok(report) => info!(
                crop = %report.request.crop,
                year = report.request.crop_year,
                state = %report.request.state,
                "Predicted crop yield: {:.2}",
                report.result.headline().unwrap_or(f64::NAN)
            ),
            Err(YieldError::Validation(e)) => warn!("Rejected input: {}", e),
            Err(YieldError::Prediction(e)) => error!("Prediction failed: {:?}", e),
            Err(YieldError::ModelUnavailable(e)) => error!("Model unavailable: {}", e),
        }

        outcome
    }
}

fn trend_years(start: i32) -> Result<std::ops::RangeInclusive<i32>, ValidationError> {
    let end = start
        .checked_add(TREND_YEARS as i32 - 1)
        .ok_or(ValidationError::YearOverflow {
            year: start,
            span: TREND_YEARS,
        })?;
    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_years_span_ten() {
        let years: Vec<i32> = trend_years(2020).unwrap().collect();
        assert_eq!(years.len(), TREND_YEARS);
        assert_eq!(years.first(), Some(&2020));
        assert_eq!(years.last(), Some(&2029));
    }

    #[test]
    fn test_trend_years_overflow() {
        assert!(trend_years(i32::MAX - 9).is_ok());
        assert_eq!(
            trend_years(i32::MAX - 8),
            Err(ValidationError::YearOverflow {
                year: i32::MAX - 8,
                span: TREND_YEARS
            })
        );
    }

    #[test]
    fn test_unavailable_service_reports_reason() {
        let service = PredictionService::unavailable("file missing");
        assert!(!service.is_available());
        let request = PredictionRequest {
            crop: "Rice".to_string(),
            crop_year: 2020,
            season: "Kharif".to_string(),
            state: "Karnataka".to_string(),
            annual_rainfall: 1200.0,
            fertilizer: 50.0,
            pesticide: 10.0,
        };
        match service.predict_point(&request) {
            Err(YieldError::ModelUnavailable(e)) => assert!(e.to_string().contains("file missing")),
            other => panic!("expected unavailable model, got {:?}", other.map(|_| ())),
        }
    }
}
