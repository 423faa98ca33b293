use crate::domain::request::PredictionRequest;
use serde::Serialize;

/// Number of consecutive years covered by a trend prediction.
pub const TREND_YEARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    Point,
    Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub predicted_yield: f64,
}

/// Yearly predictions in ascending year order, starting at the queried year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldTrend {
    points: Vec<TrendPoint>,
}

impl YieldTrend {
    pub fn new(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    /// The queried year's prediction.
    pub fn anchor(&self) -> Option<TrendPoint> {
        self.points.first().copied()
    }

    pub fn min_yield(&self) -> Option<f64> {
        self.points.iter().map(|p| p.predicted_yield).reduce(f64::min)
    }

    pub fn max_yield(&self) -> Option<f64> {
        self.points.iter().map(|p| p.predicted_yield).reduce(f64::max)
    }

    /// Vertical offset of the anchor annotation: a tenth of the yield range.
    pub fn annotation_offset(&self) -> f64 {
        match (self.min_yield(), self.max_yield()) {
            (Some(min), Some(max)) => 0.1 * (max - min),
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PredictionResult {
    Point(f64),
    Trend(YieldTrend),
}

impl PredictionResult {
    /// Prediction for the queried year, in either mode.
    pub fn headline(&self) -> Option<f64> {
        match self {
            PredictionResult::Point(value) => Some(*value),
            PredictionResult::Trend(trend) => trend.anchor().map(|p| p.predicted_yield),
        }
    }
}

/// A completed prediction together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub request: PredictionRequest,
    pub result: PredictionResult,
}
