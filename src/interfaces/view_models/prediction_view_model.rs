use crate::application::input_collector::RawInputs;
use crate::application::prediction_service::PredictionService;
use crate::config::ChoiceLists;
use crate::domain::result::{PredictionMode, PredictionReport, PredictionResult, YieldTrend};

pub const IDLE_RESULT_TEXT: &str = "Predicted Crop Yield: --";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message waiting to be acknowledged by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Form state and last outcome shared by both front-ends.
pub struct PredictionViewModel {
    service: PredictionService,
    pub choices: ChoiceLists,
    pub inputs: RawInputs,
    pub mode: PredictionMode,
    pub result_text: String,
    pub last_report: Option<PredictionReport>,
    pub notice: Option<Notice>,
}

impl PredictionViewModel {
    pub fn new(service: PredictionService, choices: ChoiceLists, mode: PredictionMode) -> Self {
        // Dropdowns start on the first configured entry
        let inputs = RawInputs {
            crop: choices.crops.first().cloned().unwrap_or_default(),
            season: choices.seasons.first().cloned().unwrap_or_default(),
            state: choices.states.first().cloned().unwrap_or_default(),
            ..RawInputs::default()
        };

        Self {
            service,
            choices,
            inputs,
            mode,
            result_text: IDLE_RESULT_TEXT.to_string(),
            last_report: None,
            notice: None,
        }
    }

    /// Handle a "Predict Yield" press.
    pub fn submit(&mut self) {
        match self.service.submit(&self.inputs, self.mode) {
            Ok(report) => {
                self.result_text = match (&report.result, report.result.headline()) {
                    (PredictionResult::Trend(_), Some(value)) => format!(
                        "Predicted Crop Yield for {}: {:.2}",
                        report.request.crop_year, value
                    ),
                    (_, Some(value)) => format!("Predicted Crop Yield: {:.2}", value),
                    (_, None) => IDLE_RESULT_TEXT.to_string(),
                };
                if let PredictionResult::Point(value) = report.result {
                    self.notice = Some(Notice {
                        kind: NoticeKind::Info,
                        title: "Prediction Result".to_string(),
                        message: format!("The predicted crop yield is: {:.2}", value),
                    });
                }
                self.last_report = Some(report);
            }
            Err(e) => {
                // The previous chart stays visible; only the label resets
                self.result_text = IDLE_RESULT_TEXT.to_string();
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    title: e.title().to_string(),
                    message: e.user_message(),
                });
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn trend(&self) -> Option<&YieldTrend> {
        match self.last_report.as_ref().map(|r| &r.result) {
            Some(PredictionResult::Trend(trend)) => Some(trend),
            _ => None,
        }
    }

    /// Chart title for the last trend, e.g. "Yield Trend for Rice in Karnataka".
    pub fn trend_title(&self) -> Option<String> {
        self.trend()?;
        self.last_report.as_ref().map(|r| {
            format!(
                "Yield Trend for {} in {}",
                r.request.crop, r.request.state
            )
        })
    }
}
