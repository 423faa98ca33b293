//! Windowless prediction output: single values, trends and CSV batches.

use crate::application::input_collector::RawInputs;
use crate::application::prediction_service::PredictionService;
use crate::domain::request::Column;
use crate::domain::result::{PredictionMode, PredictionResult};
use anyhow::{Context, Result, bail};
use std::io::{Read, Write};
use tracing::{info, warn};

pub const PREDICTION_HEADER: &str = "Predicted_Yield";

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub predicted: usize,
    pub failed: usize,
}

/// Point values as a single line, trends as ten `year,yield` lines.
pub fn write_result<W: Write>(result: &PredictionResult, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    match result {
        PredictionResult::Point(value) => writer.write_record([format!("{:.4}", value)])?,
        PredictionResult::Trend(trend) => {
            for point in trend.points() {
                writer.write_record([
                    point.year.to_string(),
                    format!("{:.4}", point.predicted_yield),
                ])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Predict every row of `input` and echo it to `out` with a trailing prediction.
///
/// Rows that cannot be predicted, short rows included, are written back with
/// an empty prediction cell. Only a header missing one of the seven columns
/// aborts the batch.
pub fn run_batch<R: Read, W: Write>(
    service: &PredictionService,
    input: R,
    out: W,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader
        .headers()
        .context("Failed to read batch header")?
        .clone();

    let mut positions = [0usize; 7];
    for (slot, column) in positions.iter_mut().zip(Column::ALL) {
        match headers.iter().position(|h| h.trim() == column.name()) {
            Some(idx) => *slot = idx,
            None => bail!("Batch header is missing the {} column", column),
        }
    }

    let mut writer = csv::Writer::from_writer(out);
    let mut header: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
    header.push(PREDICTION_HEADER);
    writer.write_record(&header)?;

    let mut summary = BatchSummary::default();
    for (idx, row) in reader.byte_records().enumerate() {
        let line = idx + 2; // header is line 1
        let record = row.with_context(|| format!("Failed to read batch line {}", line))?;
        let cell = |pos: usize| {
            record
                .get(pos)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        };
        let inputs = RawInputs {
            crop: cell(positions[0]),
            crop_year: cell(positions[1]),
            season: cell(positions[2]),
            state: cell(positions[3]),
            annual_rainfall: cell(positions[4]),
            fertilizer: cell(positions[5]),
            pesticide: cell(positions[6]),
        };

        let prediction = match service.submit(&inputs, PredictionMode::Point) {
            Ok(report) => {
                summary.predicted += 1;
                report
                    .result
                    .headline()
                    .map(|v| format!("{:.4}", v))
                    .unwrap_or_default()
            }
            Err(e) => {
                warn!("Line {}: {}", line, e);
                summary.failed += 1;
                String::new()
            }
        };

        writer.write_record([
            inputs.crop.as_str(),
            inputs.crop_year.as_str(),
            inputs.season.as_str(),
            inputs.state.as_str(),
            inputs.annual_rainfall.as_str(),
            inputs.fertilizer.as_str(),
            inputs.pesticide.as_str(),
            prediction.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(
        "Batch finished: {} predicted, {} failed",
        summary.predicted, summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::{TrendPoint, YieldTrend};
    use crate::infrastructure::mock::MockYieldModel;
    use std::sync::Arc;

    fn service() -> (PredictionService, Arc<MockYieldModel>) {
        let model = Arc::new(MockYieldModel::new(1.0, 0.1));
        (PredictionService::new(model.clone()), model)
    }

    fn batch(input: &str) -> (Result<BatchSummary>, Vec<String>, usize) {
        let (service, model) = service();
        let mut out = Vec::new();
        let summary = run_batch(&service, input.as_bytes(), &mut out);
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (summary, lines, model.call_count())
    }

    #[test]
    fn test_point_is_one_line() {
        let mut out = Vec::new();
        write_result(&PredictionResult::Point(3.0), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3.0000\n");
    }

    #[test]
    fn test_trend_is_ten_lines_without_header() {
        let points = (2020..2030)
            .map(|year| TrendPoint {
                year,
                predicted_yield: 1.0,
            })
            .collect();
        let mut out = Vec::new();
        write_result(&PredictionResult::Trend(YieldTrend::new(points)), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "2020,1.0000");
        assert_eq!(lines[9], "2029,1.0000");
    }

    #[test]
    fn test_batch_echoes_every_row() {
        let input = "\
Crop,Crop_Year,Season,State,Annual_Rainfall,Fertilizer,Pesticide
Rice,2020,Kharif,Karnataka,1200,50,10
Rice,abc,Kharif,Karnataka,1200,50,10
Rice,2001,Kharif
Wheat,2000,Rabi,Punjab,600,40,5
";
        let (summary, lines, calls) = batch(input);

        assert_eq!(
            summary.unwrap(),
            BatchSummary {
                predicted: 2,
                failed: 2
            }
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Crop,Crop_Year,Season,State,Annual_Rainfall,Fertilizer,Pesticide,Predicted_Yield"
        );
        assert_eq!(lines[1], "Rice,2020,Kharif,Karnataka,1200,50,10,3.0000");
        assert_eq!(lines[2], "Rice,abc,Kharif,Karnataka,1200,50,10,");
        assert_eq!(lines[3], "Rice,2001,Kharif,,,,,");
        assert_eq!(lines[4], "Wheat,2000,Rabi,Punjab,600,40,5,1.0000");
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_batch_columns_follow_header_names() {
        let input = "\
State,Pesticide,Crop,Season,Crop_Year,Fertilizer,Annual_Rainfall
Karnataka,10,Rice,Kharif,2010,50,1200
";
        let (summary, lines, _) = batch(input);
        assert_eq!(summary.unwrap().predicted, 1);
        assert_eq!(lines[1], "Rice,2010,Kharif,Karnataka,1200,50,10,2.0000");
    }

    #[test]
    fn test_batch_header_without_required_column_fails() {
        let input = "\
Crop,Crop_Year,Season,State,Annual_Rainfall,Fertilizer
Rice,2020,Kharif,Karnataka,1200,50
";
        let (summary, lines, calls) = batch(input);
        let err = summary.unwrap_err();
        assert!(err.to_string().contains("Pesticide"));
        assert!(lines.is_empty());
        assert_eq!(calls, 0);
    }
}
