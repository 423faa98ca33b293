//! Headless crop yield prediction.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --crop Rice --year 2020 --season Kharif \
//!     --state Karnataka --rainfall 1200 --fertilizer 50 --pesticide 10 --trend
//! cargo run --bin predict -- --batch requests.csv > predictions.csv
//! ```
//!
//! Logs go to stderr; results go to stdout. A point prediction is one value,
//! a trend is ten `year,yield` lines, a batch is the input echoed as CSV with
//! a trailing `Predicted_Yield` column (empty where the row failed).

use anyhow::{Context, Result};
use clap::Parser;
use crop_yield::application::headless;
use crop_yield::application::input_collector::RawInputs;
use crop_yield::application::ml::load_model;
use crop_yield::application::prediction_service::PredictionService;
use crop_yield::config::Config;
use crop_yield::domain::result::PredictionMode;
use crop_yield::infrastructure::logging;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model artifact (.json or .onnx). Overrides MODEL_PATH.
    #[arg(long)]
    model: Option<PathBuf>,

    /// CSV file with one request per row, headed by the seven column names
    #[arg(long)]
    batch: Option<PathBuf>,

    #[arg(long)]
    crop: Option<String>,

    /// Crop year (whole number)
    #[arg(long, allow_hyphen_values = true)]
    year: Option<String>,

    #[arg(long)]
    season: Option<String>,

    #[arg(long)]
    state: Option<String>,

    /// Annual rainfall in mm
    #[arg(long, allow_hyphen_values = true)]
    rainfall: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    fertilizer: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pesticide: Option<String>,

    /// Predict the given year and the nine following ones
    #[arg(long, conflicts_with = "batch")]
    trend: bool,
}

impl Args {
    fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            crop: self.crop.clone().unwrap_or_default(),
            crop_year: self.year.clone().unwrap_or_default(),
            season: self.season.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            annual_rainfall: self.rainfall.clone().unwrap_or_default(),
            fertilizer: self.fertilizer.clone().unwrap_or_default(),
            pesticide: self.pesticide.clone().unwrap_or_default(),
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(model) = &args.model {
        config.model_path = model.clone();
    }
    logging::init_console(&config.log_filter);

    let model = load_model(&config.model_path)
        .context("An error occurred while loading the model")?;
    let service = PredictionService::new(model);

    match &args.batch {
        Some(path) => run_batch(&service, path),
        None => run_single(&service, &args),
    }
}

fn run_single(service: &PredictionService, args: &Args) -> Result<()> {
    let mode = if args.trend {
        PredictionMode::Trend
    } else {
        PredictionMode::Point
    };

    let report = service
        .submit(&args.raw_inputs(), mode)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.title(), e))?;

    headless::write_result(&report.result, io::stdout().lock())
}

fn run_batch(service: &PredictionService, path: &Path) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open batch file: {}", path.display()))?;
    headless::run_batch(service, file, io::stdout().lock())?;
    Ok(())
}
