//! Crop Yield Predictor - single prediction window
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact, `.json` or `.onnx` (default: knn_crop_yield_model.json)
//! - `CHOICES_PATH` - Dropdown choice lists (default: config/choices.toml)
//! - `RUST_LOG` - Log filter (default: info)

use crop_yield::interfaces::ui::{FrontEnd, launch};

fn main() -> anyhow::Result<()> {
    launch(FrontEnd::Point)
}
