//! Crop Yield Dashboard - predicts the entered year and plots the next ten.
//!
//! Reads the same environment variables as the `crop_yield` window.

use crop_yield::interfaces::ui::{FrontEnd, launch};

fn main() -> anyhow::Result<()> {
    launch(FrontEnd::Dashboard)
}
