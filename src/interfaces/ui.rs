use crate::application::ml::load_model;
use crate::application::prediction_service::PredictionService;
use crate::config::Config;
use crate::domain::result::PredictionMode;
use crate::infrastructure::logging;
use crate::interfaces::components::log_panel::LogPanel;
use crate::interfaces::dashboard::DashboardApp;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::predictor_app::PredictorApp;
use crate::interfaces::startup_error::StartupErrorApp;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use anyhow::Context;
use eframe::egui;
use tracing::{error, info};

const LOG_CHANNEL_CAPACITY: usize = 1024;
const LOG_PANEL_LINES: usize = 200;

/// Which desktop window to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    /// Single prediction, result in a dialog.
    Point,
    /// 10-year trend chart next to the inputs.
    Dashboard,
}

impl FrontEnd {
    fn window_size(&self) -> [f32; 2] {
        match self {
            FrontEnd::Point => [500.0, 650.0],
            FrontEnd::Dashboard => [800.0, 650.0],
        }
    }

    fn mode(&self) -> PredictionMode {
        match self {
            FrontEnd::Point => PredictionMode::Point,
            FrontEnd::Dashboard => PredictionMode::Trend,
        }
    }
}

const TITLE: &str = "Crop Yield Predictor";

fn run_window(size: [f32; 2], app: Box<dyn eframe::App>) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_resizable(false)
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))
}

/// Load configuration, choices and model, then run the requested window.
///
/// A startup failure is shown in an error window and returned, so the
/// process exits non-zero without ever calling the model.
pub fn launch(front_end: FrontEnd) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let log_rx = logging::init_with_ui_channel(&config.log_filter, LOG_CHANNEL_CAPACITY);
    info!("Initializing {}...", TITLE);

    let startup = config.load_choices().and_then(|choices| {
        let model = load_model(&config.model_path)
            .with_context(|| "An error occurred while loading the model")?;
        Ok((choices, model))
    });

    let (choices, model) = match startup {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            run_window(
                [460.0, 220.0],
                Box::new(StartupErrorApp::new(format!("{:#}", e))),
            )?;
            return Err(e);
        }
    };

    let vm = PredictionViewModel::new(PredictionService::new(model), choices, front_end.mode());
    let app: Box<dyn eframe::App> = match front_end {
        FrontEnd::Point => Box::new(PredictorApp::new(vm)),
        FrontEnd::Dashboard => Box::new(DashboardApp::new(
            vm,
            LogPanel::new(log_rx, LOG_PANEL_LINES),
        )),
    };

    info!("Launching {:?} window", front_end);
    run_window(front_end.window_size(), app)
}
