use crate::interfaces::components::card::Card;
use crate::interfaces::components::input_form::render_input_form;
use crate::interfaces::components::log_panel::LogPanel;
use crate::interfaces::components::notice_dialog::render_notice;
use crate::interfaces::components::trend_chart::{render_chart_placeholder, render_trend_chart};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;

/// Two-column window: inputs on the left, the 10-year trend chart on the right.
pub struct DashboardApp {
    vm: PredictionViewModel,
    log_panel: LogPanel,
}

impl DashboardApp {
    pub fn new(vm: PredictionViewModel, log_panel: LogPanel) -> Self {
        Self { vm, log_panel }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = self.vm.notice.is_none();

        // --- 1. Diagnostics (bottom) ---
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.log_panel.show(ui);
            });

        // --- 2. Inputs (left) ---
        egui::SidePanel::left("input_panel")
            .exact_width(280.0)
            .resizable(false)
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                Card::new().title("Crop Details").show(ui, |ui| {
                    ui.add_enabled_ui(enabled, |ui| {
                        if render_input_form(&mut self.vm, ui) {
                            self.vm.submit();
                        }
                    });
                });
            });

        // --- 3. Trend chart (right) ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                Card::new()
                    .min_height(ui.available_height() - 2.0 * DesignSystem::SPACING_MEDIUM)
                    .show(ui, |ui| match (self.vm.trend(), self.vm.trend_title()) {
                        (Some(trend), Some(title)) => render_trend_chart(ui, &title, trend),
                        _ => render_chart_placeholder(ui),
                    });
            });

        if let Some(notice) = &self.vm.notice
            && render_notice(ctx, notice)
        {
            self.vm.dismiss_notice();
        }

        // Keep the diagnostics panel flowing without user input
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
