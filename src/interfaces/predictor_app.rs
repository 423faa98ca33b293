use crate::interfaces::components::input_form::render_input_form;
use crate::interfaces::components::notice_dialog::render_notice;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;

/// Single-column window: inputs, button, result label and a result dialog.
pub struct PredictorApp {
    vm: PredictionViewModel,
}

impl PredictorApp {
    pub fn new(vm: PredictionViewModel) -> Self {
        Self { vm }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                // Inputs are locked while a dialog is open
                let enabled = self.vm.notice.is_none();
                ui.add_enabled_ui(enabled, |ui| {
                    if render_input_form(&mut self.vm, ui) {
                        self.vm.submit();
                    }
                });
            });

        if let Some(notice) = &self.vm.notice
            && render_notice(ctx, notice)
        {
            self.vm.dismiss_notice();
        }
    }
}
