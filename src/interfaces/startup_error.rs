use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Shown instead of the predictor when the model or configuration failed to load.
pub struct StartupErrorApp {
    message: String,
}

impl StartupErrorApp {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl eframe::App for StartupErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Error")
                        .size(18.0)
                        .strong()
                        .color(DesignSystem::DANGER),
                );
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.label(self.message.as_str());
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new(
                        "Make sure the model file and choices file exist, or set MODEL_PATH / CHOICES_PATH.",
                    )
                    .small()
                    .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.add_space(DesignSystem::SPACING_LARGE);
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }
}
