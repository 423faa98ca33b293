use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{Notice, NoticeKind};
use eframe::egui;

/// Centered message box. Returns true once the user dismissed it.
pub fn render_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;
    let accent = match notice.kind {
        NoticeKind::Info => DesignSystem::SUCCESS,
        NoticeKind::Error => DesignSystem::DANGER,
    };

    egui::Window::new(
        egui::RichText::new(&notice.title)
            .strong()
            .color(accent),
    )
    .id(egui::Id::new("notice_dialog"))
    .collapsible(false)
    .resizable(false)
    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    .show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(notice.message.as_str());
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                dismissed = true;
            }
        });
    });

    dismissed
}
