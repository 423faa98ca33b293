use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;

/// Renders the seven inputs, the predict button and the result label.
///
/// Returns true when the user asked for a prediction (button or Enter).
pub fn render_input_form(vm: &mut PredictionViewModel, ui: &mut egui::Ui) -> bool {
    let width = ui.available_width();
    let mut submitted = false;

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    choice_field(ui, "Crop Type:", "crop", &vm.choices.crops, &mut vm.inputs.crop, width);
    submitted |= text_field(ui, "Crop Year:", &mut vm.inputs.crop_year, width);
    choice_field(ui, "Season:", "season", &vm.choices.seasons, &mut vm.inputs.season, width);
    choice_field(ui, "State:", "state", &vm.choices.states, &mut vm.inputs.state, width);
    submitted |= text_field(
        ui,
        "Annual Rainfall (mm):",
        &mut vm.inputs.annual_rainfall,
        width,
    );
    submitted |= text_field(ui, "Fertilizer usage:", &mut vm.inputs.fertilizer, width);
    submitted |= text_field(ui, "Pesticide usage:", &mut vm.inputs.pesticide, width);

    ui.add_space(DesignSystem::SPACING_LARGE);
    if ui
        .add_sized([width, 32.0], egui::Button::new("Predict Yield"))
        .clicked()
    {
        submitted = true;
    }
    ui.add_space(DesignSystem::SPACING_LARGE);

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(&vm.result_text)
                .size(DesignSystem::RESULT_TEXT_SIZE)
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });

    submitted
}

fn choice_field(
    ui: &mut egui::Ui,
    label: &str,
    id: &str,
    choices: &[String],
    selected: &mut String,
    width: f32,
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .width(width)
        .height(300.0)
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for choice in choices {
                ui.selectable_value(selected, choice.clone(), choice.as_str());
            }
        });
    ui.add_space(DesignSystem::SPACING_MEDIUM);
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, width: f32) -> bool {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(value).desired_width(width));
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
