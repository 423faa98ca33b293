use crate::domain::result::YieldTrend;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

/// Year vs predicted yield, with the queried year highlighted and annotated.
pub fn render_trend_chart(ui: &mut egui::Ui, title: &str, trend: &YieldTrend) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(DesignSystem::RESULT_TEXT_SIZE)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
    ui.add_space(DesignSystem::SPACING_SMALL);

    let line_points: Vec<[f64; 2]> = trend
        .points()
        .iter()
        .map(|p| [f64::from(p.year), p.predicted_yield])
        .collect();
    let anchor = trend.anchor();
    let offset = trend.annotation_offset();

    Plot::new("yield_trend_plot")
        .height(ui.available_height())
        .show_grid([true, true])
        .show_axes([true, true])
        .x_axis_label("Year")
        .y_axis_label("Predicted Yield")
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Predicted yield", PlotPoints::from(line_points.clone()))
                    .color(DesignSystem::CHART_LINE)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new("Yearly prediction", PlotPoints::from(line_points))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0)
                    .color(DesignSystem::CHART_LINE),
            );

            if let Some(anchor) = anchor {
                let x = f64::from(anchor.year);
                let y = anchor.predicted_yield;
                plot_ui.points(
                    Points::new("Queried year", vec![[x, y]])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(7.0)
                        .color(DesignSystem::CHART_HIGHLIGHT),
                );
                plot_ui.text(
                    Text::new(
                        "Queried yield",
                        PlotPoint::new(x, y + offset),
                        egui::RichText::new(format!("{:.2}", y))
                            .color(DesignSystem::TEXT_PRIMARY)
                            .background_color(egui::Color32::from_black_alpha(128)),
                    )
                    .anchor(egui::Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// Shown in the chart area before the first prediction.
pub fn render_chart_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Yield trend will appear here")
                .size(DesignSystem::RESULT_TEXT_SIZE)
                .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}
