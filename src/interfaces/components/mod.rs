pub mod card;
pub mod input_form;
pub mod log_panel;
pub mod notice_dialog;
pub mod trend_chart;
