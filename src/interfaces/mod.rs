pub mod components;
pub mod dashboard;
pub mod design_system;
pub mod predictor_app;
pub mod startup_error;
pub mod ui;
pub mod view_models;
