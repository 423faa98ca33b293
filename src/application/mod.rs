// Windowless output (predict binary)
pub mod headless;

// Form input parsing
pub mod input_collector;

// Model backends and loading
pub mod ml;

pub mod prediction_service;
