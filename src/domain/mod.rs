// Domain-specific error types
pub mod errors;

// Feature encoding shared by every model backend
pub mod ml;

// Inputs and outputs of a prediction
pub mod request;
pub mod result;
