pub mod errors;
pub mod telemetry;
