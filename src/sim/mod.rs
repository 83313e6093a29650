pub mod engine;
/// Diurnal irradiance schedule generation.
pub mod irradiance;
pub mod kpi;
/// Pure allocation helpers for the hourly balance step.
pub mod step;
pub mod types;
