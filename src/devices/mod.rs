//! Device models for the vessel power plant.

/// Battery buffer, the only stateful device.
pub mod battery;
/// Diesel generator model.
pub mod generator;
pub mod ids;
/// Main propulsion motor model.
pub mod motor;
/// Solar array model.
pub mod solar;

// Re-export the main types for convenience
pub use battery::Battery;
pub use generator::DieselGenerator;
pub use ids::DeviceId;
pub use motor::PropulsionMotor;
pub use solar::SolarArray;
