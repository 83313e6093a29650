//! Hour-by-hour energy balance simulator for a hybrid vessel power plant.
//!
//! Two propulsion motors (mechanical drive plus electrical grid feed), two
//! diesel generators, a solar array, and a battery buffer are balanced over
//! a fixed 48-hour horizon divided into twelve 4-hour operating blocks.

/// TOML-based scenario configuration and preset definitions.
pub mod config;
pub mod devices;
/// CSV export of hour records.
pub mod io;
/// Irradiance schedule, balance step, engine, and KPI modules.
pub mod sim;
