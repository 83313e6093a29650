//! Shared test fixtures for integration tests.

use vessel_sim::config::ScenarioConfig;
use vessel_sim::sim::engine::Engine;
use vessel_sim::sim::types::BLOCKS;

/// Default engine built from the baseline scenario.
pub fn baseline_engine() -> Engine {
    Engine::from_scenario(&ScenarioConfig::baseline())
}

/// Scenario with every device off, zero loads, and no solar input.
pub fn idle_config() -> ScenarioConfig {
    let mut cfg = ScenarioConfig::baseline();
    cfg.motor1.on = false;
    cfg.motor2.on = false;
    cfg.dg1.on = false;
    cfg.dg2.on = false;
    cfg.solar.area_m2 = 0.0;
    cfg.loads.hotel_kw = [0.0; BLOCKS];
    cfg.loads.aux_kw = [0.0; BLOCKS];
    cfg.loads.prop_kw = [0.0; BLOCKS];
    cfg
}

/// Scenario where grid plus battery capacity exceed demand in every hour:
/// all devices scheduled in every block.
pub fn ample_config() -> ScenarioConfig {
    ScenarioConfig::crossing()
}
