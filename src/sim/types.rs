//! Core simulation types: horizon constants, profiles, and hour records.

use std::fmt;

use crate::devices::DeviceId;

/// Fixed simulation horizon in hours.
pub const HORIZON_HOURS: usize = 48;

/// Number of 4-hour operating blocks spanning the horizon.
pub const BLOCKS: usize = 12;

/// Hours per operating block.
pub const BLOCK_HOURS: usize = 4;

/// Returns the operating block (0..12) containing the given hour.
pub fn block_of(hour: usize) -> usize {
    hour / BLOCK_HOURS
}

/// Conversion efficiencies of the power routing paths, immutable per run.
#[derive(Debug, Clone)]
pub struct PathEfficiency {
    /// Motor to own propeller shaft (direct mechanical).
    pub motor_direct: f32,
    /// Motor onto the electrical grid.
    pub motor_grid: f32,
    /// Motor to the other shaft via the grid (cross-feed).
    pub motor_cross: f32,
    /// Diesel generator onto the grid.
    pub dg_grid: f32,
    /// Grid to propeller shaft.
    pub grid_prop: f32,
}

impl Default for PathEfficiency {
    fn default() -> Self {
        Self {
            motor_direct: 1.0,
            motor_grid: 0.95,
            motor_cross: 0.9025,
            dg_grid: 0.95,
            grid_prop: 0.95,
        }
    }
}

/// Per-device schedule: an on/off flag and one availability fraction per block.
#[derive(Debug, Clone)]
pub struct DeviceUsage {
    /// Whether the device participates at all.
    pub on: bool,
    /// Fractional availability per 4-hour block (0.0 to 1.0).
    pub blocks: [f32; BLOCKS],
}

impl DeviceUsage {
    /// Creates a usage schedule from an on/off flag and block fractions.
    pub fn new(on: bool, blocks: [f32; BLOCKS]) -> Self {
        Self { on, blocks }
    }

    /// Available power for the given block: fraction times max power when
    /// the device is on, zero otherwise.
    pub fn available_kw(&self, block: usize, max_power_kw: f32) -> f32 {
        if self.on {
            self.blocks[block] * max_power_kw
        } else {
            0.0
        }
    }
}

/// Per-device usage schedules for the four fixed plant slots.
#[derive(Debug, Clone)]
pub struct UsageSet {
    pub motor1: DeviceUsage,
    pub motor2: DeviceUsage,
    pub dg1: DeviceUsage,
    pub dg2: DeviceUsage,
}

impl UsageSet {
    /// Returns the usage schedule for the given device slot.
    pub fn get(&self, id: DeviceId) -> &DeviceUsage {
        match id {
            DeviceId::Motor1 => &self.motor1,
            DeviceId::Motor2 => &self.motor2,
            DeviceId::Dg1 => &self.dg1,
            DeviceId::Dg2 => &self.dg2,
        }
    }
}

/// Fuel conversion rates in kWh per liter, one per device slot.
#[derive(Debug, Clone)]
pub struct FuelRates {
    pub motor1: f32,
    pub motor2: f32,
    pub dg1: f32,
    pub dg2: f32,
}

impl FuelRates {
    /// Returns the fuel rate for the given device slot.
    pub fn get(&self, id: DeviceId) -> f32 {
        match id {
            DeviceId::Motor1 => self.motor1,
            DeviceId::Motor2 => self.motor2,
            DeviceId::Dg1 => self.dg1,
            DeviceId::Dg2 => self.dg2,
        }
    }
}

/// Per-category electrical loads, one value per 4-hour block (kW).
#[derive(Debug, Clone)]
pub struct LoadProfile {
    /// Hotel (accommodation) load per block.
    pub hotel_kw: [f32; BLOCKS],
    /// Auxiliary systems load per block.
    pub aux_kw: [f32; BLOCKS],
    /// Propulsion load per block, split 50/50 across the two shafts.
    pub prop_kw: [f32; BLOCKS],
}

/// Realized fuel and grid output of one device slot for one hour.
#[derive(Debug, Clone, Copy)]
pub struct DeviceOutput {
    /// Device slot this output belongs to.
    pub id: DeviceId,
    /// Fuel burned this hour in liters.
    pub fuel_l: f32,
    /// Grid output this hour in kW (after conversion losses).
    pub grid_out_kw: f32,
}

/// Complete record of one simulated hour.
#[derive(Debug, Clone)]
pub struct HourRecord {
    /// Hour index (0..48).
    pub hour: usize,
    /// Solar array output (kW).
    pub solar_kw: f32,
    /// Hotel load not covered by solar (kW).
    pub hotel_left_kw: f32,
    /// Auxiliary load not covered by solar (kW).
    pub aux_left_kw: f32,
    /// Propulsion load not covered by solar (kW).
    pub prop_left_kw: f32,
    /// Mechanical power delivered to shaft 1 (kW).
    pub prop1_supplied_kw: f32,
    /// Mechanical power delivered to shaft 2 (kW).
    pub prop2_supplied_kw: f32,
    /// Total fuel burned this hour across all devices (L).
    pub fuel_used_l: f32,
    /// Power delivered by the battery this hour (kW).
    pub batt_out_kw: f32,
    /// Surplus power absorbed by the battery this hour (kW).
    pub charged_kw: f32,
    /// Demand not satisfiable by solar, grid, or battery (kW).
    pub unmet_load_kw: f32,
    /// Surplus the battery could not absorb, curtailed (kW).
    pub excess_kw: f32,
    /// Battery SOC at the start of the hour (kWh).
    pub start_soc_kwh: f32,
    /// Battery SOC at the end of the hour (kWh).
    pub end_soc_kwh: f32,
    /// Per-device fuel and grid breakdown, in [`DeviceId::ALL`] order.
    pub devices: [DeviceOutput; 4],
}

impl fmt::Display for HourRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h={:>2} | solar={:>6.1} kW  prop1={:>6.1}  prop2={:>6.1} | \
             fuel={:>7.2} L | batt(out={:.1}, in={:.1}, SoC={:.1} kWh) | \
             unmet={:.1} kW  excess={:.1} kW",
            self.hour,
            self.solar_kw,
            self.prop1_supplied_kw,
            self.prop2_supplied_kw,
            self.fuel_used_l,
            self.batt_out_kw,
            self.charged_kw,
            self.end_soc_kwh,
            self.unmet_load_kw,
            self.excess_kw,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_of_maps_hours_to_twelve_blocks() {
        assert_eq!(block_of(0), 0);
        assert_eq!(block_of(3), 0);
        assert_eq!(block_of(4), 1);
        assert_eq!(block_of(47), 11);
    }

    #[test]
    fn default_path_efficiency_matches_plant_diagram() {
        let path = PathEfficiency::default();
        assert_eq!(path.motor_direct, 1.0);
        assert_eq!(path.motor_grid, 0.95);
        assert_eq!(path.motor_cross, 0.9025);
        assert_eq!(path.dg_grid, 0.95);
        assert_eq!(path.grid_prop, 0.95);
    }

    #[test]
    fn usage_available_kw_respects_flag_and_fraction() {
        let mut blocks = [0.0; BLOCKS];
        blocks[4] = 0.8;
        let usage = DeviceUsage::new(true, blocks);
        assert_eq!(usage.available_kw(4, 1000.0), 800.0);
        assert_eq!(usage.available_kw(0, 1000.0), 0.0);

        let off = DeviceUsage::new(false, blocks);
        assert_eq!(off.available_kw(4, 1000.0), 0.0);
    }

    #[test]
    fn hour_record_display_does_not_panic() {
        let r = HourRecord {
            hour: 7,
            solar_kw: 15.0,
            hotel_left_kw: 175.0,
            aux_left_kw: 30.0,
            prop_left_kw: 900.0,
            prop1_supplied_kw: 450.0,
            prop2_supplied_kw: 450.0,
            fuel_used_l: 240.5,
            batt_out_kw: 12.0,
            charged_kw: 0.0,
            unmet_load_kw: 0.0,
            excess_kw: 0.0,
            start_soc_kwh: 2500.0,
            end_soc_kwh: 2488.0,
            devices: [
                DeviceOutput {
                    id: DeviceId::Motor1,
                    fuel_l: 100.0,
                    grid_out_kw: 0.0,
                },
                DeviceOutput {
                    id: DeviceId::Motor2,
                    fuel_l: 100.0,
                    grid_out_kw: 0.0,
                },
                DeviceOutput {
                    id: DeviceId::Dg1,
                    fuel_l: 20.25,
                    grid_out_kw: 200.0,
                },
                DeviceOutput {
                    id: DeviceId::Dg2,
                    fuel_l: 20.25,
                    grid_out_kw: 200.0,
                },
            ],
        };
        let s = format!("{r}");
        assert!(!s.is_empty());
    }
}
