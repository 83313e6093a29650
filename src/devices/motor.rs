/// A main propulsion motor with two independent output paths.
///
/// Each motor drives its own propeller shaft mechanically at the direct
/// efficiency and can additionally feed the electrical grid at the grid
/// efficiency, capped by `max_grid_kw`. Cross-feed to the other shaft is
/// routed via the grid and handled by the balance step, not here.
///
/// The motor is stateless; fuel use is computed from realized outputs.
#[derive(Debug, Clone)]
pub struct PropulsionMotor {
    /// Maximum shaft input power in kilowatts.
    pub max_power_kw: f32,

    /// Efficiency of the direct mechanical path to the own shaft (0..1.0).
    pub direct_eff: f32,

    /// Efficiency of the electrical path onto the grid (0..1.0).
    pub grid_eff: f32,

    /// Cap on grid output in kilowatts (after conversion losses).
    pub max_grid_kw: f32,
}

impl PropulsionMotor {
    /// Creates a new propulsion motor.
    ///
    /// # Panics
    ///
    /// Panics if `max_power_kw` or `max_grid_kw` is negative.
    pub fn new(max_power_kw: f32, direct_eff: f32, grid_eff: f32, max_grid_kw: f32) -> Self {
        assert!(max_power_kw >= 0.0);
        assert!(max_grid_kw >= 0.0);

        Self {
            max_power_kw,
            direct_eff,
            grid_eff,
            max_grid_kw,
        }
    }

    /// Fuel burned to realize the hour's mechanical and electrical outputs.
    ///
    /// The two paths are independent: mechanical output is backed out
    /// through the direct efficiency, electrical output through the grid
    /// efficiency, and both are divided by the fuel rate (kWh per liter).
    /// A rate <= 0 consumes no fuel; a degenerate (<= 0) efficiency zeroes
    /// that path's contribution.
    pub fn fuel_consumed(&self, mechanical_kw: f32, electrical_kw: f32, kwh_per_l: f32) -> f32 {
        if kwh_per_l <= 0.0 {
            return 0.0;
        }
        let mech_fuel = if self.direct_eff > 0.0 {
            mechanical_kw / self.direct_eff / kwh_per_l
        } else {
            0.0
        };
        let elec_fuel = if self.grid_eff > 0.0 {
            electrical_kw / self.grid_eff / kwh_per_l
        } else {
            0.0
        };
        mech_fuel + elec_fuel
    }
}
