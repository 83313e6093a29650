/// A diesel generator feeding the electrical grid.
///
/// Stateless: available grid output per hour is the scheduled usage fraction
/// times `max_power_kw`, and fuel use is computed from the realized output.
#[derive(Debug, Clone)]
pub struct DieselGenerator {
    /// Maximum output power in kilowatts.
    pub max_power_kw: f32,

    /// Efficiency of the path onto the grid (0..1.0).
    pub grid_eff: f32,
}

impl DieselGenerator {
    /// Creates a new diesel generator.
    ///
    /// # Panics
    ///
    /// Panics if `max_power_kw` is negative.
    pub fn new(max_power_kw: f32, grid_eff: f32) -> Self {
        assert!(max_power_kw >= 0.0);

        Self {
            max_power_kw,
            grid_eff,
        }
    }

    /// Fuel burned to realize `grid_kw_out` of grid output for one hour.
    ///
    /// `grid_kw_out` is measured AFTER the grid conversion loss; the input
    /// power is backed out through `grid_eff` before dividing by the fuel
    /// rate (kWh per liter). A rate <= 0 consumes no fuel; a degenerate
    /// (<= 0) grid efficiency is treated as zero throughput.
    pub fn fuel_consumed(&self, grid_kw_out: f32, kwh_per_l: f32) -> f32 {
        if kwh_per_l <= 0.0 || self.grid_eff <= 0.0 {
            return 0.0;
        }
        let input_power = grid_kw_out / self.grid_eff;
        input_power / kwh_per_l
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generator() {
        let dg = DieselGenerator::new(250.0, 0.95);
        assert_eq!(dg.max_power_kw, 250.0);
        assert_eq!(dg.grid_eff, 0.95);
    }

    #[test]
    #[should_panic]
    fn test_negative_max_power_panics() {
        DieselGenerator::new(-250.0, 0.95);
    }

    #[test]
    fn test_fuel_backs_out_grid_loss() {
        let dg = DieselGenerator::new(250.0, 0.95);
        // 190 kW of grid output requires 200 kW of input at 95% efficiency.
        let fuel = dg.fuel_consumed(190.0, 4.5);
        assert!((fuel - 200.0 / 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_zero_fuel_rate_returns_zero() {
        let dg = DieselGenerator::new(250.0, 0.95);
        assert_eq!(dg.fuel_consumed(190.0, 0.0), 0.0);
        assert_eq!(dg.fuel_consumed(190.0, -4.5), 0.0);
    }

    #[test]
    fn test_degenerate_grid_eff_returns_zero() {
        let dg = DieselGenerator::new(250.0, 0.0);
        assert_eq!(dg.fuel_consumed(190.0, 4.5), 0.0);
    }
}
