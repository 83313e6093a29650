/// A solar array converting irradiance into electrical power.
///
/// Stateless and fully deterministic: output is panel area times conversion
/// efficiency times the hour's irradiance fraction. The diurnal irradiance
/// shape itself comes from [`crate::sim::irradiance::create_irr_schedule`].
#[derive(Debug, Clone)]
pub struct SolarArray {
    /// Panel area in square meters.
    pub area_m2: f32,

    /// Conversion efficiency in kW per square meter at full irradiance.
    pub eff: f32,
}

impl SolarArray {
    /// Creates a new solar array.
    ///
    /// # Panics
    ///
    /// Panics if `area_m2` or `eff` is negative.
    pub fn new(area_m2: f32, eff: f32) -> Self {
        assert!(area_m2 >= 0.0);
        assert!(eff >= 0.0);

        Self { area_m2, eff }
    }

    /// Power output for the given irradiance fraction.
    pub fn generate_power(&self, irradiance: f32) -> f32 {
        self.area_m2 * self.eff * irradiance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_irradiance_output() {
        let solar = SolarArray::new(100.0, 0.2);
        assert_eq!(solar.generate_power(1.0), 20.0);
    }

    #[test]
    fn test_output_scales_linearly() {
        let solar = SolarArray::new(100.0, 0.2);
        assert_eq!(solar.generate_power(0.5), 10.0);
        assert_eq!(solar.generate_power(0.0), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_area_panics() {
        SolarArray::new(-1.0, 0.2);
    }
}
