/// A battery buffer that absorbs surplus grid/solar power and covers unmet
/// grid demand.
///
/// `Battery` is the only stateful device in the plant: `soc_kwh` carries
/// forward across the 48 simulated hours. SOC is bounded below by a
/// configured minimum (reserve) and above by capacity.
///
/// # Energy Convention
/// - `charge` is offered a surplus and returns the amount actually stored;
///   the caller treats the remainder as curtailed excess.
/// - `discharge` is asked for a need and returns the amount actually
///   delivered; the caller treats the remainder as unmet load.
#[derive(Debug, Clone)]
pub struct Battery {
    /// Total capacity in kilowatt-hours.
    pub capacity_kwh: f32,

    /// Minimum allowed state of charge (reserve) in kilowatt-hours.
    pub min_soc_kwh: f32,

    /// Current state of charge in kilowatt-hours.
    pub soc_kwh: f32,

    /// Charging efficiency (0..1.0).
    pub charge_eff: f32,

    /// Discharging efficiency (0..1.0).
    pub discharge_eff: f32,
}

impl Battery {
    /// Creates a new battery with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `capacity_kwh` - Total capacity in kWh (must be > 0)
    /// * `min_soc_kwh` - Reserve floor in kWh (0 <= min_soc <= capacity)
    /// * `initial_soc_kwh` - Starting SOC in kWh (min_soc <= soc <= capacity)
    /// * `charge_eff` - Charging efficiency (0..1.0)
    /// * `discharge_eff` - Discharging efficiency (0..1.0)
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero/negative, SOC bounds are out of order, or
    /// efficiencies are invalid.
    pub fn new(
        capacity_kwh: f32,
        min_soc_kwh: f32,
        initial_soc_kwh: f32,
        charge_eff: f32,
        discharge_eff: f32,
    ) -> Self {
        assert!(capacity_kwh > 0.0);
        assert!((0.0..=capacity_kwh).contains(&min_soc_kwh));
        assert!((min_soc_kwh..=capacity_kwh).contains(&initial_soc_kwh));
        assert!(charge_eff > 0.0 && charge_eff <= 1.0);
        assert!(discharge_eff > 0.0 && discharge_eff <= 1.0);

        Self {
            capacity_kwh,
            min_soc_kwh,
            soc_kwh: initial_soc_kwh,
            charge_eff,
            discharge_eff,
        }
    }

    /// Offers surplus power to the battery and returns the amount stored.
    ///
    /// Storable energy is the surplus after charge losses, capped by the
    /// remaining free capacity. A non-positive surplus stores nothing.
    pub fn charge(&mut self, surplus_kw: f32) -> f32 {
        if surplus_kw <= 0.0 {
            return 0.0;
        }
        let free_cap = self.capacity_kwh - self.soc_kwh;
        let storable = surplus_kw * self.charge_eff;
        let stored = storable.min(free_cap);
        self.soc_kwh += stored;
        stored
    }

    /// Requests power from the battery and returns the amount delivered.
    ///
    /// Deliverable energy is the stored energy above the reserve floor,
    /// scaled by discharge efficiency. The SOC is debited by the raw stored
    /// energy backing the delivery. A non-positive need delivers nothing.
    pub fn discharge(&mut self, needed_kw: f32) -> f32 {
        if needed_kw <= 0.0 {
            return 0.0;
        }
        let available = (self.soc_kwh - self.min_soc_kwh).max(0.0);
        let max_out = available * self.discharge_eff;
        let used = needed_kw.min(max_out);
        self.soc_kwh -= used / self.discharge_eff;
        used
    }
}
