//! Post-hoc KPI computation from simulation results.

use std::fmt;

use crate::devices::DeviceId;

use super::types::HourRecord;

/// Aggregate key performance indicators derived from a complete run.
///
/// Computed post-hoc from `Vec<HourRecord>` to ensure consistency between
/// hour data and reported totals. Hours are one hour long, so kW totals
/// read directly as kWh.
#[derive(Debug, Clone)]
pub struct KpiReport {
    /// Total fuel burned over the horizon (L).
    pub total_fuel_l: f32,
    /// Fuel per device slot, indexed by [`DeviceId::index`] (L).
    pub fuel_by_device_l: [f32; 4],
    /// Total unmet energy over the horizon (kWh).
    pub total_unmet_kwh: f32,
    /// Total curtailed energy over the horizon (kWh).
    pub total_excess_kwh: f32,
    /// Number of hours with any unmet load.
    pub hours_with_unmet: usize,
    /// Total energy delivered by the battery (kWh).
    pub battery_out_kwh: f32,
    /// Total energy absorbed by the battery (kWh).
    pub battery_in_kwh: f32,
    /// Lowest SOC reached (kWh).
    pub min_soc_kwh: f32,
    /// Highest SOC reached (kWh).
    pub max_soc_kwh: f32,
    /// SOC at the end of the horizon (kWh).
    pub end_soc_kwh: f32,
}

impl KpiReport {
    /// Computes all KPIs from the complete hour record vector.
    pub fn from_results(results: &[HourRecord]) -> Self {
        if results.is_empty() {
            return Self {
                total_fuel_l: 0.0,
                fuel_by_device_l: [0.0; 4],
                total_unmet_kwh: 0.0,
                total_excess_kwh: 0.0,
                hours_with_unmet: 0,
                battery_out_kwh: 0.0,
                battery_in_kwh: 0.0,
                min_soc_kwh: 0.0,
                max_soc_kwh: 0.0,
                end_soc_kwh: 0.0,
            };
        }

        let mut total_fuel = 0.0_f32;
        let mut fuel_by_device = [0.0_f32; 4];
        let mut unmet = 0.0_f32;
        let mut excess = 0.0_f32;
        let mut unmet_hours = 0_usize;
        let mut batt_out = 0.0_f32;
        let mut batt_in = 0.0_f32;
        let mut min_soc = f32::INFINITY;
        let mut max_soc = f32::NEG_INFINITY;

        for r in results {
            total_fuel += r.fuel_used_l;
            for d in &r.devices {
                fuel_by_device[d.id.index()] += d.fuel_l;
            }
            unmet += r.unmet_load_kw;
            excess += r.excess_kw;
            if r.unmet_load_kw > 0.0 {
                unmet_hours += 1;
            }
            batt_out += r.batt_out_kw;
            batt_in += r.charged_kw;
            min_soc = min_soc.min(r.end_soc_kwh).min(r.start_soc_kwh);
            max_soc = max_soc.max(r.end_soc_kwh).max(r.start_soc_kwh);
        }

        Self {
            total_fuel_l: total_fuel,
            fuel_by_device_l: fuel_by_device,
            total_unmet_kwh: unmet,
            total_excess_kwh: excess,
            hours_with_unmet: unmet_hours,
            battery_out_kwh: batt_out,
            battery_in_kwh: batt_in,
            min_soc_kwh: min_soc,
            max_soc_kwh: max_soc,
            end_soc_kwh: results[results.len() - 1].end_soc_kwh,
        }
    }
}

impl fmt::Display for KpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- 48-Hour Report ---")?;
        writeln!(f, "Total fuel:          {:.2} L", self.total_fuel_l)?;
        for id in DeviceId::ALL {
            writeln!(
                f,
                "  {:<8}           {:.2} L",
                id.name(),
                self.fuel_by_device_l[id.index()]
            )?;
        }
        writeln!(
            f,
            "Unmet energy:        {:.1} kWh over {} h",
            self.total_unmet_kwh, self.hours_with_unmet
        )?;
        writeln!(f, "Curtailed energy:    {:.1} kWh", self.total_excess_kwh)?;
        writeln!(
            f,
            "Battery throughput:  {:.1} kWh out / {:.1} kWh in",
            self.battery_out_kwh, self.battery_in_kwh
        )?;
        write!(
            f,
            "SOC range:           {:.1}..{:.1} kWh (end {:.1})",
            self.min_soc_kwh, self.max_soc_kwh, self.end_soc_kwh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::DeviceOutput;

    fn make_record(hour: usize, fuel: f32, unmet: f32, soc: f32) -> HourRecord {
        HourRecord {
            hour,
            solar_kw: 0.0,
            hotel_left_kw: 0.0,
            aux_left_kw: 0.0,
            prop_left_kw: 0.0,
            prop1_supplied_kw: 0.0,
            prop2_supplied_kw: 0.0,
            fuel_used_l: fuel,
            batt_out_kw: 1.0,
            charged_kw: 2.0,
            unmet_load_kw: unmet,
            excess_kw: 0.5,
            start_soc_kwh: soc + 10.0,
            end_soc_kwh: soc,
            devices: [
                DeviceOutput {
                    id: DeviceId::Motor1,
                    fuel_l: fuel / 2.0,
                    grid_out_kw: 0.0,
                },
                DeviceOutput {
                    id: DeviceId::Motor2,
                    fuel_l: fuel / 2.0,
                    grid_out_kw: 0.0,
                },
                DeviceOutput {
                    id: DeviceId::Dg1,
                    fuel_l: 0.0,
                    grid_out_kw: 0.0,
                },
                DeviceOutput {
                    id: DeviceId::Dg2,
                    fuel_l: 0.0,
                    grid_out_kw: 0.0,
                },
            ],
        }
    }

    #[test]
    fn totals_sum_over_hours() {
        let results = vec![
            make_record(0, 10.0, 0.0, 2000.0),
            make_record(1, 20.0, 5.0, 1800.0),
            make_record(2, 0.0, 3.0, 1900.0),
        ];
        let kpi = KpiReport::from_results(&results);
        assert!((kpi.total_fuel_l - 30.0).abs() < 1e-5);
        assert!((kpi.total_unmet_kwh - 8.0).abs() < 1e-5);
        assert_eq!(kpi.hours_with_unmet, 2);
        assert!((kpi.battery_out_kwh - 3.0).abs() < 1e-5);
        assert!((kpi.battery_in_kwh - 6.0).abs() < 1e-5);
    }

    #[test]
    fn per_device_fuel_attribution() {
        let results = vec![make_record(0, 10.0, 0.0, 2000.0)];
        let kpi = KpiReport::from_results(&results);
        assert!((kpi.fuel_by_device_l[DeviceId::Motor1.index()] - 5.0).abs() < 1e-5);
        assert_eq!(kpi.fuel_by_device_l[DeviceId::Dg1.index()], 0.0);
    }

    #[test]
    fn soc_range_spans_start_and_end_values() {
        let results = vec![
            make_record(0, 0.0, 0.0, 2000.0),
            make_record(1, 0.0, 0.0, 1500.0),
        ];
        let kpi = KpiReport::from_results(&results);
        assert_eq!(kpi.min_soc_kwh, 1500.0);
        assert_eq!(kpi.max_soc_kwh, 2010.0);
        assert_eq!(kpi.end_soc_kwh, 1500.0);
    }

    #[test]
    fn empty_results() {
        let kpi = KpiReport::from_results(&[]);
        assert_eq!(kpi.total_fuel_l, 0.0);
        assert_eq!(kpi.hours_with_unmet, 0);
    }

    #[test]
    fn display_does_not_panic() {
        let results = vec![make_record(0, 10.0, 1.0, 2000.0)];
        let kpi = KpiReport::from_results(&results);
        let s = format!("{kpi}");
        assert!(s.contains("Total fuel"));
    }
}
