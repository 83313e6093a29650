//! Simulation engine that owns the plant devices and runs the 48-hour horizon.

use crate::config::ScenarioConfig;
use crate::devices::{Battery, DeviceId, DieselGenerator, PropulsionMotor, SolarArray};

use super::irradiance::create_irr_schedule;
use super::step::{allocate_solar, route_propulsion};
use super::types::{
    DeviceOutput, FuelRates, HORIZON_HOURS, HourRecord, LoadProfile, PathEfficiency, UsageSet,
    block_of,
};

/// Simulation engine owning all devices and the frozen run configuration.
///
/// Holds typed device fields rather than trait objects since the plant's
/// device set is fixed: two motors, two generators, one solar array, one
/// battery. The battery is the only state carried across hours, so hours
/// must execute strictly in order.
pub struct Engine {
    battery: Battery,
    solar: SolarArray,
    motor1: PropulsionMotor,
    motor2: PropulsionMotor,
    dg1: DieselGenerator,
    dg2: DieselGenerator,
    usage: UsageSet,
    loads: LoadProfile,
    path: PathEfficiency,
    fuel: FuelRates,
    irr: Vec<f32>,
}

impl Engine {
    /// Creates a new simulation engine from pre-built parts.
    ///
    /// # Arguments
    ///
    /// * `battery` - Battery buffer (initial SOC set by the caller)
    /// * `solar` - Solar array
    /// * `motor1`, `motor2` - Propulsion motors for shafts 1 and 2
    /// * `dg1`, `dg2` - Diesel generators
    /// * `usage` - Per-device on/off flags and block availability fractions
    /// * `loads` - Per-category block loads
    /// * `path` - Path conversion efficiencies
    /// * `fuel` - Per-device fuel rates (kWh per liter)
    /// * `irr` - 48-element irradiance schedule
    ///
    /// # Panics
    ///
    /// Panics if the irradiance schedule does not cover the horizon.
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        battery: Battery,
        solar: SolarArray,
        motor1: PropulsionMotor,
        motor2: PropulsionMotor,
        dg1: DieselGenerator,
        dg2: DieselGenerator,
        usage: UsageSet,
        loads: LoadProfile,
        path: PathEfficiency,
        fuel: FuelRates,
        irr: Vec<f32>,
    ) -> Self {
        assert_eq!(irr.len(), HORIZON_HOURS);

        Self {
            battery,
            solar,
            motor1,
            motor2,
            dg1,
            dg2,
            usage,
            loads,
            path,
            fuel,
            irr,
        }
    }

    /// Builds an engine with fresh device state from a frozen configuration.
    ///
    /// Every run gets its own battery and device instances; nothing leaks
    /// between runs with different inputs.
    pub fn from_scenario(cfg: &ScenarioConfig) -> Self {
        let b = &cfg.battery;
        let battery = Battery::new(
            b.capacity_kwh,
            b.min_soc_kwh,
            b.initial_soc_kwh,
            b.charge_eff,
            b.discharge_eff,
        );

        let s = &cfg.solar;
        let solar = SolarArray::new(s.area_m2, s.eff);

        let e = &cfg.efficiency;
        let path = PathEfficiency {
            motor_direct: e.motor_direct,
            motor_grid: e.motor_grid,
            motor_cross: e.motor_cross,
            dg_grid: e.dg_grid,
            grid_prop: e.grid_prop,
        };

        let motor1 = PropulsionMotor::new(
            cfg.motor1.max_power_kw,
            path.motor_direct,
            path.motor_grid,
            cfg.motor1.max_grid_kw,
        );
        let motor2 = PropulsionMotor::new(
            cfg.motor2.max_power_kw,
            path.motor_direct,
            path.motor_grid,
            cfg.motor2.max_grid_kw,
        );
        let dg1 = DieselGenerator::new(cfg.dg1.max_power_kw, path.dg_grid);
        let dg2 = DieselGenerator::new(cfg.dg2.max_power_kw, path.dg_grid);

        let usage = UsageSet {
            motor1: cfg.motor1.schedule(),
            motor2: cfg.motor2.schedule(),
            dg1: cfg.dg1.schedule(),
            dg2: cfg.dg2.schedule(),
        };

        let loads = LoadProfile {
            hotel_kw: cfg.loads.hotel_kw,
            aux_kw: cfg.loads.aux_kw,
            prop_kw: cfg.loads.prop_kw,
        };

        let fuel = FuelRates {
            motor1: cfg.motor1.fuel_kwh_per_l,
            motor2: cfg.motor2.fuel_kwh_per_l,
            dg1: cfg.dg1.fuel_kwh_per_l,
            dg2: cfg.dg2.fuel_kwh_per_l,
        };

        let irr = create_irr_schedule(s.sunrise, s.sunset, 1.0);

        Self::new(
            battery, solar, motor1, motor2, dg1, dg2, usage, loads, path, fuel, irr,
        )
    }

    /// Executes the balance step for one hour and returns its record.
    ///
    /// Mutates battery SOC; everything else is read-only. The ordering
    /// below is fixed because each stage consumes what the previous one
    /// left over.
    pub fn step(&mut self, hour: usize) -> HourRecord {
        let block = block_of(hour);
        let hotel_kw = self.loads.hotel_kw[block];
        let aux_kw = self.loads.aux_kw[block];
        let prop_kw = self.loads.prop_kw[block];

        let start_soc_kwh = self.battery.soc_kwh;
        let solar_kw = self.solar.generate_power(self.irr[hour]);

        // 1. Solar covers loads in hotel > aux > prop priority.
        let alloc = allocate_solar(solar_kw, hotel_kw, aux_kw, prop_kw);

        // 2. Per-shaft propulsion need, split 50/50 from the pre-solar
        //    propulsion load. Solar relief of propulsion shows up as
        //    prop_left in the record but does not reduce shaft demand.
        let need_p1 = prop_kw * 0.5;
        let need_p2 = prop_kw * 0.5;

        // 3. Motor capacity scheduled for this block.
        let m1_avail = self.usage.motor1.available_kw(block, self.motor1.max_power_kw);
        let m2_avail = self.usage.motor2.available_kw(block, self.motor2.max_power_kw);

        // 4-5. Direct feed, then cross-feed.
        let routing = route_propulsion(need_p1, need_p2, m1_avail, m2_avail, &self.path);

        // 6. Shaft demand left over must come from the grid.
        let rem_prop = (need_p1 - routing.p1_supplied_kw()) + (need_p2 - routing.p2_supplied_kw());
        let grid_prop_demand = if rem_prop > 0.0 && self.path.grid_prop > 0.0 {
            rem_prop / self.path.grid_prop
        } else {
            0.0
        };

        // 7. Grid production: residual motor capacity (capped per motor)
        //    plus scheduled generator output, all after conversion losses.
        let m1_grid_out = (routing.m1_avail_kw * self.path.motor_grid)
            .min(self.motor1.max_grid_kw)
            .max(0.0);
        let m2_grid_out = (routing.m2_avail_kw * self.path.motor_grid)
            .min(self.motor2.max_grid_kw)
            .max(0.0);
        let dg1_grid_out = self.usage.dg1.available_kw(block, self.dg1.max_power_kw).max(0.0);
        let dg2_grid_out = self.usage.dg2.available_kw(block, self.dg2.max_power_kw).max(0.0);
        let total_grid = m1_grid_out + m2_grid_out + dg1_grid_out + dg2_grid_out;

        // 8. Grid serves hotel+aux leftovers first, then propulsion.
        let need_ha = alloc.hotel_left_kw + alloc.aux_left_kw;
        let used_ha = total_grid.min(need_ha);
        let grid_left = total_grid - used_ha;
        let used_prop = grid_left.min(grid_prop_demand);
        let mut unmet_grid = need_ha + grid_prop_demand - (used_ha + used_prop);

        // 9. Battery covers unmet grid demand; the remainder is unmet load.
        let batt_out_kw = if unmet_grid > 0.0 {
            self.battery.discharge(unmet_grid)
        } else {
            0.0
        };
        unmet_grid -= batt_out_kw;

        // 10. Leftover grid plus leftover solar charges the battery.
        let surplus_kw = (grid_left - used_prop) + alloc.surplus_kw;
        let charged_kw = if surplus_kw > 0.0 {
            self.battery.charge(surplus_kw)
        } else {
            0.0
        };
        let excess_kw = (surplus_kw - charged_kw).max(0.0);

        // 11. Fuel from realized outputs. Generators are accounted from
        //     their post-efficiency grid output by convention.
        let m1_fuel = if self.usage.motor1.on {
            self.motor1.fuel_consumed(
                routing.p1_from_m1 + routing.p2_from_m1,
                m1_grid_out,
                self.fuel.motor1,
            )
        } else {
            0.0
        };
        let m2_fuel = if self.usage.motor2.on {
            self.motor2.fuel_consumed(
                routing.p2_from_m2 + routing.p1_from_m2,
                m2_grid_out,
                self.fuel.motor2,
            )
        } else {
            0.0
        };
        let dg1_fuel = if self.usage.dg1.on {
            self.dg1.fuel_consumed(dg1_grid_out, self.fuel.dg1)
        } else {
            0.0
        };
        let dg2_fuel = if self.usage.dg2.on {
            self.dg2.fuel_consumed(dg2_grid_out, self.fuel.dg2)
        } else {
            0.0
        };

        HourRecord {
            hour,
            solar_kw,
            hotel_left_kw: alloc.hotel_left_kw,
            aux_left_kw: alloc.aux_left_kw,
            prop_left_kw: alloc.prop_left_kw,
            prop1_supplied_kw: routing.p1_supplied_kw(),
            prop2_supplied_kw: routing.p2_supplied_kw(),
            fuel_used_l: m1_fuel + m2_fuel + dg1_fuel + dg2_fuel,
            batt_out_kw,
            charged_kw,
            unmet_load_kw: unmet_grid,
            excess_kw,
            start_soc_kwh,
            end_soc_kwh: self.battery.soc_kwh,
            devices: [
                DeviceOutput {
                    id: DeviceId::Motor1,
                    fuel_l: m1_fuel,
                    grid_out_kw: m1_grid_out,
                },
                DeviceOutput {
                    id: DeviceId::Motor2,
                    fuel_l: m2_fuel,
                    grid_out_kw: m2_grid_out,
                },
                DeviceOutput {
                    id: DeviceId::Dg1,
                    fuel_l: dg1_fuel,
                    grid_out_kw: dg1_grid_out,
                },
                DeviceOutput {
                    id: DeviceId::Dg2,
                    fuel_l: dg2_fuel,
                    grid_out_kw: dg2_grid_out,
                },
            ],
        }
    }

    /// Executes all 48 hours strictly in order and returns every record.
    pub fn run(&mut self) -> Vec<HourRecord> {
        let mut results = Vec::with_capacity(HORIZON_HOURS);
        for hour in 0..HORIZON_HOURS {
            results.push(self.step(hour));
        }
        results
    }

    /// Returns a reference to the battery (for SOC assertions in tests).
    pub fn battery(&self) -> &Battery {
        &self.battery
    }
}
