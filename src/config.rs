//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::types::{BLOCKS, DeviceUsage};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Battery buffer parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Solar array and daylight window parameters.
    #[serde(default)]
    pub solar: SolarConfig,
    /// Propulsion motor 1 parameters and schedule.
    #[serde(default)]
    pub motor1: MotorConfig,
    /// Propulsion motor 2 parameters and schedule.
    #[serde(default)]
    pub motor2: MotorConfig,
    /// Diesel generator 1 parameters and schedule.
    #[serde(default)]
    pub dg1: GeneratorConfig,
    /// Diesel generator 2 parameters and schedule.
    #[serde(default)]
    pub dg2: GeneratorConfig,
    /// Per-category block loads.
    #[serde(default)]
    pub loads: LoadsConfig,
    /// Path conversion efficiencies.
    #[serde(default)]
    pub efficiency: EfficiencyConfig,
}

/// Default device usage fractions: off in harbor blocks, 80% under way.
const DEFAULT_USAGE: [f32; BLOCKS] = [0.0, 0.0, 0.0, 0.0, 0.8, 0.8, 0.0, 0.8, 0.8, 0.8, 0.8, 0.0];

/// Battery buffer parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Total capacity (kWh).
    pub capacity_kwh: f32,
    /// Reserve floor (kWh).
    pub min_soc_kwh: f32,
    /// Starting SOC (kWh).
    pub initial_soc_kwh: f32,
    /// Charge efficiency (0.0-1.0).
    pub charge_eff: f32,
    /// Discharge efficiency (0.0-1.0).
    pub discharge_eff: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: 5000.0,
            min_soc_kwh: 500.0,
            initial_soc_kwh: 2500.0,
            charge_eff: 1.0,
            discharge_eff: 1.0,
        }
    }
}

/// Solar array and daylight window parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Panel area (m²).
    pub area_m2: f32,
    /// Conversion efficiency (kW/m² at full irradiance).
    pub eff: f32,
    /// Sunrise hour (0-24, fractional allowed).
    pub sunrise: f32,
    /// Sunset hour (0-24, fractional allowed). `sunset <= sunrise` means
    /// no daylight, which is valid.
    pub sunset: f32,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            area_m2: 100.0,
            eff: 0.2,
            sunrise: 6.0,
            sunset: 18.0,
        }
    }
}

/// Propulsion motor parameters and schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotorConfig {
    /// Maximum shaft input power (kW).
    pub max_power_kw: f32,
    /// Fuel rate (kWh per liter).
    pub fuel_kwh_per_l: f32,
    /// Whether the motor participates.
    pub on: bool,
    /// Availability fraction per 4-hour block.
    pub usage: [f32; BLOCKS],
    /// Cap on grid output (kW, after conversion losses).
    pub max_grid_kw: f32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            max_power_kw: 1000.0,
            fuel_kwh_per_l: 4.5,
            on: true,
            usage: DEFAULT_USAGE,
            max_grid_kw: 1000.0,
        }
    }
}

impl MotorConfig {
    /// Usage schedule for the simulation engine.
    pub fn schedule(&self) -> DeviceUsage {
        DeviceUsage::new(self.on, self.usage)
    }
}

/// Diesel generator parameters and schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Maximum output power (kW).
    pub max_power_kw: f32,
    /// Fuel rate (kWh per liter).
    pub fuel_kwh_per_l: f32,
    /// Whether the generator participates.
    pub on: bool,
    /// Availability fraction per 4-hour block.
    pub usage: [f32; BLOCKS],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_power_kw: 250.0,
            fuel_kwh_per_l: 4.5,
            on: true,
            usage: DEFAULT_USAGE,
        }
    }
}

impl GeneratorConfig {
    /// Usage schedule for the simulation engine.
    pub fn schedule(&self) -> DeviceUsage {
        DeviceUsage::new(self.on, self.usage)
    }
}

/// Per-category block loads (kW).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadsConfig {
    /// Hotel load per block.
    pub hotel_kw: [f32; BLOCKS],
    /// Auxiliary load per block.
    pub aux_kw: [f32; BLOCKS],
    /// Propulsion load per block.
    pub prop_kw: [f32; BLOCKS],
}

impl Default for LoadsConfig {
    fn default() -> Self {
        Self {
            hotel_kw: [190.0; BLOCKS],
            aux_kw: [30.0; BLOCKS],
            prop_kw: [900.0; BLOCKS],
        }
    }
}

/// Path conversion efficiencies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EfficiencyConfig {
    /// Motor to own shaft (direct mechanical).
    pub motor_direct: f32,
    /// Motor onto the grid.
    pub motor_grid: f32,
    /// Motor cross-feed to the other shaft.
    pub motor_cross: f32,
    /// Generator onto the grid.
    pub dg_grid: f32,
    /// Grid to shaft.
    pub grid_prop: f32,
}

impl Default for EfficiencyConfig {
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

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"battery.capacity_kwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario (the tool's documented defaults).
    pub fn baseline() -> Self {
        Self {
            battery: BatteryConfig::default(),
            solar: SolarConfig::default(),
            motor1: MotorConfig::default(),
            motor2: MotorConfig::default(),
            dg1: GeneratorConfig::default(),
            dg2: GeneratorConfig::default(),
            loads: LoadsConfig::default(),
            efficiency: EfficiencyConfig::default(),
        }
    }

    /// Returns the crossing preset: continuous propulsion, all devices
    /// scheduled in every block.
    pub fn crossing() -> Self {
        let under_way = [0.8; BLOCKS];
        Self {
            motor1: MotorConfig {
                usage: under_way,
                ..MotorConfig::default()
            },
            motor2: MotorConfig {
                usage: under_way,
                ..MotorConfig::default()
            },
            dg1: GeneratorConfig {
                usage: under_way,
                ..GeneratorConfig::default()
            },
            dg2: GeneratorConfig {
                usage: under_way,
                ..GeneratorConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the harbor preset: motors off, no propulsion load, one
    /// generator covering hotel and auxiliary demand.
    pub fn harbor() -> Self {
        Self {
            motor1: MotorConfig {
                on: false,
                usage: [0.0; BLOCKS],
                ..MotorConfig::default()
            },
            motor2: MotorConfig {
                on: false,
                usage: [0.0; BLOCKS],
                ..MotorConfig::default()
            },
            dg1: GeneratorConfig {
                usage: [1.0; BLOCKS],
                ..GeneratorConfig::default()
            },
            dg2: GeneratorConfig {
                on: false,
                usage: [0.0; BLOCKS],
                ..GeneratorConfig::default()
            },
            loads: LoadsConfig {
                prop_kw: [0.0; BLOCKS],
                ..LoadsConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "crossing", "harbor"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "crossing" => Ok(Self::crossing()),
            "harbor" => Ok(Self::harbor()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. Note that
    /// `sunset <= sunrise` is valid input (an all-dark schedule), so the
    /// daylight window is deliberately not checked here.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let b = &self.battery;
        if b.capacity_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if b.min_soc_kwh < 0.0 || b.min_soc_kwh > b.capacity_kwh {
            errors.push(ConfigError {
                field: "battery.min_soc_kwh".into(),
                message: "must be in [0, battery.capacity_kwh]".into(),
            });
        }
        if b.initial_soc_kwh < b.min_soc_kwh || b.initial_soc_kwh > b.capacity_kwh {
            errors.push(ConfigError {
                field: "battery.initial_soc_kwh".into(),
                message: "must be in [battery.min_soc_kwh, battery.capacity_kwh]".into(),
            });
        }
        if !(b.charge_eff > 0.0 && b.charge_eff <= 1.0) {
            errors.push(ConfigError {
                field: "battery.charge_eff".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(b.discharge_eff > 0.0 && b.discharge_eff <= 1.0) {
            errors.push(ConfigError {
                field: "battery.discharge_eff".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }

        let s = &self.solar;
        if s.area_m2 < 0.0 {
            errors.push(ConfigError {
                field: "solar.area_m2".into(),
                message: "must be >= 0".into(),
            });
        }
        if s.eff < 0.0 {
            errors.push(ConfigError {
                field: "solar.eff".into(),
                message: "must be >= 0".into(),
            });
        }

        validate_device(
            &mut errors,
            "motor1",
            self.motor1.max_power_kw,
            &self.motor1.usage,
        );
        validate_device(
            &mut errors,
            "motor2",
            self.motor2.max_power_kw,
            &self.motor2.usage,
        );
        validate_device(&mut errors, "dg1", self.dg1.max_power_kw, &self.dg1.usage);
        validate_device(&mut errors, "dg2", self.dg2.max_power_kw, &self.dg2.usage);

        if self.motor1.max_grid_kw < 0.0 {
            errors.push(ConfigError {
                field: "motor1.max_grid_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if self.motor2.max_grid_kw < 0.0 {
            errors.push(ConfigError {
                field: "motor2.max_grid_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        validate_loads(&mut errors, "loads.hotel_kw", &self.loads.hotel_kw);
        validate_loads(&mut errors, "loads.aux_kw", &self.loads.aux_kw);
        validate_loads(&mut errors, "loads.prop_kw", &self.loads.prop_kw);

        let e = &self.efficiency;
        for (field, value) in [
            ("efficiency.motor_direct", e.motor_direct),
            ("efficiency.motor_grid", e.motor_grid),
            ("efficiency.motor_cross", e.motor_cross),
            ("efficiency.dg_grid", e.dg_grid),
            ("efficiency.grid_prop", e.grid_prop),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be in [0.0, 1.0]".into(),
                });
            }
        }

        errors
    }
}

fn validate_device(
    errors: &mut Vec<ConfigError>,
    section: &str,
    max_power_kw: f32,
    usage: &[f32; BLOCKS],
) {
    if max_power_kw < 0.0 {
        errors.push(ConfigError {
            field: format!("{section}.max_power_kw"),
            message: "must be >= 0".into(),
        });
    }
    for (i, &frac) in usage.iter().enumerate() {
        if !(0.0..=1.0).contains(&frac) {
            errors.push(ConfigError {
                field: format!("{section}.usage[{i}]"),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
    }
}

fn validate_loads(errors: &mut Vec<ConfigError>, field: &str, loads: &[f32; BLOCKS]) {
    for (i, &kw) in loads.iter().enumerate() {
        if kw < 0.0 {
            errors.push(ConfigError {
                field: format!("{field}[{i}]"),
                message: "must be >= 0".into(),
            });
        }
    }
}
