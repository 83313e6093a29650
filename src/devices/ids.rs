use std::fmt;

/// Identifier for one of the four fixed device slots in the plant.
///
/// The plant always carries two propulsion motors and two diesel generators.
/// Usage profiles, fuel rates, and per-hour outputs are addressed by this
/// identifier rather than by device name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceId {
    Motor1,
    Motor2,
    Dg1,
    Dg2,
}

impl DeviceId {
    /// All four slots in reporting order.
    pub const ALL: [DeviceId; 4] = [
        DeviceId::Motor1,
        DeviceId::Motor2,
        DeviceId::Dg1,
        DeviceId::Dg2,
    ];

    /// Stable slot index (0..4), usable for per-device arrays.
    pub fn index(self) -> usize {
        match self {
            DeviceId::Motor1 => 0,
            DeviceId::Motor2 => 1,
            DeviceId::Dg1 => 2,
            DeviceId::Dg2 => 3,
        }
    }

    /// Human-readable device name.
    pub fn name(self) -> &'static str {
        match self {
            DeviceId::Motor1 => "Motor1",
            DeviceId::Motor2 => "Motor2",
            DeviceId::Dg1 => "DG1",
            DeviceId::Dg2 => "DG2",
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
