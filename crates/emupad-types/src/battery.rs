use serde::{Deserialize, Serialize};

/// Reported charge level of a controller battery.
///
/// `Charging` doubles as the neutral answer for devices that never reported
/// a level, so battery queries against unknown devices stay harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BatteryLevel {
    None,
    Empty,
    Critical,
    Low,
    Medium,
    Full,
    #[default]
    Charging,
}
