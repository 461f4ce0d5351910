//! Shared data model for the emupad input layer.
//!
//! Plain value types only: device identity, input value kinds, and the
//! detected-mapping event emitted during bind-on-press configuration.
//! No state, no locks; the engine crate owns those.

mod battery;
mod hat;
mod identifier;
mod mapping;
mod motion;

pub use battery::BatteryLevel;
pub use hat::HatDirection;
pub use identifier::PadIdentifier;
pub use mapping::{InputType, MappingData, MappingValue};
pub use motion::{BasicMotion, MOTION_ACCEL_THRESHOLD, MOTION_GYRO_THRESHOLD};
