use serde::{Deserialize, Serialize};

/// Accelerometer magnitude (normalized units) above which a sample counts
/// as a deliberate gesture rather than idle sensor noise.
pub const MOTION_ACCEL_THRESHOLD: f32 = 1.5;

/// Gyroscope magnitude (normalized units) above which a sample counts as a
/// deliberate gesture.
pub const MOTION_GYRO_THRESHOLD: f32 = 0.6;

/// One 6-axis motion sample: three gyroscope and three accelerometer
/// components, plus the time delta since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicMotion {
    pub gyro_x: f32,
    pub gyro_y: f32,
    pub gyro_z: f32,
    pub accel_x: f32,
    pub accel_y: f32,
    pub accel_z: f32,
    /// Microseconds since the previous sample from the same sensor.
    pub delta_timestamp: u64,
}

impl BasicMotion {
    /// Whether this sample looks like an intentional shake/tilt gesture.
    ///
    /// True if any accelerometer component exceeds
    /// [`MOTION_ACCEL_THRESHOLD`] or any gyroscope component exceeds
    /// [`MOTION_GYRO_THRESHOLD`] in magnitude.
    pub fn is_active(&self) -> bool {
        self.accel_x.abs() > MOTION_ACCEL_THRESHOLD
            || self.accel_y.abs() > MOTION_ACCEL_THRESHOLD
            || self.accel_z.abs() > MOTION_ACCEL_THRESHOLD
            || self.gyro_x.abs() > MOTION_GYRO_THRESHOLD
            || self.gyro_y.abs() > MOTION_GYRO_THRESHOLD
            || self.gyro_z.abs() > MOTION_GYRO_THRESHOLD
    }
}
