use serde::{Deserialize, Serialize};

/// One compass direction of a hat (directional pad) input.
///
/// A hat's state is an 8-bit mask with one bit per direction. The low four
/// bits follow the usual cardinal layout; diagonals occupy the high bits for
/// devices that report them as distinct flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HatDirection {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

impl HatDirection {
    /// All eight directions, in mask bit order.
    pub const ALL: [HatDirection; 8] = [
        HatDirection::Up,
        HatDirection::Right,
        HatDirection::Down,
        HatDirection::Left,
        HatDirection::UpRight,
        HatDirection::DownRight,
        HatDirection::DownLeft,
        HatDirection::UpLeft,
    ];

    /// The bit this direction occupies in a hat mask.
    pub fn bit(self) -> u8 {
        match self {
            HatDirection::Up => 0x01,
            HatDirection::Right => 0x02,
            HatDirection::Down => 0x04,
            HatDirection::Left => 0x08,
            HatDirection::UpRight => 0x10,
            HatDirection::DownRight => 0x20,
            HatDirection::DownLeft => 0x40,
            HatDirection::UpLeft => 0x80,
        }
    }

    /// Map a single-bit mask back to its direction.
    /// Returns `None` if `bit` is zero or has more than one bit set.
    pub fn from_bit(bit: u8) -> Option<HatDirection> {
        Self::ALL.into_iter().find(|d| d.bit() == bit)
    }

    pub fn name(self) -> &'static str {
        match self {
            HatDirection::Up => "up",
            HatDirection::Right => "right",
            HatDirection::Down => "down",
            HatDirection::Left => "left",
            HatDirection::UpRight => "up_right",
            HatDirection::DownRight => "down_right",
            HatDirection::DownLeft => "down_left",
            HatDirection::UpLeft => "up_left",
        }
    }
}
