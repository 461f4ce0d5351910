use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one virtual controller.
///
/// The triple (device GUID, logical pad index, physical port index) is the
/// sole key into all per-device state. Two identifiers name the same device
/// iff all three fields match; the value is never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PadIdentifier {
    /// Globally unique device GUID.
    pub guid: Uuid,
    /// Logical pad index on the device (e.g. player slot).
    pub pad: usize,
    /// Physical port index the device is attached to.
    pub port: usize,
}

impl PadIdentifier {
    pub fn new(guid: Uuid, pad: usize, port: usize) -> Self {
        Self { guid, pad, port }
    }
}

impl std::fmt::Display for PadIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guid={} pad={} port={}", self.guid, self.pad, self.port)
    }
}
