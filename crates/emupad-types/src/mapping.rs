use serde::{Deserialize, Serialize};

use crate::{BasicMotion, HatDirection, PadIdentifier};

/// Kind of input a subscription or mapping event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    Button,
    HatButton,
    Analog,
    Motion,
    Battery,
}

/// Kind-specific payload of a detected mapping.
///
/// The variant carries the kind, so a button event can never hold an axis
/// value. Battery changes are never mapped and have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MappingValue {
    Button(bool),
    HatButton(HatDirection),
    Analog(f32),
    Motion(BasicMotion),
}

impl MappingValue {
    /// The kind tag matching this payload.
    pub fn input_type(&self) -> InputType {
        match self {
            MappingValue::Button(_) => InputType::Button,
            MappingValue::HatButton(_) => InputType::HatButton,
            MappingValue::Analog(_) => InputType::Analog,
            MappingValue::Motion(_) => InputType::Motion,
        }
    }
}

/// One detected binding, reported to the mapping observer while the engine
/// is configuring. The caller persists these into whatever configuration
/// store it uses; the engine itself stores nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingData {
    /// Name of the backend family that produced the event, used to
    /// disambiguate when several engines are active at once.
    pub engine: String,
    /// The device the input belongs to.
    pub pad: PadIdentifier,
    /// Input index within its kind.
    pub index: usize,
    /// Detected value, tagged by kind.
    pub value: MappingValue,
}
