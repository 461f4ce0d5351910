//! Device-input abstraction core for a hardware emulator.
//!
//! [`InputEngine`] is a thread-safe registry of virtual controller state
//! (buttons, hat masks, axes, motion samples, battery), a change-notification
//! layer for listeners watching a specific input, and the mapping-detection
//! path that decides, during an interactive remap session, which input the
//! user actually pressed.
//!
//! Backend drivers that poll physical hardware sit outside this crate; they
//! feed fresh samples through the `set_*` mutators from their own threads.
//! Consumers read current state through the `get_*` queries and subscribe to
//! changes through [`InputEngine::set_callback`].

mod callback;
mod engine;
mod state;

pub use callback::{InputCallback, InputIdentifier, MappingCallback};
pub use engine::{AXIS_MAPPING_THRESHOLD, InputEngine};
