//! Per-device state records kept inside the engine's state table.

use std::collections::HashMap;

use emupad_types::{BasicMotion, BatteryLevel};

/// Current known state of one virtual controller.
///
/// An index only carries a meaningful value once pre-set; pre-setting is
/// idempotent and never overwrites an entry that is already present, so
/// every later query resolves deterministically.
#[derive(Debug, Default)]
pub(crate) struct ControllerState {
    buttons: HashMap<usize, bool>,
    hat_buttons: HashMap<usize, u8>,
    axes: HashMap<usize, f32>,
    motions: HashMap<usize, BasicMotion>,
    battery: BatteryLevel,
}

impl ControllerState {
    /// Register a button index with its default, keeping any existing value.
    /// Returns the stored value.
    pub fn pre_set_button(&mut self, button: usize) -> bool {
        *self.buttons.entry(button).or_insert(false)
    }

    pub fn pre_set_hat_button(&mut self, button: usize) -> u8 {
        *self.hat_buttons.entry(button).or_insert(0)
    }

    pub fn pre_set_axis(&mut self, axis: usize) -> f32 {
        *self.axes.entry(axis).or_insert(0.0)
    }

    pub fn pre_set_motion(&mut self, motion: usize) -> BasicMotion {
        *self.motions.entry(motion).or_default()
    }

    pub fn set_button(&mut self, button: usize, value: bool) {
        self.buttons.insert(button, value);
    }

    pub fn set_hat_button(&mut self, button: usize, value: u8) {
        self.hat_buttons.insert(button, value);
    }

    pub fn set_axis(&mut self, axis: usize, value: f32) {
        self.axes.insert(axis, value);
    }

    pub fn set_motion(&mut self, motion: usize, value: BasicMotion) {
        self.motions.insert(motion, value);
    }

    pub fn set_battery(&mut self, value: BatteryLevel) {
        self.battery = value;
    }

    pub fn get_button(&self, button: usize) -> Option<bool> {
        self.buttons.get(&button).copied()
    }

    pub fn get_hat_button(&self, button: usize) -> Option<u8> {
        self.hat_buttons.get(&button).copied()
    }

    pub fn get_axis(&self, axis: usize) -> Option<f32> {
        self.axes.get(&axis).copied()
    }

    pub fn get_motion(&self, motion: usize) -> Option<BasicMotion> {
        self.motions.get(&motion).copied()
    }

    pub fn get_battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Known button indices, for reset sweeps.
    pub fn button_indices(&self) -> Vec<usize> {
        self.buttons.keys().copied().collect()
    }

    pub fn hat_button_indices(&self) -> Vec<usize> {
        self.hat_buttons.keys().copied().collect()
    }

    pub fn axis_indices(&self) -> Vec<usize> {
        self.axes.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_set_is_idempotent() {
        let mut state = ControllerState::default();
        state.pre_set_button(5);
        state.set_button(5, true);

        // Second pre-set keeps the stored value.
        assert!(state.pre_set_button(5));
        assert_eq!(state.get_button(5), Some(true));
    }

    #[test]
    fn unknown_index_is_none() {
        let state = ControllerState::default();
        assert_eq!(state.get_button(0), None);
        assert_eq!(state.get_hat_button(0), None);
        assert_eq!(state.get_axis(0), None);
        assert_eq!(state.get_motion(0), None);
    }

    #[test]
    fn battery_defaults_to_charging() {
        let state = ControllerState::default();
        assert_eq!(state.get_battery(), BatteryLevel::Charging);
    }

    #[test]
    fn index_lists_track_pre_sets() {
        let mut state = ControllerState::default();
        state.pre_set_button(0);
        state.pre_set_button(3);
        state.pre_set_axis(1);

        let mut buttons = state.button_indices();
        buttons.sort_unstable();
        assert_eq!(buttons, vec![0, 3]);
        assert_eq!(state.axis_indices(), vec![1]);
        assert!(state.hat_button_indices().is_empty());
    }
}
