//! Listener subscriptions and the mapping-observer slot.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::error;

use emupad_types::{InputType, MappingData, PadIdentifier};

/// Zero-argument notifier invoked when a watched input changes.
pub type InputCallback = Arc<dyn Fn() + Send + Sync>;

/// Observer for detected bindings while the engine is configuring.
pub type MappingCallback = Arc<dyn Fn(MappingData) + Send + Sync>;

/// One listener subscription: which input to watch, and what to call when
/// it changes. Owned by the registry; callers keep only the integer key
/// returned on registration.
#[derive(Clone)]
pub struct InputIdentifier {
    pub identifier: PadIdentifier,
    pub input_type: InputType,
    pub index: usize,
    pub callback: Option<InputCallback>,
}

impl InputIdentifier {
    /// Whether this subscription watches the given (device, kind, index).
    pub fn matches(&self, identifier: &PadIdentifier, input_type: InputType, index: usize) -> bool {
        self.input_type == input_type && self.index == index && self.identifier == *identifier
    }
}

impl std::fmt::Debug for InputIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputIdentifier")
            .field("identifier", &self.identifier)
            .field("input_type", &self.input_type)
            .field("index", &self.index)
            .field("callback", &self.callback.as_ref().map(|_| ".."))
            .finish()
    }
}

/// All live subscriptions plus the single mapping observer.
#[derive(Default)]
pub(crate) struct CallbackRegistry {
    callbacks: HashMap<usize, InputIdentifier>,
    mapping_callback: Option<MappingCallback>,
    last_key: usize,
}

impl CallbackRegistry {
    /// Store a subscription under the next key. Keys increase monotonically
    /// and are never reused, even after deletion.
    pub fn set_callback(&mut self, input_identifier: InputIdentifier) -> usize {
        let key = self.last_key;
        self.callbacks.insert(key, input_identifier);
        self.last_key += 1;
        key
    }

    /// Remove a subscription. Unknown keys are logged and ignored.
    pub fn delete_callback(&mut self, key: usize) {
        if self.callbacks.remove(&key).is_none() {
            error!("Tried to delete non-existent callback {}", key);
        }
    }

    /// Replace (or clear) the mapping observer.
    pub fn set_mapping_callback(&mut self, callback: Option<MappingCallback>) {
        self.mapping_callback = callback;
    }

    /// Clone out the notifiers of every subscription matching the event, so
    /// they can be invoked after the registry lock is released.
    pub fn matching_notifiers(
        &self,
        identifier: &PadIdentifier,
        input_type: InputType,
        index: usize,
    ) -> Vec<InputCallback> {
        self.callbacks
            .values()
            .filter(|sub| sub.matches(identifier, input_type, index))
            .filter_map(|sub| sub.callback.clone())
            .collect()
    }

    pub fn mapping_observer(&self) -> Option<MappingCallback> {
        self.mapping_callback.clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }
}
