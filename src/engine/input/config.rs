// Key binding configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical key codes to logical actions.
///
/// Several keys may drive the same action; a key drives at most one action.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration (nothing bound)
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::empty();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key drove before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Unbind a single key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key, if any
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.action_to_keys
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
