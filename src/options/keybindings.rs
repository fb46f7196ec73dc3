use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"ArrowUp"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "ArrowUp".into()),
            (KeyAction::MoveBackward, "ArrowDown".into()),
            (KeyAction::StrafeLeft, "ArrowLeft".into()),
            (KeyAction::StrafeRight, "ArrowRight".into()),
            (KeyAction::Ascend, "ShiftRight".into()),
            (KeyAction::Descend, "ControlRight".into()),
            (KeyAction::ToggleMouseLook, "KeyM".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        // Eight entries at most; a reverse map is not worth keeping in sync.
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Add the default key for every action missing from the table.
    ///
    /// A TOML file that overrides one binding replaces the whole table, so
    /// this runs after loading. Defaults whose key is already taken by
    /// another action are skipped.
    pub fn fill_missing_defaults(&mut self) {
        for (action, key) in Self::default().bindings {
            if self.bindings.contains_key(&action) || self.lookup(&key).is_some()
            {
                continue;
            }
            let _ = self.bindings.insert(action, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_default_key() {
        let bindings = KeybindingOptions::default();
        for action in KeyAction::ALL {
            assert!(bindings.key_for(action).is_some(), "{action:?} unbound");
        }
    }

    #[test]
    fn fill_keeps_overrides_and_skips_taken_keys() {
        let mut bindings = KeybindingOptions {
            bindings: HashMap::from([
                (KeyAction::MoveForward, "KeyW".into()),
                // Steals the default key of MoveBackward.
                (KeyAction::Quit, "ArrowDown".into()),
            ]),
        };

        bindings.fill_missing_defaults();

        assert_eq!(bindings.key_for(KeyAction::MoveForward), Some("KeyW"));
        assert_eq!(bindings.key_for(KeyAction::Quit), Some("ArrowDown"));
        assert_eq!(bindings.key_for(KeyAction::MoveBackward), None);
        assert_eq!(bindings.key_for(KeyAction::Ascend), Some("ShiftRight"));
        assert_eq!(bindings.lookup("ArrowDown"), Some(KeyAction::Quit));
    }
}
