use std::collections::HashSet;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::snapshot::FrameInput;
use crate::options::KeybindingOptions;

/// Tracks held keys and buttons, the cursor, and relative mouse motion for
/// the current frame.
///
/// Call [`begin_frame`](Self::begin_frame) before feeding a frame's events;
/// it clears the accumulated motion but keeps held keys and buttons.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed_keys: HashSet<String>,
    pressed_buttons: HashSet<MouseButton>,
    cursor: (i32, i32),
    mouse_delta: (i32, i32),
}

impl InputState {
    /// Create an input state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame mouse motion.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = (0, 0);
    }

    /// Apply one platform event.
    ///
    /// Relative motion accumulates across all motion events of the frame.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key, pressed: true } => {
                let _ = self.pressed_keys.insert(key.clone());
            }
            InputEvent::Key {
                key,
                pressed: false,
            } => {
                let _ = self.pressed_keys.remove(key);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.pressed_buttons.insert(*button);
                } else {
                    let _ = self.pressed_buttons.remove(button);
                }
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (*x, *y);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta.0 = self.mouse_delta.0.saturating_add(*dx);
                self.mouse_delta.1 = self.mouse_delta.1.saturating_add(*dy);
            }
        }
    }

    /// Whether a physical key is held.
    #[must_use]
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Whether a mouse button is held.
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Whether the key bound to `action` is held.
    #[must_use]
    pub fn is_action_pressed(
        &self,
        action: KeyAction,
        bindings: &KeybindingOptions,
    ) -> bool {
        bindings
            .key_for(action)
            .is_some_and(|key| self.is_key_pressed(key))
    }

    /// Last absolute cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Relative mouse motion accumulated this frame.
    #[must_use]
    pub fn mouse_delta(&self) -> (i32, i32) {
        self.mouse_delta
    }

    /// Whether the mouse moved this frame.
    #[must_use]
    pub fn mouse_moved(&self) -> bool {
        self.mouse_delta != (0, 0)
    }

    /// Resolve the current state into a camera snapshot through the key
    /// bindings.
    #[must_use]
    pub fn snapshot(&self, bindings: &KeybindingOptions) -> FrameInput {
        let mut input = FrameInput::default()
            .with_mouse_delta(self.mouse_delta.0, self.mouse_delta.1);
        for action in KeyAction::ALL {
            if let Some(movement) = action.movement() {
                input.set_active(
                    movement,
                    self.is_action_pressed(action, bindings),
                );
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputSnapshot, Movement};

    #[test]
    fn keys_stay_held_across_frames() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::key_down("ArrowUp"));
        state.begin_frame();
        assert!(state.is_key_pressed("ArrowUp"));

        state.handle_event(&InputEvent::key_up("ArrowUp"));
        assert!(!state.is_key_pressed("ArrowUp"));
    }

    #[test]
    fn motion_accumulates_then_resets() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::MouseMotion { dx: 3, dy: -1 });
        state.handle_event(&InputEvent::MouseMotion { dx: 2, dy: -4 });
        assert_eq!(state.mouse_delta(), (5, -5));
        assert!(state.mouse_moved());

        state.begin_frame();
        assert_eq!(state.mouse_delta(), (0, 0));
        assert!(!state.mouse_moved());
    }

    #[test]
    fn cursor_and_buttons() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::CursorMoved { x: 640, y: 360 });
        state.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(state.cursor(), (640, 360));
        assert!(state.is_button_pressed(MouseButton::Right));
        assert!(!state.is_button_pressed(MouseButton::Left));
        // Absolute cursor moves are not relative motion.
        assert!(!state.mouse_moved());
    }

    #[test]
    fn snapshot_resolves_bindings() {
        let bindings = KeybindingOptions::default();
        let mut state = InputState::new();
        state.handle_event(&InputEvent::key_down("ArrowUp"));
        state.handle_event(&InputEvent::key_down("ShiftRight"));
        state.handle_event(&InputEvent::key_down("KeyZ"));
        state.handle_event(&InputEvent::MouseMotion { dx: -7, dy: 2 });

        let snapshot = state.snapshot(&bindings);

        assert!(snapshot.is_active(Movement::Forward));
        assert!(snapshot.is_active(Movement::Ascend));
        assert!(!snapshot.is_active(Movement::Backward));
        assert!(!snapshot.is_active(Movement::Descend));
        assert_eq!(snapshot.mouse_delta(), (-7, 2));
    }

    #[test]
    fn discrete_actions_use_bindings() {
        let bindings = KeybindingOptions::default();
        let mut state = InputState::new();
        assert!(!state.is_action_pressed(KeyAction::Quit, &bindings));
        state.handle_event(&InputEvent::key_down("Escape"));
        assert!(state.is_action_pressed(KeyAction::Quit, &bindings));
    }

    #[test]
    fn discrete_actions_never_move() {
        let bindings = KeybindingOptions::default();
        let mut state = InputState::new();
        state.handle_event(&InputEvent::key_down("KeyM"));
        state.handle_event(&InputEvent::key_down("Escape"));

        let snapshot = state.snapshot(&bindings);

        assert!(Movement::ALL.iter().all(|&m| !snapshot.is_active(m)));
    }
}
