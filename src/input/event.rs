/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState), which keeps
/// the pressed-key table and the per-frame mouse motion.
///
/// # Example
///
/// ```ignore
/// input.begin_frame();
/// input.handle_event(&InputEvent::MouseMotion { dx: 4, dy: -2 });
/// camera.advance(&input.snapshot(&options.keybindings));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`, `"ShiftRight"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: i32,
        /// Vertical position in physical pixels.
        y: i32,
    },
    /// Relative pointer motion, independent of the cursor position (raw
    /// device motion, or the delta reported with a grabbed pointer).
    MouseMotion {
        /// Horizontal delta, positive to the right.
        dx: i32,
        /// Vertical delta, positive downward.
        dy: i32,
    },
}

impl InputEvent {
    /// Key press event.
    #[must_use]
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: true,
        }
    }

    /// Key release event.
    #[must_use]
    pub fn key_up(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: false,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
