//! Input handling: platform-agnostic events, the per-frame input state,
//! and the snapshot contract the camera consumes.

/// Platform-agnostic input events.
pub mod event;
/// Bindable application actions.
pub mod keyboard;
pub mod snapshot;
/// Held keys/buttons and per-frame mouse motion.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use snapshot::{FrameInput, InputSnapshot, Movement};
pub use state::InputState;
