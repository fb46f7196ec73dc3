use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Frame-loop parameters for the headless demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Demo", inline)]
#[serde(default)]
pub struct DemoOptions {
    /// Number of frames to simulate before exiting.
    #[schemars(title = "Frames", range(min = 1, max = 100_000))]
    pub frames: u32,
    /// Frame-rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Simulated viewport width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Simulated viewport height in pixels.
    #[schemars(skip)]
    pub height: u32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            target_fps: 60,
            width: 1280,
            height: 720,
        }
    }
}
