use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose, control gains and projection parameters.
pub struct CameraOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial look-at point. Must differ from `position`.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// World up axis: `[1, 0, 0]`, `[0, 1, 0]` or `[0, 0, 1]`.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Mouse look gain in degrees per mouse-delta unit.
    #[schemars(title = "Mouse Sensibility", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub sensibility: f32,
    /// Movement per input tick in world units.
    #[schemars(title = "Move Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub speed: f32,
    /// Whether mouse motion turns the camera.
    #[schemars(title = "Mouse Look")]
    pub mouse_enabled: bool,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [21.0, 11.0, 20.0],
            target: [13.0, 1.0, 11.0],
            up: [0.0, 1.0, 0.0],
            sensibility: 0.2,
            speed: 0.5,
            mouse_enabled: true,
            fovy: 70.0,
            znear: 1.0,
            zfar: 100.0,
        }
    }
}
