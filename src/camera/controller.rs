use glam::Vec3;

use super::core::FreeLookCamera;
use crate::input::{InputSnapshot, Movement};

impl FreeLookCamera {
    /// Integrate one input tick.
    ///
    /// Mouse motion (when enabled) is applied first, so translation follows
    /// the updated view direction. Each active movement then contributes
    /// `speed` along its axis; simultaneous movements add up without
    /// normalization.
    pub fn advance(&mut self, input: &impl InputSnapshot) {
        if self.is_mouse_enabled() && input.mouse_moved() {
            let (dx, dy) = input.mouse_delta();
            self.reorient(dx as f32, dy as f32);
        }

        let step = Movement::ALL
            .into_iter()
            .filter(|&movement| input.is_active(movement))
            .fold(Vec3::ZERO, |step, movement| {
                step + self.movement_axis(movement) * self.speed()
            });

        // Also re-anchors the target and marks the view dirty.
        self.set_position(self.position() + step);
    }

    /// Signed unit axis a movement travels along.
    #[must_use]
    pub fn movement_axis(&self, movement: Movement) -> Vec3 {
        match movement {
            Movement::Forward => self.orientation(),
            Movement::Backward => -self.orientation(),
            Movement::StrafeLeft => self.side_shift(),
            Movement::StrafeRight => -self.side_shift(),
            Movement::Ascend => self.up(),
            Movement::Descend => -self.up(),
        }
    }
}
