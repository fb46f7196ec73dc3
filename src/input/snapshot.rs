//! The per-tick input contract consumed by
//! [`FreeLookCamera::advance`](crate::camera::core::FreeLookCamera::advance).

/// One of the six directional movements a camera can integrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Along the side-shift axis.
    StrafeLeft,
    /// Against the side-shift axis.
    StrafeRight,
    /// Along world up.
    Ascend,
    /// Against world up.
    Descend,
}

impl Movement {
    /// All movements.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::Ascend,
        Self::Descend,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Read-only view of the input sampled for one tick.
pub trait InputSnapshot {
    /// Whether `movement` is requested this tick.
    fn is_active(&self, movement: Movement) -> bool;

    /// Relative mouse motion since the previous tick, `(dx, dy)`.
    fn mouse_delta(&self) -> (i32, i32);

    /// Whether the mouse moved since the previous tick.
    fn mouse_moved(&self) -> bool {
        self.mouse_delta() != (0, 0)
    }
}

/// Owned input snapshot for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    movements: u8,
    mouse_delta: (i32, i32),
}

impl FrameInput {
    /// Copy with `movement` marked active.
    #[must_use]
    pub fn with(mut self, movement: Movement) -> Self {
        self.set_active(movement, true);
        self
    }

    /// Copy with the given relative mouse motion.
    #[must_use]
    pub fn with_mouse_delta(mut self, dx: i32, dy: i32) -> Self {
        self.mouse_delta = (dx, dy);
        self
    }

    /// Mark `movement` active or inactive.
    pub fn set_active(&mut self, movement: Movement, active: bool) {
        if active {
            self.movements |= movement.bit();
        } else {
            self.movements &= !movement.bit();
        }
    }
}

impl InputSnapshot for FrameInput {
    fn is_active(&self, movement: Movement) -> bool {
        self.movements & movement.bit() != 0
    }

    fn mouse_delta(&self) -> (i32, i32) {
        self.mouse_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let input = FrameInput::default();
        assert!(Movement::ALL.iter().all(|&m| !input.is_active(m)));
        assert!(!input.mouse_moved());
    }

    #[test]
    fn movements_are_independent() {
        let mut input = FrameInput::default()
            .with(Movement::Forward)
            .with(Movement::Descend);
        assert!(input.is_active(Movement::Forward));
        assert!(input.is_active(Movement::Descend));
        assert!(!input.is_active(Movement::Backward));

        input.set_active(Movement::Forward, false);
        assert!(!input.is_active(Movement::Forward));
        assert!(input.is_active(Movement::Descend));
    }

    #[test]
    fn any_nonzero_axis_counts_as_motion() {
        assert!(FrameInput::default().with_mouse_delta(0, -1).mouse_moved());
        assert!(FrameInput::default().with_mouse_delta(3, 0).mouse_moved());
    }
}
