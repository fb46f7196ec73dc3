use glam::{Mat4, Vec3};

use super::orientation::{SphericalAngles, UpAxis};
use crate::error::FreelookError;
use crate::options::CameraOptions;

/// Cached view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewCache {
    /// Position, target or up changed since the last build.
    Dirty,
    /// Matrix built from the current position, target and up.
    Clean(Mat4),
}

/// First-person camera steered by pitch/yaw angles relative to a world up
/// axis.
///
/// The view direction is stored as [`SphericalAngles`] and rebuilt into a
/// unit vector after every change, so it never drifts out of unit length
/// and pitch is bounded by a single clamp. The view matrix is built lazily
/// on the first [`view_matrix`](Self::view_matrix) call after a change.
#[derive(Debug, Clone)]
pub struct FreeLookCamera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    axis: UpAxis,
    orientation: Vec3,
    side_shift: Vec3,
    angles: SphericalAngles,
    sensibility: f32,
    speed: f32,
    mouse_enabled: bool,
    view: ViewCache,
}

impl FreeLookCamera {
    /// Create a camera at `position` looking toward `target`.
    ///
    /// `sensibility` is in degrees per mouse-delta unit, `speed` in world
    /// units per input tick. Mouse look starts enabled.
    ///
    /// # Errors
    ///
    /// [`FreelookError::UnsupportedUpAxis`] if `up` is not `+X`, `+Y` or
    /// `+Z`; [`FreelookError::DegenerateDirection`] if `target` equals
    /// `position`.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        sensibility: f32,
        speed: f32,
    ) -> Result<Self, FreelookError> {
        let axis = UpAxis::from_vector(up)?;

        let mut camera = Self {
            position,
            target,
            up: axis.vector(),
            axis,
            orientation: Vec3::ZERO,
            side_shift: Vec3::ZERO,
            angles: SphericalAngles::default(),
            sensibility,
            speed,
            mouse_enabled: true,
            view: ViewCache::Dirty,
        };
        camera.set_target(target)?;

        log::debug!(
            "camera at {position} looking at {target} ({axis:?} up), \
             phi={:.2} theta={:.2}",
            camera.angles.phi,
            camera.angles.theta
        );
        Ok(camera)
    }

    /// Create a camera from the `[camera]` options section.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new).
    pub fn from_options(options: &CameraOptions) -> Result<Self, FreelookError> {
        let mut camera = Self::new(
            Vec3::from_array(options.position),
            Vec3::from_array(options.target),
            Vec3::from_array(options.up),
            options.sensibility,
            options.speed,
        )?;
        camera.enable_mouse(options.mouse_enabled);
        Ok(camera)
    }

    // ── Orientation solver ───────────────────────────────────────────────

    /// Point the camera at `target`, back-deriving pitch and yaw.
    ///
    /// Pitch is clamped, and the stored target is normalized to one unit in
    /// front of the camera along the resulting view direction. Yaw is taken
    /// as the representative of the new direction nearest the current yaw,
    /// so pointing at the direction the camera already faces leaves both
    /// angles unchanged.
    ///
    /// # Errors
    ///
    /// [`FreelookError::DegenerateDirection`] if `target` equals the
    /// current position. The camera is left unchanged in that case.
    pub fn set_target(&mut self, target: Vec3) -> Result<(), FreelookError> {
        let Some(direction) = (target - self.position).try_normalize() else {
            log::warn!("rejected look target {target}: equals camera position");
            return Err(FreelookError::DegenerateDirection {
                position: self.position,
                target,
            });
        };

        self.angles = self
            .axis
            .angles(direction)
            .unwound_near(self.angles.theta)
            .clamped();
        self.apply_angles();
        Ok(())
    }

    /// Turn the camera by a relative mouse motion.
    ///
    /// Vertical motion changes pitch, horizontal motion changes yaw; both
    /// are scaled by the sensibility and subtracted, so moving the pointer
    /// down pitches the view down. Pitch saturates at
    /// [`PHI_MAX`](super::orientation::PHI_MAX); yaw accumulates unbounded.
    pub fn reorient(&mut self, dx: f32, dy: f32) {
        self.angles.phi -= dy * self.sensibility;
        self.angles.theta -= dx * self.sensibility;
        self.angles = self.angles.clamped();
        self.apply_angles();
    }

    /// Rebuild orientation, side shift and target from the stored angles.
    fn apply_angles(&mut self) {
        self.orientation = self.axis.direction(self.angles);
        // phi is clamped short of the pole, so the cross product is nonzero.
        self.side_shift = self.up.cross(self.orientation).normalize();
        self.target = self.position + self.orientation;
        self.view = ViewCache::Dirty;
    }

    // ── Setters ──────────────────────────────────────────────────────────

    /// Move the camera, keeping its view direction.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.target = self.position + self.orientation;
        self.view = ViewCache::Dirty;
    }

    /// Change the world up axis.
    ///
    /// The current view direction is re-expressed as angles relative to the
    /// new axis. If it lies within `90° - PHI_MAX` of the new pole, pitch is
    /// clamped and the direction moves accordingly.
    ///
    /// # Errors
    ///
    /// [`FreelookError::UnsupportedUpAxis`] if `up` is not `+X`, `+Y` or
    /// `+Z`. The camera is left unchanged in that case.
    pub fn set_up(&mut self, up: Vec3) -> Result<(), FreelookError> {
        let axis = UpAxis::from_vector(up)?;
        if axis != self.axis {
            log::debug!("camera up axis {:?} -> {axis:?}", self.axis);
        }

        self.axis = axis;
        self.up = axis.vector();
        self.angles = axis.angles(self.orientation).clamped();
        self.apply_angles();
        Ok(())
    }

    /// Set the mouse sensibility (degrees per mouse-delta unit).
    pub fn set_sensibility(&mut self, sensibility: f32) {
        self.sensibility = sensibility;
    }

    /// Set the movement speed (world units per input tick).
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Enable or disable mouse look in [`advance`](Self::advance).
    pub fn enable_mouse(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    // ── Lazy view matrix ─────────────────────────────────────────────────

    /// World-to-eye transform for the current position, target and up.
    ///
    /// Rebuilt only if something changed since the previous call.
    pub fn view_matrix(&mut self) -> Mat4 {
        match self.view {
            ViewCache::Clean(view) => view,
            ViewCache::Dirty => {
                let view = Mat4::look_at_rh(self.position, self.target, self.up);
                self.view = ViewCache::Clean(view);
                view
            }
        }
    }

    /// Whether the next [`view_matrix`](Self::view_matrix) call rebuilds.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.view == ViewCache::Dirty
    }

    // ── Getters ──────────────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at point, one unit ahead of the eye.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// World up vector (exact unit axis).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World axis used as up.
    #[must_use]
    pub fn up_axis(&self) -> UpAxis {
        self.axis
    }

    /// Unit view direction.
    #[must_use]
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Unit strafe axis, `normalize(up × orientation)`. Strafing left moves
    /// along it, strafing right against it.
    #[must_use]
    pub fn side_shift(&self) -> Vec3 {
        self.side_shift
    }

    /// Pitch and yaw in degrees.
    #[must_use]
    pub fn angles(&self) -> SphericalAngles {
        self.angles
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.angles.phi
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.angles.theta
    }

    /// Mouse sensibility (degrees per mouse-delta unit).
    #[must_use]
    pub fn sensibility(&self) -> f32 {
        self.sensibility
    }

    /// Movement speed (world units per input tick).
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether mouse motion turns the camera in
    /// [`advance`](Self::advance).
    #[must_use]
    pub fn is_mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }
}
