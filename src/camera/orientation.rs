//! Spherical decomposition of a view direction relative to a world up axis.
//!
//! A direction is parameterized by two angles in degrees: `phi` (pitch,
//! elevation above the horizontal plane) and `theta` (yaw, angle inside that
//! plane). Which vector components play the "vertical" and "horizontal"
//! roles depends on the configured up axis, so the axis is resolved once
//! into an [`UpAxis`] and every conversion dispatches on it.

use glam::Vec3;

use crate::error::FreelookError;

/// Pitch limit in degrees. Keeps the view direction from reaching the pole,
/// where the side-shift vector would degenerate.
pub const PHI_MAX: f32 = 89.0;

/// Tolerance used when matching a caller-supplied up vector to an axis.
pub const AXIS_TOLERANCE: f32 = 1e-4;

/// World axis treated as "up" by the orientation solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpAxis {
    /// `+X` is up.
    X,
    /// `+Y` is up.
    Y,
    /// `+Z` is up.
    Z,
}

impl UpAxis {
    /// Resolve an up vector to the axis it is aligned with.
    ///
    /// Only unit vectors within [`AXIS_TOLERANCE`] of `+X`, `+Y` or `+Z` are
    /// accepted. Anything else (tilted, negative or non-unit vectors) is
    /// rejected rather than silently decomposed with the wrong formula.
    ///
    /// # Errors
    ///
    /// [`FreelookError::UnsupportedUpAxis`] for any other vector.
    pub fn from_vector(up: Vec3) -> Result<Self, FreelookError> {
        if !up.is_finite() || (up.length() - 1.0).abs() > AXIS_TOLERANCE {
            return Err(FreelookError::UnsupportedUpAxis(up));
        }
        if (up.x - 1.0).abs() <= AXIS_TOLERANCE {
            Ok(Self::X)
        } else if (up.y - 1.0).abs() <= AXIS_TOLERANCE {
            Ok(Self::Y)
        } else if (up.z - 1.0).abs() <= AXIS_TOLERANCE {
            Ok(Self::Z)
        } else {
            Err(FreelookError::UnsupportedUpAxis(up))
        }
    }

    /// The exact unit vector of this axis.
    #[must_use]
    pub fn vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Rebuild a unit direction from spherical angles.
    #[must_use]
    pub fn direction(self, angles: SphericalAngles) -> Vec3 {
        let (sin_phi, cos_phi) = angles.phi.to_radians().sin_cos();
        let (sin_theta, cos_theta) = angles.theta.to_radians().sin_cos();

        match self {
            Self::X => {
                Vec3::new(sin_phi, cos_phi * cos_theta, cos_phi * sin_theta)
            }
            Self::Y => {
                Vec3::new(cos_phi * sin_theta, sin_phi, cos_phi * cos_theta)
            }
            Self::Z => {
                Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi)
            }
        }
    }

    /// Decompose a unit direction into spherical angles.
    ///
    /// Exact inverse of [`direction`](Self::direction): `theta` is recovered
    /// with `atan2` so the quadrant survives, and lands in `(-180°, 180°]`.
    /// The returned `phi` is not clamped.
    #[must_use]
    pub fn angles(self, direction: Vec3) -> SphericalAngles {
        // (along up, cos-theta component, sin-theta component)
        let (vertical, along_cos, along_sin) = match self {
            Self::X => (direction.x, direction.y, direction.z),
            Self::Y => (direction.y, direction.z, direction.x),
            Self::Z => (direction.z, direction.x, direction.y),
        };

        SphericalAngles {
            phi: vertical.clamp(-1.0, 1.0).asin().to_degrees(),
            theta: along_sin.atan2(along_cos).to_degrees(),
        }
    }
}

/// Pitch/yaw pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalAngles {
    /// Pitch: elevation above the plane orthogonal to up.
    pub phi: f32,
    /// Yaw: angle inside the plane orthogonal to up. Never wrapped.
    pub theta: f32,
}

impl SphericalAngles {
    /// Create an angle pair (degrees).
    #[must_use]
    pub fn new(phi: f32, theta: f32) -> Self {
        Self { phi, theta }
    }

    /// Copy with `theta` shifted by whole turns to lie within 180° of
    /// `reference`. Unchanged if it already does.
    #[must_use]
    pub fn unwound_near(self, reference: f32) -> Self {
        let offset = self.theta - reference;
        if offset.abs() <= 180.0 {
            return self;
        }
        Self {
            phi: self.phi,
            theta: self.theta - (offset / 360.0).round() * 360.0,
        }
    }

    /// Copy with `phi` saturated to `[-PHI_MAX, PHI_MAX]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            phi: self.phi.clamp(-PHI_MAX, PHI_MAX),
            theta: self.theta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [UpAxis; 3] = [UpAxis::X, UpAxis::Y, UpAxis::Z];

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-5), "expected {b}, got {a}");
    }

    #[test]
    fn axis_resolution() {
        assert_eq!(UpAxis::from_vector(Vec3::X).unwrap(), UpAxis::X);
        assert_eq!(UpAxis::from_vector(Vec3::Y).unwrap(), UpAxis::Y);
        assert_eq!(UpAxis::from_vector(Vec3::Z).unwrap(), UpAxis::Z);
        assert_eq!(
            UpAxis::from_vector(Vec3::new(0.0, 1.00001, 0.0)).unwrap(),
            UpAxis::Y
        );
    }

    #[test]
    fn rejects_tilted_negative_and_zero_up() {
        for up in [
            Vec3::new(0.5, 0.5, 0.707),
            Vec3::NEG_Y,
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(f32::NAN, 1.0, 0.0),
        ] {
            assert!(
                matches!(
                    UpAxis::from_vector(up),
                    Err(FreelookError::UnsupportedUpAxis(_))
                ),
                "{up} should be rejected"
            );
        }
    }

    #[test]
    fn direction_is_unit_length() {
        for axis in AXES {
            for (phi, theta) in
                [(0.0, 0.0), (45.0, 30.0), (-89.0, 725.0), (12.5, -1000.0)]
            {
                let d = axis.direction(SphericalAngles::new(phi, theta));
                assert!((d.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn zero_angles_point_along_cos_axis() {
        let zero = SphericalAngles::default();
        assert_vec_close(UpAxis::X.direction(zero), Vec3::Y);
        assert_vec_close(UpAxis::Y.direction(zero), Vec3::Z);
        assert_vec_close(UpAxis::Z.direction(zero), Vec3::X);
    }

    #[test]
    fn positive_phi_tilts_toward_up() {
        for axis in AXES {
            let d = axis.direction(SphericalAngles::new(60.0, 15.0));
            assert!(d.dot(axis.vector()) > 0.8);
        }
    }

    #[test]
    fn angles_round_trip_through_direction() {
        for axis in AXES {
            for (phi, theta) in [
                (0.0, 0.0),
                (30.0, 45.0),
                (-60.0, 170.0),
                (89.0, -120.0),
                (-89.0, -179.0),
                (10.0, 90.0),
                (-10.0, -90.0),
            ] {
                let angles = SphericalAngles::new(phi, theta);
                let back = axis.angles(axis.direction(angles));
                assert!(
                    (back.phi - phi).abs() < 1e-2
                        && (back.theta - theta).abs() < 1e-2,
                    "{axis:?}: ({phi}, {theta}) came back as {back:?}"
                );
            }
        }
    }

    #[test]
    fn direction_round_trips_through_angles() {
        let directions = [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, -3.0).normalize(),
            Vec3::new(-0.3, -0.4, 0.2).normalize(),
        ];
        for axis in AXES {
            for d in directions {
                assert_vec_close(axis.direction(axis.angles(d)), d);
            }
        }
    }

    #[test]
    fn y_up_looking_down_negative_z() {
        let angles = UpAxis::Y.angles(Vec3::NEG_Z);
        assert!(angles.phi.abs() < 1e-5);
        assert!((angles.theta.abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn straight_up_does_not_produce_nan() {
        for axis in AXES {
            let angles = axis.angles(axis.vector());
            assert!((angles.phi - 90.0).abs() < 1e-3);
            assert!(angles.theta.is_finite());
        }
    }

    #[test]
    fn clamp_saturates_phi_only() {
        let clamped = SphericalAngles::new(500.0, 1000.0).clamped();
        assert_eq!(clamped.phi, PHI_MAX);
        assert_eq!(clamped.theta, 1000.0);

        let clamped = SphericalAngles::new(-500.0, -3.0).clamped();
        assert_eq!(clamped.phi, -PHI_MAX);
        assert_eq!(clamped.theta, -3.0);
    }

    #[test]
    fn unwinding_picks_nearest_turn() {
        let principal = SphericalAngles::new(24.0, -145.0);
        assert_eq!(principal.unwound_near(215.0).theta, 215.0);
        assert_eq!(principal.unwound_near(-900.0).theta, -865.0);
        assert_eq!(principal.unwound_near(-10.0), principal);
        // Exactly half a turn away stays put.
        let half_turn = SphericalAngles::new(0.0, 180.0);
        assert_eq!(half_turn.unwound_near(0.0).theta, 180.0);
        assert_eq!(principal.unwound_near(215.0).phi, 24.0);
    }
}
