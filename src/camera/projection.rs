use glam::Mat4;

use super::core::FreeLookCamera;
use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Create a projection from explicit parameters.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Projection with the options' field of view and clip planes and a
    /// square aspect; call [`resize`](Self::resize) once the viewport is
    /// known.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self::new(options.fovy, 1.0, options.znear, options.zfar)
    }

    /// Update the aspect ratio for a viewport size in pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

/// GPU uniform buffer holding the camera transforms and metadata.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// World-to-eye matrix.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Unit view direction.
    pub forward: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 70.0,
            forward: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the camera and projection.
    ///
    /// Takes the camera mutably because reading its view matrix may
    /// rebuild the cached transform.
    pub fn update(&mut self, camera: &mut FreeLookCamera, projection: &Projection) {
        let view = camera.view_matrix();
        self.view_proj = (projection.matrix() * view).to_cols_array_2d();
        self.view = view.to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = projection.fovy;
        self.forward = camera.orientation().to_array();
        self.aspect = projection.aspect;
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;

    #[test]
    fn resize_sets_aspect_and_guards_zero() {
        let mut projection = Projection::new(70.0, 1.0, 1.0, 100.0);
        projection.resize(1280, 720);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);

        projection.resize(0, 0);
        assert_eq!(projection.aspect, 1.0);
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let projection = Projection::new(70.0, 1.5, 1.0, 100.0);
        let m = projection.matrix();

        let near = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_reflects_camera_state() {
        let mut camera =
            FreeLookCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 0.2, 1.0)
                .unwrap();
        let projection = Projection::new(60.0, 2.0, 0.5, 50.0);
        let mut uniform = CameraUniform::new();

        uniform.update(&mut camera, &projection);

        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.forward, camera.orientation().to_array());
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.fovy, 60.0);
        assert_eq!(uniform.aspect, 2.0);
        assert!(!camera.is_dirty());
    }

    #[test]
    fn uniform_is_plain_old_data() {
        let uniform = CameraUniform::new();
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), size_of::<CameraUniform>());
        assert_eq!(bytes.len(), 160);
    }
}
