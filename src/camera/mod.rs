//! Free-look camera for first-person navigation.
//!
//! Converts per-frame input into pitch/yaw angles relative to a world up
//! axis, integrates movement along the resulting basis, and caches the
//! view matrix until the camera changes.

/// Movement integration from input snapshots.
pub mod controller;
/// The camera entity, its setters and the lazy view-matrix cache.
pub mod core;
/// Axis-adaptive conversion between view directions and spherical angles.
pub mod orientation;
/// Perspective projection parameters and the GPU camera uniform.
pub mod projection;
