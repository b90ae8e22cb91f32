/// Camera creation parameters and clip-space conventions.

use glam::Vec3;

/// Clip-space depth convention used to build the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// OpenGL convention: NDC z in [-1, 1]
    #[default]
    NegativeOneToOne,
    /// Vulkan / Direct3D convention: NDC z in [0, 1]
    ZeroToOne,
}

/// Initial camera parameters.
///
/// Defaults: 90° vertical fov, near 0.1, far 100.0, eye at the origin
/// looking toward +Z with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane distance
    pub z_near: f32,
    /// Far clip plane distance
    pub z_far: f32,
    /// Eye position
    pub eye: Vec3,
    /// Look target
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Clip-space depth convention
    pub depth_range: DepthRange,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            z_near: 0.1,
            z_far: 100.0,
            eye: Vec3::ZERO,
            target: Vec3::new(0.0, 0.0, 3.0),
            up: Vec3::Y,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}
