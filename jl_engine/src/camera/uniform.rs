/// CameraUniform — GPU-ready camera block.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Camera data laid out for a std140/std430 uniform buffer.
///
/// `eye` is padded to a Vec4 (w = 1.0).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub eye: Vec4,
}

impl CameraUniform {
    pub fn new(view: &Mat4, projection: &Mat4, eye: Vec3) -> Self {
        Self {
            view: *view,
            projection: *projection,
            view_projection: *projection * *view,
            eye: eye.extend(1.0),
        }
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
