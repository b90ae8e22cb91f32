/// Transform — a single 4x4 matrix slot.
///
/// Cameras keep their projection and view in Transforms so that callers
/// can read them uniformly and replace the matrix in one place.

use glam::{Mat4, Vec3};

/// Holder for one affine or projective 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    pub fn new() -> Self {
        Self { matrix: Mat4::IDENTITY }
    }

    /// Transform wrapping an existing matrix.
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Replace the stored matrix.
    pub fn set_transform(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }

    /// Stored matrix.
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Inverse of the stored matrix.
    pub fn inverse(&self) -> Mat4 {
        self.matrix.inverse()
    }

    /// Apply the matrix to a point, with perspective divide.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix.project_point3(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
