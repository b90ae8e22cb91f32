/// Frustum — six clipping planes for visibility tests.
///
/// Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the unit
/// inward-pointing normal and D the signed distance. A point P is
/// inside when dot(plane, (P, 1)) >= 0 for all six planes.

use glam::{Mat4, Vec3, Vec4};
use crate::math::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract planes from a view-projection matrix with NDC z in [-1, 1].
    ///
    /// Gribb & Hartmann: planes are sums/differences of matrix rows.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let [r0, r1, r2, r3] = rows(vp);
        Self::normalized([r3 + r0, r3 - r0, r3 + r1, r3 - r1, r3 + r2, r3 - r2])
    }

    /// Extract planes from a view-projection matrix with NDC z in [0, 1].
    ///
    /// Same as `from_view_projection` except the near plane is row 2 alone.
    pub fn from_view_projection_zero_to_one(vp: &Mat4) -> Self {
        let [r0, r1, r2, r3] = rows(vp);
        Self::normalized([r3 + r0, r3 - r0, r3 + r1, r3 - r1, r2, r3 - r2])
    }

    fn normalized(mut planes: [Vec4; 6]) -> Self {
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }
        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`. Use the `PLANE_*` constants.
    pub fn distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    /// True if the point is inside or on the frustum boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..6).all(|i| self.distance(i, point) >= 0.0)
    }

    /// True if the sphere is at least partially inside.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        (0..6).all(|i| self.distance(i, center) >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Positive-vertex test: conservative, may report false positives
    /// near frustum corners but never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();

            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }

        true
    }
}

fn rows(m: &Mat4) -> [Vec4; 4] {
    [m.row(0), m.row(1), m.row(2), m.row(3)]
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
