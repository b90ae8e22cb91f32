/// Camera — perspective projection and look-at view.
///
/// Holds the scalar parameters (fov, aspect, clip planes, eye/target/up)
/// and the two matrices derived from them. Every setter validates its
/// input first and leaves the camera untouched on error.
///
/// The aspect ratio is NOT tied to the display: after a display resize
/// the owner must call `set_aspect_ratio` explicitly.

use glam::{Mat4, Vec3};
use crate::display::Display;
use crate::error::Result;
use crate::engine_bail;
use crate::math::Transform;
use super::camera_config::{CameraConfig, DepthRange};
use super::frustum::Frustum;
use super::uniform::CameraUniform;

/// Minimum squared length for look-at direction and up/forward cross product
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    perspective: Transform,
    view: Transform,
    fov: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    depth_range: DepthRange,
}

impl Camera {
    /// Create a camera with default parameters, sized to the display.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the display height is zero.
    pub fn new(display: &Display) -> Result<Self> {
        Self::with_config(CameraConfig::default(), display)
    }

    /// Create a camera from a config, sized to the display.
    pub fn with_config(config: CameraConfig, display: &Display) -> Result<Self> {
        let aspect = display.aspect_ratio()?;
        Self::from_aspect(config, aspect)
    }

    /// Create a camera from a config and an explicit aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any parameter is out of range.
    pub fn from_aspect(config: CameraConfig, aspect: f32) -> Result<Self> {
        validate_fov(config.fov_degrees)?;
        validate_clip_planes(config.z_near, config.z_far)?;
        validate_aspect(aspect)?;
        validate_look_at(config.eye, config.target, config.up)?;

        let mut camera = Self {
            perspective: Transform::new(),
            view: Transform::new(),
            fov: config.fov_degrees,
            aspect,
            z_near: config.z_near,
            z_far: config.z_far,
            eye: config.eye,
            target: config.target,
            up: config.up,
            depth_range: config.depth_range,
        };
        camera.update_perspective();
        camera.update_view();

        crate::engine_debug!("jlengine::Camera",
            "Camera created (fov {}°, aspect {:.4}, near {}, far {})",
            camera.fov, camera.aspect, camera.z_near, camera.z_far);

        Ok(camera)
    }

    // ===== PROJECTION =====

    /// Recompute the projection matrix from the current fov, aspect and clip planes.
    pub fn update_perspective(&mut self) {
        let fov = self.fov.to_radians();
        let matrix = match self.depth_range {
            DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(fov, self.aspect, self.z_near, self.z_far),
            DepthRange::ZeroToOne => Mat4::perspective_rh(fov, self.aspect, self.z_near, self.z_far),
        };
        self.perspective.set_transform(matrix);
    }

    /// Set the aspect ratio to `width / height` and recompute the projection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless both sides are positive and the
    /// ratio is finite.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) -> Result<()> {
        if !(width > 0.0 && height > 0.0) {
            engine_bail!("jlengine::Camera", InvalidParameter,
                "Aspect ratio sides must be positive, got {}x{}", width, height);
        }
        let aspect = width / height;
        validate_aspect(aspect)?;

        self.aspect = aspect;
        self.update_perspective();
        Ok(())
    }

    /// Set the vertical field of view (degrees) and recompute the projection.
    pub fn set_fov(&mut self, degrees: f32) -> Result<()> {
        validate_fov(degrees)?;
        self.fov = degrees;
        self.update_perspective();
        Ok(())
    }

    /// Set the near/far clip planes and recompute the projection.
    pub fn set_clip_planes(&mut self, z_near: f32, z_far: f32) -> Result<()> {
        validate_clip_planes(z_near, z_far)?;
        self.z_near = z_near;
        self.z_far = z_far;
        self.update_perspective();
        Ok(())
    }

    /// Switch the clip-space depth convention and recompute the projection.
    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        self.depth_range = depth_range;
        self.update_perspective();
    }

    // ===== VIEW =====

    /// Point the camera from `eye` toward `target` and recompute the view.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if eye and target coincide or if `up`
    /// is parallel to the viewing direction.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        validate_look_at(eye, target, up)?;
        self.eye = eye;
        self.target = target;
        self.up = up;
        self.update_view();
        Ok(())
    }

    fn update_view(&mut self) {
        self.view.set_transform(Mat4::look_at_rh(self.eye, self.target, self.up));
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width / height ratio used by the projection.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Near clip plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Far clip plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look target.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Clip-space depth convention.
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Projection transform.
    pub fn perspective(&self) -> &Transform {
        &self.perspective
    }

    /// View transform.
    pub fn view(&self) -> &Transform {
        &self.view
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        self.perspective.matrix()
    }

    /// View matrix.
    pub fn view_matrix(&self) -> &Mat4 {
        self.view.matrix()
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        *self.perspective.matrix() * *self.view.matrix()
    }

    /// Frustum planes of the current view-projection, for culling.
    pub fn frustum(&self) -> Frustum {
        let vp = self.view_projection_matrix();
        match self.depth_range {
            DepthRange::NegativeOneToOne => Frustum::from_view_projection(&vp),
            DepthRange::ZeroToOne => Frustum::from_view_projection_zero_to_one(&vp),
        }
    }

    /// Uniform block for GPU upload.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(self.view_matrix(), self.projection_matrix(), self.eye)
    }
}

// ===== VALIDATION =====

fn validate_fov(degrees: f32) -> Result<()> {
    if !(degrees > 0.0 && degrees < 180.0) {
        engine_bail!("jlengine::Camera", InvalidParameter,
            "Field of view must be in (0, 180) degrees, got {}", degrees);
    }
    Ok(())
}

fn validate_clip_planes(z_near: f32, z_far: f32) -> Result<()> {
    if !(z_near > 0.0 && z_near.is_finite() && z_far.is_finite() && z_near < z_far) {
        engine_bail!("jlengine::Camera", InvalidParameter,
            "Clip planes must satisfy 0 < near < far, got near {} far {}", z_near, z_far);
    }
    Ok(())
}

fn validate_aspect(aspect: f32) -> Result<()> {
    if !(aspect > 0.0 && aspect.is_finite()) {
        engine_bail!("jlengine::Camera", InvalidParameter,
            "Aspect ratio must be positive and finite, got {}", aspect);
    }
    Ok(())
}

fn validate_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
    let direction = target - eye;
    if direction.length_squared() <= DEGENERATE_EPSILON {
        engine_bail!("jlengine::Camera", InvalidParameter,
            "Look-at eye and target coincide at {}", eye);
    }
    if direction.cross(up).length_squared() <= DEGENERATE_EPSILON {
        engine_bail!("jlengine::Camera", InvalidParameter,
            "Up vector {} is parallel to the view direction {}", up, direction);
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
