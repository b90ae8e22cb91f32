/// Render manager — owns cameras and tracks which one is active.
///
/// Cameras are stored in a SlotMap so a `CameraKey` stays valid while
/// other cameras come and go. Activation is explicit: callers pass the
/// manager around instead of reaching into a global.

use slotmap::{SlotMap, new_key_type};
use rustc_hash::FxHashMap;
use crate::camera::Camera;
use crate::display::Display;
use crate::error::Result;
use crate::engine_bail;

new_key_type! {
    /// Stable key for a Camera within a RenderManager.
    pub struct CameraKey;
}

/// Camera registry with a single active camera.
pub struct RenderManager {
    cameras: SlotMap<CameraKey, Camera>,
    names: FxHashMap<String, CameraKey>,
    active_camera: Option<CameraKey>,
}

impl RenderManager {
    /// Create an empty render manager (no active camera)
    pub fn new() -> Self {
        Self {
            cameras: SlotMap::with_key(),
            names: FxHashMap::default(),
            active_camera: None,
        }
    }

    // ===== CAMERA CREATION =====

    /// Build a default camera sized to `display` and make it active.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the display height is zero.
    pub fn create_camera(&mut self, display: &Display) -> Result<CameraKey> {
        let camera = Camera::new(display)?;
        let key = self.add_camera(camera);
        self.use_camera(key)?;
        Ok(key)
    }

    /// Store a camera without activating it.
    pub fn add_camera(&mut self, camera: Camera) -> CameraKey {
        self.cameras.insert(camera)
    }

    /// Store a camera under a unique name, without activating it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if the name is already taken.
    pub fn add_named_camera(&mut self, name: &str, camera: Camera) -> Result<CameraKey> {
        if self.names.contains_key(name) {
            engine_bail!("jlengine::RenderManager", InvalidResource,
                "Camera '{}' already exists", name);
        }
        let key = self.cameras.insert(camera);
        self.names.insert(name.to_string(), key);
        Ok(key)
    }

    /// Key of a named camera.
    pub fn camera_key(&self, name: &str) -> Option<CameraKey> {
        self.names.get(name).copied()
    }

    // ===== ACTIVE CAMERA =====

    /// Make `key` the active camera.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if the key does not name a stored camera.
    pub fn use_camera(&mut self, key: CameraKey) -> Result<()> {
        if !self.cameras.contains_key(key) {
            engine_bail!("jlengine::RenderManager", InvalidResource,
                "Cannot activate unknown camera {:?}", key);
        }
        self.active_camera = Some(key);
        crate::engine_debug!("jlengine::RenderManager", "Active camera set to {:?}", key);
        Ok(())
    }

    /// Key of the active camera.
    pub fn active_camera_key(&self) -> Option<CameraKey> {
        self.active_camera
    }

    /// The active camera, if any.
    pub fn active_camera(&self) -> Option<&Camera> {
        self.active_camera.and_then(|key| self.cameras.get(key))
    }

    /// Mutable access to the active camera.
    pub fn active_camera_mut(&mut self) -> Option<&mut Camera> {
        self.active_camera.and_then(|key| self.cameras.get_mut(key))
    }

    // ===== ACCESS / REMOVAL =====

    pub fn camera(&self, key: CameraKey) -> Option<&Camera> {
        self.cameras.get(key)
    }

    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut Camera> {
        self.cameras.get_mut(key)
    }

    /// Remove a camera. Clears the active selection and name if they pointed at it.
    pub fn remove_camera(&mut self, key: CameraKey) -> Option<Camera> {
        let camera = self.cameras.remove(key)?;
        if self.active_camera == Some(key) {
            crate::engine_warn!("jlengine::RenderManager",
                "Active camera {:?} removed, no camera is active", key);
            self.active_camera = None;
        }
        self.names.retain(|_, k| *k != key);
        Some(camera)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Remove all cameras
    pub fn clear(&mut self) {
        self.cameras.clear();
        self.names.clear();
        self.active_camera = None;
    }

    // ===== RESIZE =====

    /// Set every camera's aspect ratio to `width / height`.
    ///
    /// Explicit counterpart to a display resize: nothing calls this
    /// automatically. The size is validated once up front, so either every
    /// camera is updated or none is.
    pub fn resize_cameras(&mut self, width: f32, height: f32) -> Result<()> {
        if !(width > 0.0 && height > 0.0 && (width / height).is_finite()) {
            engine_bail!("jlengine::RenderManager", InvalidParameter,
                "Cannot resize cameras to {}x{}", width, height);
        }
        for camera in self.cameras.values_mut() {
            camera.set_aspect_ratio(width, height)?;
        }
        Ok(())
    }
}

impl Default for RenderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "render_manager_tests.rs"]
mod tests;
