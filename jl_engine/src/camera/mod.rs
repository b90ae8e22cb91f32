//! Camera module — perspective/view camera, frustum, and GPU uniform block.
//!
//! A Camera is a plain value. It never reaches into engine globals:
//! it is built from a `Display` (or an explicit aspect ratio) and is
//! made active by handing it to a `RenderManager`.

mod camera;
mod camera_config;
mod frustum;
mod uniform;

pub use camera::Camera;
pub use camera_config::{CameraConfig, DepthRange};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use uniform::CameraUniform;
