//! Render module — camera ownership and active-camera selection.

mod render_manager;

pub use render_manager::{RenderManager, CameraKey};
