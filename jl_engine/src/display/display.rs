/// Display — size and title of the render surface.
///
/// The display only records its dimensions. Resizing it does NOT update
/// any camera: the owner must call `Camera::set_aspect_ratio` (or
/// `RenderManager::resize_cameras`) explicitly.

use winit::dpi::PhysicalSize;
use winit::window::Window;
use crate::error::Result;
use crate::engine_bail;

/// Display creation parameters
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Whether the window can be resized by the user
    pub resizable: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "JLE_APP".to_string(),
            resizable: false,
        }
    }
}

/// Render surface description.
#[derive(Debug, Clone)]
pub struct Display {
    width: u32,
    height: u32,
    title: String,
    resizable: bool,
}

impl Display {
    /// Create a display from a config.
    pub fn new(config: DisplayConfig) -> Self {
        crate::engine_debug!("jlengine::Display",
            "Display '{}' created ({}x{})", config.title, config.width, config.height);
        Self {
            width: config.width,
            height: config.height,
            title: config.title,
            resizable: config.resizable,
        }
    }

    /// Create a display mirroring an existing winit window.
    pub fn from_window(window: &Window) -> Self {
        let size = window.inner_size();
        Self::new(DisplayConfig {
            width: size.width,
            height: size.height,
            title: window.title(),
            resizable: window.is_resizable(),
        })
    }

    // ===== GETTERS =====

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the surface may be resized.
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Width / height.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the height is zero (minimized window).
    pub fn aspect_ratio(&self) -> Result<f32> {
        if self.height == 0 {
            engine_bail!("jlengine::Display", InvalidParameter,
                "Display '{}' has zero height, aspect ratio undefined", self.title);
        }
        Ok(self.width as f32 / self.height as f32)
    }

    // ===== SETTERS =====

    /// Record a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        crate::engine_debug!("jlengine::Display",
            "Display '{}' resized {}x{} -> {}x{}", self.title, self.width, self.height, width, height);
        self.width = width;
        self.height = height;
    }

    /// Record a size coming from a winit `Resized` event.
    pub fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        self.resize(size.width, size.height);
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
