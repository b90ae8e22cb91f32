/*!
# JL Engine

Camera, display and render-manager core of the JL game engine.

## Architecture

- **Camera**: perspective projection + look-at view, built from a display size
- **Display**: render surface dimensions (optionally mirrored from a winit window)
- **RenderManager**: owns cameras and the active-camera selection
- **Engine**: process-wide singletons (display, render manager, directories, logger)

A camera never touches global state. It is made active by handing it to a
`RenderManager`, which the caller owns or obtains from `Engine`.
*/

// Internal modules
mod error;
mod engine;
mod directories;
pub mod log;
pub mod math;
pub mod camera;
pub mod display;
pub mod render;

// Main jlengine namespace module
pub mod jlengine {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Directory layout
    pub use crate::directories::{
        EngineDirectories, ShaderScan, COMPILED_SHADERS_DIR, COMPILED_SHADER_EXTENSION,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Display sub-module
    pub mod display {
        pub use crate::display::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::render::*;
    }
}

// Re-export math library at crate root
pub use glam;
