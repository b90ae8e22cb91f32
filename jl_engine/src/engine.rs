/// JL Engine - Singleton manager for engine subsystems
///
/// Holds the process-wide display, render manager, directory layout and
/// logger behind thread-safe static storage. Subsystems themselves are
/// plain values: the engine only stores them and hands out shared handles.

use std::path::Path;
use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::display::{Display, DisplayConfig};
use crate::directories::{EngineDirectories, ShaderScan};
use crate::render::{RenderManager, CameraKey};
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Display singleton
    display: RwLock<Option<Arc<Mutex<Display>>>>,
    /// Render manager singleton
    render_manager: RwLock<Option<Arc<Mutex<RenderManager>>>>,
    /// Directory layout
    directories: RwLock<EngineDirectories>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            display: RwLock::new(None),
            render_manager: RwLock::new(None),
            directories: RwLock::new(EngineDirectories::new()),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use jl_engine::jlengine::{Engine, display::DisplayConfig};
///
/// Engine::initialize()?;
/// Engine::create_display(DisplayConfig::default())?;
/// Engine::create_render_manager()?;
///
/// // Default camera sized to the display, registered as active
/// let key = Engine::create_camera()?;
///
/// Engine::shutdown();
/// # Ok::<(), jl_engine::jlengine::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("jlengine::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("jlengine::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("jlengine::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Must be called once at startup before creating any subsystem.
    /// Calling it again is harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and destroy all singletons
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            // Cameras are sized from the display: drop them first
            if let Ok(mut rm) = state.render_manager.write() {
                *rm = None;
            }
            if let Ok(mut display) = state.display.write() {
                *display = None;
            }
        }
    }

    // ===== DISPLAY API =====

    /// Create and register the display singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized, a display already
    /// exists, or the display lock is poisoned.
    pub fn create_display(config: DisplayConfig) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.display.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Display lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Display already exists. Call Engine::destroy_display() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(Display::new(config))));

        crate::engine_info!("jlengine::Engine", "Display singleton created successfully");

        Ok(())
    }

    /// Get the display singleton
    pub fn display() -> Result<Arc<Mutex<Display>>> {
        let state = Self::state()?;

        let lock = state.display.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Display lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Display not created. Call Engine::create_display() first.".to_string())
            ))
    }

    /// Destroy the display singleton
    ///
    /// Existing handles stay valid until dropped.
    pub fn destroy_display() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.display.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Display lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("jlengine::Engine", "Display singleton destroyed");

        Ok(())
    }

    // ===== RENDER MANAGER API =====

    /// Create and register the render manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or a render
    /// manager already exists.
    pub fn create_render_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.render_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("RenderManager lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("RenderManager already exists. Call Engine::destroy_render_manager() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(RenderManager::new())));

        crate::engine_info!("jlengine::Engine", "RenderManager singleton created successfully");

        Ok(())
    }

    /// Get the render manager singleton
    pub fn render_manager() -> Result<Arc<Mutex<RenderManager>>> {
        let state = Self::state()?;

        let lock = state.render_manager.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("RenderManager lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("RenderManager not created. Call Engine::create_render_manager() first.".to_string())
            ))
    }

    /// Destroy the render manager singleton
    pub fn destroy_render_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.render_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("RenderManager lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("jlengine::Engine", "RenderManager singleton destroyed");

        Ok(())
    }

    // ===== CAMERA API =====

    /// Create a default camera sized to the engine display and make it
    /// the active camera of the engine render manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the display or render manager is missing, a
    /// lock is poisoned, or the display height is zero.
    pub fn create_camera() -> Result<CameraKey> {
        let display = Self::display()?;
        let render_manager = Self::render_manager()?;

        let display = display.lock()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Display mutex poisoned".to_string())
            ))?;
        let mut render_manager = render_manager.lock()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("RenderManager mutex poisoned".to_string())
            ))?;

        let key = render_manager.create_camera(&display)?;

        crate::engine_info!("jlengine::Engine",
            "Camera {:?} created for display {}x{} and set active", key, display.width(), display.height());

        Ok(key)
    }

    // ===== DIRECTORIES API =====

    /// Set the engine root directory
    pub fn set_engine_directory(path: impl AsRef<Path>) -> Result<()> {
        let state = Self::state()?;
        let mut dirs = state.directories.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Directories lock poisoned".to_string())
            ))?;
        dirs.set_engine_directory(path);
        crate::engine_debug!("jlengine::Engine", "Engine directory set to {}", dirs.engine_dir().display());
        Ok(())
    }

    /// Set the application root directory
    pub fn set_app_directory(path: impl AsRef<Path>) -> Result<()> {
        let state = Self::state()?;
        let mut dirs = state.directories.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Directories lock poisoned".to_string())
            ))?;
        dirs.set_app_directory(path);
        crate::engine_debug!("jlengine::Engine", "App directory set to {}", dirs.app_dir().display());
        Ok(())
    }

    /// Snapshot of the current directory layout
    pub fn directories() -> Result<EngineDirectories> {
        let state = Self::state()?;
        let dirs = state.directories.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Directories lock poisoned".to_string())
            ))?;
        Ok(dirs.clone())
    }

    /// Scan the configured shader folder against the compiled shader cache
    ///
    /// See `EngineDirectories::scan_shaders`.
    pub fn scan_shaders() -> Result<ShaderScan> {
        Self::directories()?.scan_shaders()
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut rm) = state.render_manager.write() {
                *rm = None;
            }
            if let Ok(mut display) = state.display.write() {
                *display = None;
            }
            if let Ok(mut dirs) = state.directories.write() {
                *dirs = EngineDirectories::new();
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the default logger with a custom implementation
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
