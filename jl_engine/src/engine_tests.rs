//! Unit tests for Engine singleton manager
//!
//! Tests initialization, display and render manager lifecycle, camera
//! creation, directories and logging APIs.
//!
//! IMPORTANT: ENGINE_STATE is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially. Other unit
//! tests may log concurrently, so captured logs are filtered by source.

use crate::jlengine::{Engine, Error};
use crate::jlengine::display::DisplayConfig;
use crate::jlengine::log::{Logger, LogEntry, LogSeverity};
use std::path::Path;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures entries coming from the engine
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source.starts_with("jlengine::Engine") || entry.source.starts_with("test::") {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

/// Reset engine state before each test
fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

fn setup_with_display(width: u32, height: u32) {
    setup();
    Engine::create_display(DisplayConfig {
        width,
        height,
        ..Default::default()
    }).unwrap();
    Engine::create_render_manager().unwrap();
}

// ============================================================================
// INITIALIZATION AND SHUTDOWN TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_shutdown_clears_subsystems() {
    setup_with_display(800, 600);
    assert!(Engine::display().is_ok());
    assert!(Engine::render_manager().is_ok());

    Engine::shutdown();

    assert!(Engine::display().is_err());
    assert!(Engine::render_manager().is_err());

    // Shutdown twice is safe
    Engine::shutdown();
    Engine::initialize().unwrap();
}

#[test]
#[serial]
fn test_handles_survive_shutdown() {
    setup_with_display(800, 600);
    let display = Engine::display().unwrap();

    Engine::shutdown();

    assert_eq!(display.lock().unwrap().width(), 800);
}

// ============================================================================
// DISPLAY API TESTS
// ============================================================================

#[test]
#[serial]
fn test_create_display_success() {
    setup();
    Engine::create_display(DisplayConfig::default()).unwrap();

    let display = Engine::display().unwrap();
    let display = display.lock().unwrap();
    assert_eq!(display.width(), 1280);
    assert_eq!(display.height(), 720);
}

#[test]
#[serial]
fn test_create_display_duplicate_fails() {
    setup();
    Engine::create_display(DisplayConfig::default()).unwrap();

    let result = Engine::create_display(DisplayConfig::default());
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_display_not_created_fails() {
    setup();
    assert!(matches!(Engine::display(), Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_destroy_display_allows_recreate() {
    setup();
    Engine::create_display(DisplayConfig::default()).unwrap();
    Engine::destroy_display().unwrap();

    assert!(Engine::display().is_err());
    assert!(Engine::create_display(DisplayConfig::default()).is_ok());
}

// ============================================================================
// RENDER MANAGER API TESTS
// ============================================================================

#[test]
#[serial]
fn test_render_manager_lifecycle() {
    setup();
    Engine::create_render_manager().unwrap();
    assert!(Engine::create_render_manager().is_err());

    let rm = Engine::render_manager().unwrap();
    assert_eq!(rm.lock().unwrap().camera_count(), 0);

    Engine::destroy_render_manager().unwrap();
    assert!(Engine::render_manager().is_err());
}

// ============================================================================
// CAMERA API TESTS
// ============================================================================

#[test]
#[serial]
fn test_create_camera_uses_display_and_becomes_active() {
    setup_with_display(1600, 900);

    let key = Engine::create_camera().unwrap();

    let rm = Engine::render_manager().unwrap();
    let rm = rm.lock().unwrap();
    assert_eq!(rm.active_camera_key(), Some(key));
    let camera = rm.active_camera().unwrap();
    assert!((camera.aspect_ratio() - 1600.0 / 900.0).abs() < 1e-6);
    assert_eq!(camera.fov(), 90.0);
}

#[test]
#[serial]
fn test_create_camera_without_display_fails() {
    setup();
    Engine::create_render_manager().unwrap();

    assert!(Engine::create_camera().is_err());
}

#[test]
#[serial]
fn test_create_camera_without_render_manager_fails() {
    setup();
    Engine::create_display(DisplayConfig::default()).unwrap();

    assert!(Engine::create_camera().is_err());
}

#[test]
#[serial]
fn test_display_resize_requires_explicit_camera_update() {
    setup_with_display(1280, 720);
    let key = Engine::create_camera().unwrap();

    let display = Engine::display().unwrap();
    display.lock().unwrap().resize(1000, 1000);

    let rm = Engine::render_manager().unwrap();
    let mut rm = rm.lock().unwrap();
    assert!((rm.camera(key).unwrap().aspect_ratio() - 1280.0 / 720.0).abs() < 1e-6);

    rm.resize_cameras(1000.0, 1000.0).unwrap();
    assert_eq!(rm.camera(key).unwrap().aspect_ratio(), 1.0);
}

// ============================================================================
// DIRECTORIES API TESTS
// ============================================================================

#[test]
#[serial]
fn test_directories() {
    setup();
    Engine::set_engine_directory("/opt/jle").unwrap();
    Engine::set_app_directory("/srv/game").unwrap();

    let dirs = Engine::directories().unwrap();
    assert_eq!(dirs.shaders_dir(), Path::new("/opt/jle/shaders"));
    assert_eq!(dirs.app_dir(), Path::new("/srv/game"));
    assert_eq!(dirs.compiled_shaders_dir(), Path::new("csh"));
}

#[test]
#[serial]
fn test_scan_shaders_uses_engine_directories() {
    setup();
    let root = std::env::temp_dir().join(format!("jl_engine_engine_scan_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("engine/tools")).unwrap();
    std::fs::create_dir_all(root.join("engine/shaders")).unwrap();
    std::fs::write(root.join("engine/shaders/basic.vert"), "#version 450").unwrap();

    Engine::set_engine_directory(root.join("engine")).unwrap();
    Engine::set_app_directory(root.join("app")).unwrap();
    let scan = Engine::scan_shaders();

    assert!(root.join("app/csh").is_dir());
    let _ = std::fs::remove_dir_all(&root);
    let scan = scan.unwrap();
    assert!(scan.compiled.is_empty());
    assert_eq!(scan.pending.len(), 1);
}

#[test]
#[serial]
fn test_scan_shaders_without_directories_fails() {
    setup();
    assert!(matches!(Engine::scan_shaders(), Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_reset_for_testing_clears_directories() {
    setup();
    Engine::set_engine_directory("/opt/jle").unwrap();

    Engine::reset_for_testing();

    assert_eq!(Engine::directories().unwrap().engine_dir(), Path::new(""));
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_error_messages_logged() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let _ = Engine::display();

    {
        let entries = entries.lock().unwrap();
        assert!(entries.iter().any(|e| e.severity == LogSeverity::Error
            && e.message.contains("Display not created")
            && e.file.is_some()
            && e.line.is_some()));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_custom_logger_receives_logs() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "test::module", "info".to_string());
    Engine::log_detailed(LogSeverity::Error, "test::module", "boom".to_string(), "engine.rs", 12);

    {
        let entries = entries.lock().unwrap();
        let ours: Vec<&LogEntry> = entries.iter().filter(|e| e.source == "test::module").collect();
        assert_eq!(ours.len(), 2);
        assert_eq!(ours[0].severity, LogSeverity::Info);
        assert!(ours[0].file.is_none());
        assert_eq!(ours[1].file, Some("engine.rs"));
        assert_eq!(ours[1].line, Some(12));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_to_default() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test::module", "after reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}
