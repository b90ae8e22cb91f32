//! Integration tests for cameras driven through the Engine singletons
//!
//! Run with: cargo test --test camera_integration_tests

use jl_engine::glam::{Mat4, Vec3};
use jl_engine::jlengine::Engine;
use jl_engine::jlengine::camera::{Camera, CameraConfig, DepthRange};
use jl_engine::jlengine::display::{Display, DisplayConfig};
use jl_engine::jlengine::render::RenderManager;
use serial_test::serial;

fn reset_engine() {
    Engine::initialize().unwrap();
    Engine::destroy_render_manager().unwrap();
    Engine::destroy_display().unwrap();
}

// ============================================================================
// ENGINE-DRIVEN CAMERA
// ============================================================================

#[test]
#[serial]
fn test_integration_engine_camera_lifecycle() {
    reset_engine();

    Engine::create_display(DisplayConfig::default()).unwrap();
    Engine::create_render_manager().unwrap();

    let key = Engine::create_camera().unwrap();

    {
        let rm = Engine::render_manager().unwrap();
        let rm = rm.lock().unwrap();
        let camera = rm.active_camera().unwrap();
        assert_eq!(rm.active_camera_key(), Some(key));

        let expected = Mat4::perspective_rh_gl(90.0_f32.to_radians(), 1280.0 / 720.0, 0.1, 100.0);
        assert!(camera.projection_matrix().abs_diff_eq(expected, 1e-6));
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, 3.0), Vec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(view, 1e-6));
    }

    Engine::shutdown();
    assert!(Engine::render_manager().is_err());
}

#[test]
#[serial]
fn test_integration_window_resize_flow() {
    reset_engine();

    Engine::create_display(DisplayConfig::default()).unwrap();
    Engine::create_render_manager().unwrap();
    Engine::create_camera().unwrap();

    // A resize event updates the display, then the app updates the cameras
    let display = Engine::display().unwrap();
    let (width, height) = {
        let mut display = display.lock().unwrap();
        display.resize(1920, 1200);
        (display.width() as f32, display.height() as f32)
    };

    let rm = Engine::render_manager().unwrap();
    let mut rm = rm.lock().unwrap();
    rm.active_camera_mut().unwrap().set_aspect_ratio(width, height).unwrap();

    assert!((rm.active_camera().unwrap().aspect_ratio() - 1.6).abs() < 1e-6);
}

// ============================================================================
// INJECTED RENDER MANAGER (no singletons)
// ============================================================================

#[test]
fn test_integration_split_screen_cameras() {
    let display = Display::new(DisplayConfig { width: 1600, height: 900, ..Default::default() });
    let mut rm = RenderManager::new();

    let left = Camera::with_config(CameraConfig {
        eye: Vec3::new(-5.0, 1.0, 0.0),
        target: Vec3::ZERO,
        ..Default::default()
    }, &display).unwrap();
    let right = Camera::with_config(CameraConfig {
        eye: Vec3::new(5.0, 1.0, 0.0),
        target: Vec3::ZERO,
        depth_range: DepthRange::ZeroToOne,
        ..Default::default()
    }, &display).unwrap();

    let left = rm.add_named_camera("left", left).unwrap();
    let right = rm.add_named_camera("right", right).unwrap();

    // Each half of the screen is 800x900
    rm.resize_cameras(800.0, 900.0).unwrap();

    for key in [left, right] {
        rm.use_camera(key).unwrap();
        let camera = rm.active_camera().unwrap();
        assert!((camera.aspect_ratio() - 800.0 / 900.0).abs() < 1e-6);
        assert!(camera.frustum().contains_point(Vec3::ZERO));
    }

    assert_eq!(rm.camera_key("right"), Some(right));
    assert_eq!(rm.active_camera_key(), Some(right));
}
