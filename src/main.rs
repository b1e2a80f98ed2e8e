use std::sync::Arc;

use anyhow::Result;
use log::info;
use winit::{
    event::{DeviceEvent, Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::{CursorGrabMode, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::frame_clock::FrameClock;
use engine::input::InputManager;
use engine::renderer::{CameraUniform, ModelUniform, OrbitCamera, Renderer, SkinningUniform};
use game::rig;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Strider...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Rusted Strider")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    // Mouse-look: hide and capture the cursor; fall back to confining it
    // on platforms without locked grab.
    window.set_cursor_visible(false);
    if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
        let _ = window.set_cursor_grab(CursorGrabMode::Confined);
    }

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let size = window.inner_size();
    let mut camera = OrbitCamera::new(size.width as f32, size.height as f32);
    let mut input = InputManager::new();
    let mut clock = FrameClock::new();
    let mut avatar = rig::standard_avatar()?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                    camera.resize(physical_size.width as f32, physical_size.height as f32);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                    };
                    camera.zoom(scroll);
                }
                WindowEvent::RedrawRequested => {
                    if input.quit_requested() {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                        return;
                    }

                    // One simulation step per rendered frame, driven by an
                    // explicit input snapshot.
                    let dt = clock.begin_frame();
                    let intent = input.move_intent();
                    avatar.update(&intent, camera.yaw_deg, dt);
                    camera.follow(avatar.position());
                    input.end_frame();

                    let camera_uniform = CameraUniform::new(&camera);
                    let model = ModelUniform::new(avatar.world_transform());
                    let skinning = SkinningUniform::from_bones(avatar.skinning_pose().bones());
                    if let Err(err) = renderer.render(&camera_uniform, &model, &skinning) {
                        log::error!("Render error: {err}");
                    }

                    if clock.frame_count() % 300 == 0 {
                        log::debug!(
                            "fps: {:.1} state: {:?} speed: {:.2}",
                            clock.fps(),
                            avatar.state(),
                            avatar.kinematics().speed
                        );
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => {
                camera.apply_mouse_delta(dx as f32, dy as f32);
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
