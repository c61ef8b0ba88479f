//! Desktop preview of the portfolio scene.
//!
//! Usage: `folio-native [house.glb] [follower.glb]`. Without a readable house
//! model the scene is built around a unit cube.
//!
//! Keys: 1/2/3 sections, L/R rotate the house, G/S grow/shrink it,
//! O toggles the follower overlay, P logs a state snapshot.

mod gpu;

use folio_core::debug::{DebugCommand, DebugSnapshot};
use folio_core::glb::{summarize_glb, ModelSummary};
use folio_core::markers::build_instances;
use folio_core::{Portfolio, SectionId};
use glam::Vec2;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::WindowBuilder;

const DEFAULT_HOUSE: &str = "assets/forest_house.glb";
const ROTATE_SPEED: f32 = 1.0;
const ZOOM_PER_LINE: f32 = 0.95;
const MAX_FRAME_DT: f32 = 0.25;

fn load_model(path: &str) -> anyhow::Result<ModelSummary> {
    let bytes = std::fs::read(path)?;
    let summary = summarize_glb(&bytes)?;
    log::info!(
        "[assets] {} meshes={} nodes={} clips={}",
        path,
        summary.mesh_count,
        summary.node_count,
        summary.animations.len()
    );
    Ok(summary)
}

fn debug_for_key(key: &str) -> Option<DebugCommand> {
    match key {
        "l" | "L" => Some(DebugCommand::RotateLeft),
        "r" | "R" => Some(DebugCommand::RotateRight),
        "g" | "G" => Some(DebugCommand::Grow),
        "s" | "S" => Some(DebugCommand::Shrink),
        _ => None,
    }
}

fn logical(size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) -> Vec2 {
    let s = size.to_logical::<f32>(scale_factor);
    Vec2::new(s.width, s.height)
}

struct Input {
    cursor: Vec2,
    dragging: bool,
}

fn handle_key(scene: &mut Portfolio, event: &KeyEvent) {
    if event.state != ElementState::Pressed || event.repeat {
        return;
    }
    let Key::Character(ch) = &event.logical_key else {
        return;
    };
    let key = ch.as_str();
    if let Some(id) = SectionId::from_digit_key(key) {
        scene.go_to(id);
    } else if let Some(cmd) = debug_for_key(key) {
        cmd.apply(scene);
    } else if key.eq_ignore_ascii_case("o") {
        let visual = scene.follower.visual_mut();
        let on = !visual.overlay_on_top();
        visual.set_overlay_on_top(on);
        log::info!("[debug] follower overlay {}", on);
    } else if key.eq_ignore_ascii_case("p") {
        log::info!("[debug] {}", DebugSnapshot::capture(scene).to_json());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let house_path = args.next().unwrap_or_else(|| DEFAULT_HOUSE.to_string());
    let follower_path = args.next();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("house-folio (native)")
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(gpu::GpuState::new(&window))?;
    let mut scene = Portfolio::new(
        logical(window.inner_size(), window.scale_factor()),
        rand::random(),
    );
    let house = load_model(&house_path).unwrap_or_else(|e| {
        log::error!("[assets] {}: {:#}", house_path, e);
        ModelSummary::unit_cube()
    });
    scene.install_house(&house);
    if let Some(path) = follower_path {
        match load_model(&path) {
            Ok(model) => scene.follower.visual_mut().install_model(&model, None),
            Err(e) => log::error!("[assets] {}: {:#}", path, e),
        }
    }

    let mut input = Input {
        cursor: Vec2::ZERO,
        dragging: false,
    };
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                state.resize(size);
                scene.resize(logical(size, state.window.scale_factor()));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(state.window.scale_factor());
                let at = Vec2::new(p.x, p.y);
                if input.dragging {
                    let delta = at - input.cursor;
                    let h = scene.viewport().y.max(1.0);
                    let tau = std::f32::consts::TAU;
                    scene
                        .rig
                        .controls
                        .rotate(-tau * delta.x / h * ROTATE_SPEED, -tau * delta.y / h * ROTATE_SPEED);
                }
                input.cursor = at;
                scene.on_pointer_move(at);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => input.dragging = button_state == ElementState::Pressed,
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 100.0,
                };
                // Scrolling up zooms in
                scene.rig.controls.zoom(ZOOM_PER_LINE.powf(lines));
            }
            WindowEvent::KeyboardInput { event, .. } => handle_key(&mut scene, &event),
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT);
            last_frame = now;
            scene.tick(dt);
            match state.render(&scene.rig.camera, &build_instances(&scene)) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
