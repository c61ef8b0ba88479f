#![cfg(target_arch = "wasm32")]
use folio_core::dpr::{AdaptiveDpr, DprConfig};
use folio_core::Portfolio;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod assets;
mod constants;
mod debug;
mod dom;
mod events;
mod frame;
mod hud;
mod input;
mod render;

pub use debug::DebugHandle;

/// Boot the scene on the page's canvas. Resolves once the frame loop is
/// running, with the developer hooks for that scene.
#[wasm_bindgen]
pub async fn start() -> Result<DebugHandle, JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match init().await {
        Ok(scene) => Ok(DebugHandle::new(scene)),
        Err(e) => {
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

async fn init() -> anyhow::Result<Rc<RefCell<Portfolio>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let dpr = AdaptiveDpr::new(DprConfig::default(), window.device_pixel_ratio() as f32);
    dom::sync_canvas_backing_size(&canvas, dpr.current() as f64);

    let viewport = dom::viewport_css_size().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let scene = Rc::new(RefCell::new(Portfolio::new(viewport, constants::FOLLOWER_SEED)));
    let paused = Rc::new(RefCell::new(document.hidden()));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag: Rc::new(RefCell::new(input::DragState::default())),
        paused: paused.clone(),
    });
    hud::Hud::wire_buttons(&document, scene.clone());
    assets::spawn_loads(scene.clone());

    // Scene logic and DOM panels keep running without WebGPU
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        paused,
        canvas,
        gpu,
        hud: hud::Hud::new(&document),
        dpr,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(scene)
}
