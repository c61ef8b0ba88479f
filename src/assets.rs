//! Model loading: fetch the GLB files and hand their summaries to the scene.

use crate::constants::{BIRD_CLIP, BIRD_TEXTURE_URL, BIRD_URL, HOUSE_URL};
use folio_core::glb::{summarize_glb, ModelSummary};
use folio_core::visual::UnlitMaterial;
use folio_core::Portfolio;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {}: {:?}", url, e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_model(url: &str) -> anyhow::Result<ModelSummary> {
    let bytes = fetch_bytes(url).await?;
    let summary = summarize_glb(&bytes)?;
    log::info!(
        "[assets] {} meshes={} nodes={} clips={}",
        url,
        summary.mesh_count,
        summary.node_count,
        summary.animations.len()
    );
    Ok(summary)
}

/// Start both model loads; each installs itself when it arrives.
pub fn spawn_loads(scene: Rc<RefCell<Portfolio>>) {
    {
        let scene = scene.clone();
        spawn_local(async move {
            let model = match load_model(HOUSE_URL).await {
                Ok(m) => m,
                Err(e) => {
                    log::error!("[assets] house failed: {:?}", e);
                    ModelSummary::unit_cube()
                }
            };
            scene.borrow_mut().install_house(&model);
        });
    }
    spawn_local(async move {
        match load_model(BIRD_URL).await {
            Ok(model) => {
                let mut scene = scene.borrow_mut();
                let visual = scene.follower.visual_mut();
                visual.install_model(&model, BIRD_CLIP);
                visual.apply_unlit(&UnlitMaterial::new(BIRD_TEXTURE_URL));
            }
            // The follower keeps its marker body without a model
            Err(e) => log::error!("[assets] follower model failed: {:?}", e),
        }
    });
}
