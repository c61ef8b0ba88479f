//! DOM side of the scene: section buttons, world-anchored panels and the
//! camera-locked HUD strip.

use crate::constants::{ACTIVE_CLASS, HUD_ID, NAV_BUTTON_IDS, PANEL_IDS};
use crate::dom;
use crate::input::{panel_css_transform, panel_screen_scale};
use folio_core::panels::{panel_visible, PanelId, PanelTransform};
use folio_core::{ndc_to_client, Portfolio, SectionId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Hud {
    nav_buttons: Vec<(SectionId, web::HtmlElement)>,
    panels: Vec<(PanelId, web::HtmlElement)>,
    strip: Option<web::HtmlElement>,
    shown_section: Option<SectionId>,
}

impl Hud {
    pub fn new(document: &web::Document) -> Self {
        let nav_buttons = SectionId::ALL
            .iter()
            .zip(NAV_BUTTON_IDS)
            .filter_map(|(&id, el_id)| dom::html_element(document, el_id).map(|el| (id, el)))
            .collect();
        let panels = PanelId::ALL
            .iter()
            .zip(PANEL_IDS)
            .filter_map(|(&id, el_id)| dom::html_element(document, el_id).map(|el| (id, el)))
            .collect::<Vec<_>>();
        if panels.len() < PANEL_IDS.len() {
            log::warn!("[hud] {} of {} panel elements found", panels.len(), PANEL_IDS.len());
        }
        Self {
            nav_buttons,
            panels,
            strip: dom::html_element(document, HUD_ID),
            shown_section: None,
        }
    }

    /// Route the nav buttons to section tweens.
    pub fn wire_buttons(document: &web::Document, scene: Rc<RefCell<Portfolio>>) {
        for (&id, el_id) in SectionId::ALL.iter().zip(NAV_BUTTON_IDS) {
            let scene = scene.clone();
            dom::add_click_listener(document, el_id, move || {
                if scene.borrow_mut().go_to(id) {
                    log::info!("[hud] -> {}", id.label());
                }
            });
        }
    }

    /// Visibility, active states and screen placement for this frame.
    pub fn sync(&mut self, scene: &Portfolio) {
        let current = scene.nav.current();
        if self.shown_section != Some(current) {
            for (id, el) in &self.nav_buttons {
                dom::set_class(el, ACTIVE_CLASS, *id == current);
            }
            for (id, el) in &self.panels {
                dom::set_display(el, panel_visible(*id, current));
            }
            self.shown_section = Some(current);
        }

        for (id, el) in &self.panels {
            if !panel_visible(*id, current) {
                continue;
            }
            let t = scene.panels.transform(*id, scene.rig.position());
            place(el, scene, &t, t.pitch());
        }
        // Camera-locked, so never tilted against the screen
        if let Some(strip) = &self.strip {
            place(strip, scene, &scene.hud_transform(), 0.0);
        }
    }
}

fn place(el: &web::HtmlElement, scene: &Portfolio, t: &PanelTransform, pitch: f32) {
    let camera = &scene.rig.camera;
    let depth = (t.position - camera.eye).dot(camera.basis().forward);
    if depth <= 0.0 {
        dom::set_transform(el, "scale(0)");
        return;
    }
    let viewport = scene.viewport();
    let client = ndc_to_client(camera.world_to_ndc(t.position), viewport);
    let scale = panel_screen_scale(t.scale, depth, camera.fovy_radians, viewport.y);
    dom::set_transform(el, &panel_css_transform(client, scale, pitch));
}
