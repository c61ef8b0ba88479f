//! JS-callable developer hooks. `start()` resolves to a [`DebugHandle`], so
//! the page can keep it around, e.g. `(await start()).rotL()`.

use folio_core::debug::{DebugCommand, DebugSnapshot};
use folio_core::Portfolio;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct DebugHandle {
    scene: Rc<RefCell<Portfolio>>,
}

impl DebugHandle {
    /// Facade over the scene the entry point built.
    pub fn new(scene: Rc<RefCell<Portfolio>>) -> Self {
        Self { scene }
    }

    fn run(&self, cmd: DebugCommand) -> bool {
        cmd.apply(&mut self.scene.borrow_mut()).is_some()
    }
}

#[wasm_bindgen]
impl DebugHandle {
    #[wasm_bindgen(js_name = rotL)]
    pub fn rotate_left(&self) -> bool {
        self.run(DebugCommand::RotateLeft)
    }

    #[wasm_bindgen(js_name = rotR)]
    pub fn rotate_right(&self) -> bool {
        self.run(DebugCommand::RotateRight)
    }

    pub fn grow(&self) -> bool {
        self.run(DebugCommand::Grow)
    }

    pub fn shrink(&self) -> bool {
        self.run(DebugCommand::Shrink)
    }

    /// Any command by name; unknown names return false.
    pub fn command(&self, name: &str) -> bool {
        DebugCommand::parse(name).is_some_and(|cmd| self.run(cmd))
    }

    /// Current scene state as a JSON string.
    pub fn snapshot(&self) -> String {
        DebugSnapshot::capture(&self.scene.borrow()).to_json()
    }

    #[wasm_bindgen(js_name = setOverlay)]
    pub fn set_overlay(&self, on: bool) {
        self.scene
            .borrow_mut()
            .follower
            .visual_mut()
            .set_overlay_on_top(on);
    }
}
