mod dom;
mod engine;
mod logger;

pub use dom::*;
pub use engine::*;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

thread_local! {
    static PAGE_ENGINE: RefCell<Option<LiveReloadEngine>> = const { RefCell::new(None) };
}

/// Live reload handle exposed to page scripts.
#[wasm_bindgen]
pub struct LiveReload {
    _engine: LiveReloadEngine,
}

#[wasm_bindgen]
impl LiveReload {
    #[wasm_bindgen(constructor)]
    pub fn new(room: Option<String>) -> Result<LiveReload, JsValue> {
        Ok(LiveReload {
            _engine: LiveReloadEngine::new(room)?,
        })
    }
}

/// Starts live reload for the room in `window.__ROOM__`. The engine lives
/// until the page unloads. Calling it again has no effect.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    if PAGE_ENGINE.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let engine = LiveReloadEngine::from_global()?;
    PAGE_ENGINE.with(|slot| *slot.borrow_mut() = Some(engine));
    Ok(())
}

/// `oninput` handler: `filter_list(this, "conv-item")`.
#[wasm_bindgen]
pub fn filter_list(input: &HtmlInputElement, cls: &str) {
    filter_input(input, cls);
}

#[wasm_bindgen]
pub fn filter_query(query: Option<String>, cls: &str) {
    filter_by_query(query.as_deref(), cls);
}
