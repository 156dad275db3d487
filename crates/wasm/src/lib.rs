//! WASM bridge: drive [`PageEngine`] instances from a JS host.
//!
//! The host owns the canvas, clock, and input; the bridge owns the
//! engines. Commands cross the boundary as JSON.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use unfold_core::{PageEngine, content};
use wasm_bindgen::prelude::*;

static ENGINES: Mutex<Vec<PageEngine>> = Mutex::new(Vec::new());

fn engines() -> MutexGuard<'static, Vec<PageEngine>> {
    ENGINES.lock().unwrap_or_else(|e| e.into_inner())
}

/// Mount the built-in page. Returns a handle for later calls.
#[wasm_bindgen]
pub fn default_page(width: f64, height: f64) -> usize {
    let mut engines = engines();
    let idx = engines.len();
    engines.push(PageEngine::new(content::default_page(), width, height));
    idx
}

/// Parse a page from JSON bytes and mount it. Returns a handle.
#[wasm_bindgen]
pub fn load_page(data: &[u8], width: f64, height: f64) -> Result<usize, JsError> {
    let spec = content::parse_page(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut engines = engines();
    let idx = engines.len();
    engines.push(PageEngine::new(spec, width, height));
    Ok(idx)
}

#[wasm_bindgen]
pub fn resize_page(handle: usize, width: f64, height: f64) -> Result<(), JsError> {
    let mut engines = engines();
    let engine = engines
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    engine.resize(width, height);
    Ok(())
}

/// Advance the engine to `now` (seconds) and return the frame's render
/// commands as JSON.
#[wasm_bindgen]
pub fn render_page(handle: usize, now: f64) -> Result<String, JsError> {
    let mut engines = engines();
    let engine = engines
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    engine.advance(now);
    let commands = engine.render(now);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn scroll_page(handle: usize, dy: f64) -> Result<(), JsError> {
    let mut engines = engines();
    let engine = engines
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    engine.scroll_by(dy);
    Ok(())
}

/// Smooth-scroll to an anchor name ("projects"). Unknown anchors no-op
/// and return false.
#[wasm_bindgen]
pub fn jump_to(handle: usize, anchor: &str) -> Result<bool, JsError> {
    let mut engines = engines();
    let engine = engines
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    Ok(engine.activate_href(&format!("#{anchor}")))
}

#[wasm_bindgen]
pub fn nav_elevated(handle: usize) -> Result<bool, JsError> {
    let engines = engines();
    let engine = engines
        .get(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    Ok(engine.nav_elevated())
}

#[derive(Serialize)]
struct PageLinks {
    mailto: String,
    profile: String,
}

/// The page's fixed outbound targets as JSON.
#[wasm_bindgen]
pub fn page_links(handle: usize) -> Result<String, JsError> {
    let engines = engines();
    let engine = engines
        .get(handle)
        .ok_or_else(|| JsError::new("invalid page handle"))?;
    let (mailto, profile) = engine.links();
    let links = PageLinks { mailto, profile };
    serde_json::to_string(&links).map_err(|e| JsError::new(&e.to_string()))
}
