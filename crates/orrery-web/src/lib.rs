//! Browser entry points.
//!
//! wasm-bindgen cannot export generic structs, so the runner lives in a
//! `thread_local!` and every export borrows it for the length of one call.
//! Until `orrery_init` succeeds, every other export is a no-op.

pub mod overlay;
pub mod runner;

use std::cell::RefCell;

use orrery_engine::{default_solar_system, BodyCatalog, InputEvent, OrreryError, SimConfig};
use wasm_bindgen::prelude::*;

pub use overlay::DomOverlay;
pub use runner::SimRunner;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner<DomOverlay>>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner<DomOverlay>) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn to_js(err: OrreryError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Build the simulation. `config_json` and `catalog_json` override the
/// defaults; any key missing from `config_json` keeps its default.
#[wasm_bindgen]
pub fn orrery_init(
    overlay_element_id: &str,
    config_json: Option<String>,
    catalog_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => SimConfig::from_json(&json).map_err(to_js)?,
        None => SimConfig::default(),
    };
    let catalog = match catalog_json {
        Some(json) => BodyCatalog::from_json(&json).map_err(to_js)?,
        None => default_solar_system(),
    };
    let overlay = DomOverlay::find(overlay_element_id).map_err(to_js)?;
    let runner = SimRunner::new(config, catalog, overlay).map_err(to_js)?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_frame(dt: f32) {
    with_runner(|r| r.frame(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn orrery_pinch(scale: f32) {
    with_runner(|r| r.push_input(InputEvent::Pinch { scale }));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Controls ----

#[wasm_bindgen]
pub fn orrery_set_speed(name: &str, value: f64) {
    with_runner(|r| r.set_speed(name, value));
}

#[wasm_bindgen]
pub fn orrery_set_global_speed(value: f64) {
    with_runner(|r| r.set_global_speed(value));
}

#[wasm_bindgen]
pub fn orrery_set_paused(paused: bool) {
    with_runner(|r| r.set_paused(paused));
}

/// Close button on the overlay.
#[wasm_bindgen]
pub fn orrery_reset_focus() {
    with_runner(|r| r.reset_focus());
}

#[wasm_bindgen]
pub fn orrery_select_body(name: &str) -> bool {
    with_runner(|r| r.select_body(name)).unwrap_or(false)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn orrery_catalog_json() -> String {
    with_runner(|r| r.catalog_json().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn orrery_buffer_len() -> u32 {
    with_runner(|r| r.buffer_len_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn orrery_body_count() -> u32 {
    with_runner(|r| r.body_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn orrery_max_bodies() -> u32 {
    with_runner(|r| r.max_bodies()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn orrery_decor_time() -> f32 {
    with_runner(|r| r.decor_time()).unwrap_or(0.0)
}
