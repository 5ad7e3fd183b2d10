//! Digital Monk's Wisdom - Leptos WASM frontend (CSR)

use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod download;
pub mod storage;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Digital Monk starting...");

    leptos::mount::mount_to_body(app::App);
}
