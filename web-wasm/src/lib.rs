//! Hypernym Benchmarking Web App (Leptos + WASM)

mod app;
mod components;
mod navigation;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("hypernym-bench web app starting");
    leptos::mount::mount_to_body(app::App);
}
