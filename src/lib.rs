pub mod common;
pub mod config;
pub mod frontend;
pub mod login;
pub mod models;
pub mod services;
pub mod types;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(frontend::App);
}
