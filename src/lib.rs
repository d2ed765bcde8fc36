#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod loading;
pub mod motion;
pub mod nav;
pub mod pointer;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a logger may already be installed when hydrating twice during hot reload
    _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
