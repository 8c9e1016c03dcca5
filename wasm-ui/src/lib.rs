//! Web UI for netlearn
//!
//! A Yew-based single page that walks through networking lessons with
//! looping step animations, scenario quizzes, drag-and-drop assignments and
//! an exam mode that swaps visuals for condensed fact tables.

mod animation;
mod app;
mod assignment;
mod components;
mod logger;
mod state;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    logger::init();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
