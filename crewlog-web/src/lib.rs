#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;
pub mod solver;

pub use crewlog_game as game;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::init_logger(log::LevelFilter::Info);
    // Sync <html lang> with the initial bundle
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
