#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use moex_chart::{
    Cli,     // The struct from lib.rs
    run_app, // The function from lib.rs
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(fern::Output::call(|record| {
            let line = format!("[{}] {}", record.level(), record.args());
            web_sys::console::log_1(&line.into());
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    init_web_logging();

    log::info!("MOEX chart starting in WASM mode...");

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    // 1. Get the browser window and document
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no global `window` or `document`")?;

    // 2. Find the canvas element by ID
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // 3. Pass the canvas OBJECT to start()
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, Cli::default()))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use eframe::NativeOptions;
    use moex_chart::config::APP_STATE_PATH;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for fetch promises; entered for the lifetime of the window
    let rt = Runtime::new()?;
    let _guard = rt.enter();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        moex_chart::ui::UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, args))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {}", e))
}
