#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod overlay;

type WireResult = anyhow::Result<()>;

fn report(feature: &str, result: WireResult) {
    if let Err(e) = result {
        log::warn!("[{}] not wired: {:?}", feature, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rbm-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each feature degrades on its own; a missing element or failed JS call
    // only disables that feature.
    report("header", events::wire_header(&window, &document));
    report("menu", events::wire_burger(&document));
    report("particles", events::spawn_particles(&document));
    report("reveal", events::wire_reveal(&document));
    report("video", events::wire_video_vertical(&document));
    report("gallery", events::wire_gallery(&document));
    report("sections", events::inject_section_lines(&window, &document));
    report("nav", events::wire_active_nav(&document));
    report("float", events::wire_float_button(&document));
    report("logo", events::wire_ping_pong(&document));

    log::info!("rbm-web ready");
    Ok(())
}
