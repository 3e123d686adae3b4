#![cfg(target_arch = "wasm32")]
//! WASM front-end: mounts the `fx-core` engines on the page.
//!
//! Effects are declared in markup and mounted automatically shortly after
//! load, or created explicitly from JS through the exported handles.

mod canvas;
mod dom;
mod events;
mod frame;
mod mount;

pub use mount::{
    AmbientFieldHandle, CardTiltHandle, ConfettiFieldHandle, CustomCursorHandle,
    MagneticButtonHandle,
};

use fx_core::{AmbientConfig, ConfettiConfig, CursorConfig, MagneticConfig, TiltConfig};
use mount::Destroy;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Layout settle time before auto-mounting, in milliseconds.
const AUTO_MOUNT_DELAY_MS: i32 = 100;

const AMBIENT_SELECTOR: &str = r#"canvas[data-fx="ambient"]"#;
const CONFETTI_SELECTOR: &str = r#"canvas[data-fx="confetti"]"#;
const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
const TILT_SELECTOR: &str = "[data-tilt]";
const CURSOR_SELECTOR: &str = "body[data-fx-cursor]";

thread_local! {
    static AUTO_MOUNTED: RefCell<Vec<Box<dyn Destroy>>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn sleep_ms(ms: i32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(e) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        {
            log::warn!("[init] setTimeout failed: {:?}", e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    sleep_ms(AUTO_MOUNT_DELAY_MS).await?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut mounted: Vec<Box<dyn Destroy>> = Vec::new();

    for el in dom::query_all(&document, AMBIENT_SELECTOR) {
        let Ok(canvas) = el.0.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        match AmbientFieldHandle::mount(canvas, AmbientConfig::default()) {
            Ok(h) => mounted.push(Box::new(h)),
            Err(e) => log::warn!("[ambient] mount failed: {e:#}"),
        }
    }

    for el in dom::query_all(&document, CONFETTI_SELECTOR) {
        let Ok(canvas) = el.0.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        match ConfettiFieldHandle::mount(canvas, ConfettiConfig::default()) {
            Ok(h) => mounted.push(Box::new(h)),
            Err(e) => log::warn!("[confetti] mount failed: {e:#}"),
        }
    }

    for el in dom::query_all(&document, MAGNETIC_SELECTOR) {
        let mut config = MagneticConfig::default();
        if let Some(strength) = numeric_attribute(&el.0, "data-magnetic") {
            config.strength = strength;
        }
        match MagneticButtonHandle::mount(el.0, config) {
            Ok(h) => mounted.push(Box::new(h)),
            Err(e) => log::warn!("[magnetic] mount failed: {e:#}"),
        }
    }

    for el in dom::query_all(&document, TILT_SELECTOR) {
        let mut config = TiltConfig::default();
        if let Some(max_tilt) = numeric_attribute(&el.0, "data-tilt") {
            config.max_tilt = max_tilt;
        }
        if el.0.get_attribute("data-tilt-glow").as_deref() == Some("false") {
            config.enable_glow = false;
        }
        match CardTiltHandle::mount(el.0, config) {
            Ok(h) => mounted.push(Box::new(h)),
            Err(e) => log::warn!("[tilt] mount failed: {e:#}"),
        }
    }

    if document.query_selector(CURSOR_SELECTOR).ok().flatten().is_some() {
        match CustomCursorHandle::mount(CursorConfig::default()) {
            Ok(h) => mounted.push(Box::new(h)),
            Err(e) => log::warn!("[cursor] mount failed: {e:#}"),
        }
    }

    log::info!("[init] auto-mounted {} effects", mounted.len());
    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(mounted));
    Ok(())
}

/// `data-magnetic="0.5"` style overrides; empty or non-numeric values keep
/// the default.
fn numeric_attribute(el: &web::HtmlElement, name: &str) -> Option<f32> {
    el.get_attribute(name)?.trim().parse().ok()
}

/// Tear down every effect mounted from markup.
#[wasm_bindgen]
pub fn destroy_all() {
    let effects = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    let count = effects.len();
    for mut effect in effects {
        effect.destroy_effect();
    }
    log::info!("[init] destroyed {count} effects");
}

/// Bind the cursor's hover state to interactive elements added after it was
/// mounted. Returns the number of newly bound elements.
///
/// Nothing watches the DOM for new links or buttons: JS must call this after
/// every insertion of interactive content, including content rendered after
/// the auto-mount.
#[wasm_bindgen]
pub fn refresh_cursor_targets() -> u32 {
    mount::refresh_active_cursor()
}
