//! Page enhancements for the landing site, compiled to WebAssembly.
//!
//! `core`, `config` and `constants` are plain Rust and build on any target;
//! the DOM wiring (`dom`, `events`, `frame`) only exists on wasm32.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use entry::start;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::config::{SiteConfig, CONFIG_ATTRIBUTES};
    use crate::events::{self, menu::Menu, Page};
    use crate::frame::ScrollScheduler;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let document = crate::dom::window_document();
        let (config, rejected) = read_config(document.as_ref());
        console_log::init_with_level(config.log_level).ok();
        for e in &rejected {
            log::warn!("[config] ignoring {}", e);
        }
        log::info!("landing-web starting");

        if let Err(e) = init(config) {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn read_config(document: Option<&web::Document>) -> (SiteConfig, Vec<crate::error::ConfigError>) {
        let Some(root) = document.and_then(|d| d.document_element()) else {
            return (SiteConfig::default(), Vec::new());
        };
        let values: Vec<(&str, String)> = CONFIG_ATTRIBUTES
            .iter()
            .filter_map(|&name| root.get_attribute(name).map(|v| (name, v)))
            .collect();
        SiteConfig::from_attributes(values.iter().map(|(k, v)| (*k, v.as_str())))
    }

    fn init(config: SiteConfig) -> anyhow::Result<()> {
        // Listeners must not be attached twice if the module is re-instantiated
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let page = Page::new(window.clone(), document, config);
        let scheduler = ScrollScheduler::new(window);

        events::header::wire_header_shadow(&page, &scheduler);

        let menu = Menu::find(&page.document);
        if let Some(menu) = &menu {
            events::menu::wire_menu(&page, menu);
        }
        events::anchors::wire_anchor_scroll(&page, menu.as_ref());
        events::reveal::wire_reveal(&page);
        events::spy::wire_scroll_spy(&page, &scheduler);
        events::parallax::wire_parallax(&page, &scheduler);
        events::embeds::wire_embed_pausing(&page);

        scheduler.start();
        log::info!(
            "[init] wired (reduced_motion={}, observers={})",
            page.reduced_motion,
            page.observers_supported
        );
        Ok(())
    }
}
