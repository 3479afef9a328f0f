pub mod anchors;
pub mod embeds;
pub mod header;
pub mod menu;
pub mod parallax;
pub mod reveal;
pub mod spy;

use crate::config::SiteConfig;
use crate::constants::HEADER_SELECTOR;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Static handles and settings shared by every behavior, queried once.
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub header: Option<web::HtmlElement>,
    pub reduced_motion: bool,
    pub observers_supported: bool,
    pub config: SiteConfig,
}

impl Page {
    pub fn new(window: web::Window, document: web::Document, config: SiteConfig) -> Rc<Self> {
        let header = dom::query(&document, HEADER_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let reduced_motion = dom::prefers_reduced_motion(&window);
        let observers_supported = dom::supports_intersection_observer(&window);
        Rc::new(Self {
            window,
            document,
            header,
            reduced_motion,
            observers_supported,
            config,
        })
    }

    /// Current sticky header height, 0 without a header.
    #[inline]
    pub fn header_height(&self) -> f64 {
        dom::offset_height(self.header.as_ref())
    }
}
