use super::menu::Menu;
use super::Page;
use crate::constants::ANCHOR_SELECTOR;
use crate::core::{anchor_scroll_top, in_page_target, scroll_behavior, ScrollMode};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

// Smooth in-page navigation that clears the sticky header
pub fn wire_anchor_scroll(page: &Rc<Page>, menu: Option<&Rc<Menu>>) {
    let anchors = dom::query_all(&page.document, ANCHOR_SELECTOR);
    log::debug!("[anchors] wiring {} in-page links", anchors.len());
    for anchor in anchors {
        let page = page.clone();
        let menu = menu.cloned();
        let link = anchor.clone();
        dom::add_click_listener(&anchor, move |ev: web::MouseEvent| {
            let href = link.get_attribute("href");
            let Some(id) = in_page_target(href.as_deref()) else {
                return;
            };
            let Some(target) = dom::query(&page.document, id) else {
                return;
            };
            ev.prevent_default();
            scroll_to_target(&page, &target);
            if let Some(menu) = &menu {
                menu.close();
            }
            if let Ok(history) = page.window.history() {
                _ = history.push_state_with_url(&JsValue::NULL, "", Some(id));
            }
        });
    }
}

fn scroll_to_target(page: &Page, target: &web::Element) {
    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(&page.window),
        page.header_height(),
        page.config.anchor_offset,
    );
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(match scroll_behavior(page.reduced_motion) {
        ScrollMode::Smooth => web::ScrollBehavior::Smooth,
        ScrollMode::Instant => web::ScrollBehavior::Auto,
    });
    page.window.scroll_to_with_scroll_to_options(&opts);
}
