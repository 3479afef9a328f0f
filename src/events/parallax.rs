use super::Page;
use crate::constants::ORNAMENT_SELECTOR;
use crate::core::{parallax_offset, parallax_transform};
use crate::dom;
use crate::frame::ScrollScheduler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_parallax(page: &Rc<Page>, scheduler: &ScrollScheduler) {
    if page.reduced_motion {
        return;
    }
    let Some(ornament) = dom::query(&page.document, ORNAMENT_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let factor = page.config.parallax_factor;
    scheduler.add_on_scroll(move |scroll_y| {
        let transform = parallax_transform(parallax_offset(scroll_y, factor));
        _ = ornament.style().set_property("transform", &transform);
    });
}
