use super::Page;
use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR};
use crate::core::{current_section, link_is_active};
use crate::dom;
use crate::frame::ScrollScheduler;
use std::rc::Rc;
use web_sys as web;

// Highlight the nav link of the section under the header
pub fn wire_scroll_spy(page: &Rc<Page>, scheduler: &ScrollScheduler) {
    let sections: Vec<(String, web::Element)> = dom::query_all(&page.document, SECTION_SELECTOR)
        .into_iter()
        .map(|el| (el.id(), el))
        .collect();
    let links: Vec<web::Element> = dom::query_all(&page.document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter(|a| a.get_attribute("href").is_some_and(|h| h.starts_with('#')))
        .collect();
    if sections.is_empty() {
        return;
    }
    log::debug!(
        "[spy] {} sections, {} nav links",
        sections.len(),
        links.len()
    );

    let page = page.clone();
    scheduler.add(move |_scroll_y| {
        let header_height = page.header_height();
        let tops = sections
            .iter()
            .map(|(id, el)| (id.as_str(), el.get_bounding_client_rect().top()));
        if let Some(current) = current_section(tops, header_height, page.config.spy_offset) {
            activate(&links, current);
        }
    });
}

fn activate(links: &[web::Element], section_id: &str) {
    for a in links {
        let on = link_is_active(a.get_attribute("href").as_deref(), section_id);
        _ = a.class_list().toggle_with_force(ACTIVE_CLASS, on);
    }
}
