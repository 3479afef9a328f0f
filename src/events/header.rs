use super::Page;
use crate::constants::SCROLLED_CLASS;
use crate::core::header_is_scrolled;
use crate::frame::ScrollScheduler;
use std::rc::Rc;

// Shadow the header once the page leaves the top
pub fn wire_header_shadow(page: &Rc<Page>, scheduler: &ScrollScheduler) {
    let Some(header) = page.header.clone() else {
        log::debug!("[header] no header, skipping");
        return;
    };
    let threshold = page.config.scrolled_threshold;
    scheduler.add(move |scroll_y| {
        let cl = header.class_list();
        if header_is_scrolled(scroll_y, threshold) {
            _ = cl.add_1(SCROLLED_CLASS);
        } else {
            _ = cl.remove_1(SCROLLED_CLASS);
        }
    });
}
