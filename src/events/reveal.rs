use super::Page;
use crate::constants::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR};
use crate::dom;
use std::rc::Rc;

pub fn wire_reveal(page: &Rc<Page>) {
    let targets = dom::query_all(&page.document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    if page.reduced_motion || !page.observers_supported {
        for el in &targets {
            _ = el.class_list().add_1(REVEAL_CLASS);
        }
        log::debug!("[reveal] revealed {} elements immediately", targets.len());
        return;
    }

    let observer = dom::intersection_observer(
        REVEAL_ROOT_MARGIN,
        Some(page.config.reveal_threshold),
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                _ = target.class_list().add_1(REVEAL_CLASS);
                observer.unobserve(&target);
            }
        },
    );
    match observer {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            log::debug!("[reveal] observing {} elements", targets.len());
        }
        Err(e) => {
            log::warn!("[reveal] observer unavailable: {:?}", e);
            for el in &targets {
                _ = el.class_list().add_1(REVEAL_CLASS);
            }
        }
    }
}
