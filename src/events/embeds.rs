use super::Page;
use crate::constants::{AUTOSTART_PARAM, EMBED_ROOT_MARGIN, EMBED_SELECTOR};
use crate::core::autostart_update;
use crate::dom;
use std::rc::Rc;

/// Pause embedded 3D viewers while they are offscreen by flipping their
/// `autostart` query parameter.
pub fn wire_embed_pausing(page: &Rc<Page>) {
    if !page.observers_supported {
        return;
    }
    let players = dom::query_all(&page.document, EMBED_SELECTOR);
    if players.is_empty() {
        return;
    }
    let base = page.document.base_uri().ok().flatten();
    let observer = dom::intersection_observer(EMBED_ROOT_MARGIN, None, move |entry, _| {
        let target = entry.target();
        let Some(src) = target.get_attribute("src") else {
            return;
        };
        match autostart_update(&src, base.as_deref(), entry.is_intersecting(), AUTOSTART_PARAM) {
            Ok(Some(next)) => {
                log::debug!("[embeds] {} -> {}", src, next);
                _ = target.set_attribute("src", &next);
            }
            Ok(None) => {}
            Err(e) => log::debug!("[embeds] {}", e),
        }
    });
    match observer {
        Ok(observer) => {
            for p in &players {
                observer.observe(p);
            }
            log::debug!("[embeds] observing {} players", players.len());
        }
        Err(e) => log::warn!("[embeds] observer unavailable: {:?}", e),
    }
}
