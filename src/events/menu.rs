use super::Page;
use crate::constants::{ARIA_EXPANDED, MENU_OPEN_CLASS, MENU_SELECTOR, NAV_TOGGLE_SELECTOR};
use crate::core::{closes_on_key, MenuState};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The mobile navigation toggle and the panel it controls.
pub struct Menu {
    toggle: web::HtmlElement,
    panel: web::Element,
}

impl Menu {
    pub fn find(document: &web::Document) -> Option<Rc<Self>> {
        let toggle = dom::query(document, NAV_TOGGLE_SELECTOR)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let panel = dom::query(document, MENU_SELECTOR)?;
        Some(Rc::new(Self { toggle, panel }))
    }

    pub fn is_open(&self) -> bool {
        self.panel.class_list().contains(MENU_OPEN_CLASS)
    }

    /// Flip `aria-expanded` and the panel's open class; focus the first
    /// link when opening.
    pub fn toggle(&self) {
        let state = MenuState::from_aria(self.toggle.get_attribute(ARIA_EXPANDED).as_deref());
        let next = state.toggled();
        _ = self.toggle.set_attribute(ARIA_EXPANDED, next.aria_value());
        _ = self.panel.class_list().toggle(MENU_OPEN_CLASS);
        if state.focus_first_link_after_toggle() {
            if let Some(first) = dom::query_all_in(&self.panel, "a")
                .into_iter()
                .next()
                .and_then(|a| a.dyn_into::<web::HtmlElement>().ok())
            {
                _ = first.focus();
            }
        }
        log::debug!("[menu] expanded={}", next.expanded);
    }

    /// Close if open; used after in-page navigation.
    pub fn close(&self) {
        if self.is_open() {
            self.toggle();
        }
    }
}

pub fn wire_menu(page: &Rc<Page>, menu: &Rc<Menu>) {
    let m = menu.clone();
    dom::add_click_listener(&menu.toggle, move |_| m.toggle());

    let m = menu.clone();
    dom::add_keydown_listener(&page.document, move |ev: web::KeyboardEvent| {
        if closes_on_key(&ev.key(), m.is_open()) {
            m.toggle();
            _ = m.toggle.focus();
        }
    });
}
