use crate::constants::REDUCED_MOTION_QUERY;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `querySelector`; an invalid selector counts as no match.
#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// `querySelectorAll` collected into elements.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Rendered height of an optional element, 0 when absent.
#[inline]
pub fn offset_height(el: Option<&web::HtmlElement>) -> f64 {
    el.map(|e| e.offset_height() as f64).unwrap_or(0.0)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn supports_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

#[inline]
pub fn add_click_listener(el: &web::Element, handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_keydown_listener(
    target: &web::EventTarget,
    handler: impl FnMut(web::KeyboardEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register a passive listener that lives for the page lifetime.
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Build an `IntersectionObserver` whose callback receives each entry.
/// The observer is handed to the callback so it can `unobserve`.
pub fn intersection_observer(
    root_margin: &str,
    threshold: Option<f64>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> Result<web::IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    if let Some(t) = threshold {
        init.set_threshold(&JsValue::from_f64(t));
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}
