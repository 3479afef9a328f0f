use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type ScrollHandler = Box<dyn FnMut(f64)>;

/// Coalesces scroll events: at most one animation frame is pending, and it
/// runs every registered handler with the scroll offset read in that frame.
pub struct ScrollScheduler {
    window: web::Window,
    handlers: RefCell<Vec<ScrollHandler>>,
    pending: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ScrollScheduler {
    pub fn new(window: web::Window) -> Rc<Self> {
        Rc::new(Self {
            window,
            handlers: RefCell::new(Vec::new()),
            pending: Cell::new(false),
            tick: RefCell::new(None),
        })
    }

    /// Register a handler and run it once with the current offset.
    pub fn add(&self, mut handler: impl FnMut(f64) + 'static) {
        handler(dom::scroll_y(&self.window));
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    /// Register a handler that first runs on the next scroll.
    pub fn add_on_scroll(&self, handler: impl FnMut(f64) + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Attach the passive scroll listener. Call once, after all handlers
    /// are added.
    pub fn start(self: &Rc<Self>) {
        let this = self.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            this.pending.set(false);
            let y = dom::scroll_y(&this.window);
            for handler in this.handlers.borrow_mut().iter_mut() {
                handler(y);
            }
        }) as Box<dyn FnMut()>));

        let this = self.clone();
        dom::add_passive_listener(&self.window, "scroll", move || this.request());
        log::debug!("[frame] scroll scheduler running {} handlers", self.handler_count());
    }

    fn request(&self) {
        if self.pending.replace(true) {
            return;
        }
        if let Some(tick) = self.tick.borrow().as_ref() {
            if self
                .window
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .is_err()
            {
                self.pending.set(false);
            }
        }
    }
}
