use backdrop_core::{Animate, AnimationDriver, FloatingDecor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver<A> = Rc<RefCell<AnimationDriver<A>>>;

/// Start `driver` and step it from `requestAnimationFrame` until it is
/// stopped. A stopped driver stops rescheduling; call again to resume.
pub fn start_loop<A: Animate + 'static>(driver: SharedDriver<A>, label: &'static str) {
    driver.borrow_mut().start();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let driver_tick = driver.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !driver_tick.borrow_mut().step() {
            log::info!("[raf] {} stopped after {} frames", label, driver_tick.borrow().frames());
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[raf] {} started", label);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Floating decor bound to its elements.
pub struct DecorLayer {
    decor: FloatingDecor,
    elements: Vec<web::HtmlElement>,
}

impl DecorLayer {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        Self {
            decor: FloatingDecor::new(),
            elements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Animate for DecorLayer {
    fn frame(&mut self) {
        self.decor.advance();
        for (i, el) in self.elements.iter().enumerate() {
            let _ = el.style().set_property("transform", &self.decor.transform(i));
        }
    }
}
