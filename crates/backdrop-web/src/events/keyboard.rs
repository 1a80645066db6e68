use crate::modal::ModalView;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that activate a focused project card.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Document keydown handler for the open modal (Escape, focus trap).
///
/// The closure is leaked so the returned function stays valid; the modal
/// adds it on open and removes it on close.
pub fn modal_keydown_handler(modal: Weak<RefCell<ModalView>>) -> js_sys::Function {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let Some(modal) = modal.upgrade() else {
            return;
        };
        // a listener removed mid-dispatch can still fire once
        if !modal.borrow().is_open() {
            return;
        }
        modal.borrow_mut().handle_key(&ev);
    }) as Box<dyn FnMut(_)>);
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}
