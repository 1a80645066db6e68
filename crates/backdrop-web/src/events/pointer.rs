use crate::constants::{CURSOR_HOVER_CLASS, INTERACTIVE_SELECTOR};
use crate::dom;
use crate::frame::SharedDriver;
use crate::FieldAnimation;
use backdrop_core::constants::{PRESS_DURATION_MS, PRESS_EASING, PRESS_SCALE_FROM, PRESS_SCALE_TO};
use backdrop_core::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub field: SharedDriver<FieldAnimation>,
    pub cursor_el: Option<web::HtmlElement>,
    pub cursor: Rc<RefCell<CursorFollower>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_hover(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        if let Some(el) = &w.cursor_el {
            let mut cursor = w.cursor.borrow_mut();
            cursor.move_to(x, y);
            let (left, top) = cursor.style_position();
            let _ = el.style().set_property("left", &left);
            let _ = el.style().set_property("top", &top);
        }
        w.field.borrow_mut().animation_mut().pointer_moved(x, y);
    });
}

fn wire_pointerdown(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let field = w.field.clone();
    dom::listen(&window, "pointerdown", move |ev: web::PointerEvent| {
        field
            .borrow_mut()
            .animation_mut()
            .apply_impulse(ev.client_x() as f32, ev.client_y() as f32);
    });
}

fn wire_hover(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(cursor_el) = w.cursor_el.clone() else {
        return;
    };
    for (event, hover) in [("pointerover", true), ("pointerout", false)] {
        let el = cursor_el.clone();
        let cursor = w.cursor.clone();
        dom::listen(&document, event, move |ev: web::PointerEvent| {
            if !dom::closest_matches(ev.target(), INTERACTIVE_SELECTOR) {
                return;
            }
            if cursor.borrow_mut().set_hover(hover) {
                let cl = el.class_list();
                let _ = if hover {
                    cl.add_1(CURSOR_HOVER_CLASS)
                } else {
                    cl.remove_1(CURSOR_HOVER_CLASS)
                };
            }
        });
    }
}

/// Small press animation on every button. Best effort: browsers without
/// `Element.animate`, or that throw from it, simply get no animation.
pub fn wire_button_press(buttons: Vec<web::Element>) {
    for button in buttons {
        let target = button.clone();
        dom::listen(&button, "pointerdown", move |_ev: web::PointerEvent| {
            let _ = play_press(&target);
        });
    }
}

fn play_press(el: &web::Element) -> Result<(), JsValue> {
    let animate: js_sys::Function = js_sys::Reflect::get(el, &"animate".into())?.dyn_into()?;

    let frames = js_sys::Array::new();
    for transform in [PRESS_SCALE_FROM, PRESS_SCALE_TO] {
        let kf = js_sys::Object::new();
        js_sys::Reflect::set(&kf, &"transform".into(), &transform.into())?;
        frames.push(&kf);
    }
    let opts = js_sys::Object::new();
    js_sys::Reflect::set(&opts, &"duration".into(), &PRESS_DURATION_MS.into())?;
    js_sys::Reflect::set(&opts, &"fill".into(), &"forwards".into())?;
    js_sys::Reflect::set(&opts, &"easing".into(), &PRESS_EASING.into())?;

    animate.call2(el, &frames, &opts)?;
    Ok(())
}
