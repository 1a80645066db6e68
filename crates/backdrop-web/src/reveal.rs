use crate::constants::*;
use crate::dom;
use backdrop_core::{skill_css_value, skill_value, RevealKind, RevealLog};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_reveals(document: &web::Document) {
    observe_group(dom::query_document(document, REVEAL_SELECTOR), RevealKind::Section);
    observe_group(dom::query_document(document, SKILL_BAR_SELECTOR), RevealKind::SkillBar);
    observe_group(
        dom::query_document(document, PROJECT_CARD_SELECTOR),
        RevealKind::ProjectCard,
    );
}

/// One observer per group; each element fires once and is then unobserved.
fn observe_group(elements: Vec<web::Element>, kind: RevealKind) {
    if elements.is_empty() {
        return;
    }
    let log = Rc::new(RefCell::new(RevealLog::new(kind)));
    let tracked = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let node: &web::Node = &target;
                let Some(index) = tracked.iter().position(|el| el.is_same_node(Some(node))) else {
                    continue;
                };
                if log.borrow_mut().fire(index) {
                    reveal(&target, kind, index);
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(kind.threshold()));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(o) => o,
        Err(e) => {
            // no observer support: show everything straight away
            log::warn!("[reveal] IntersectionObserver unavailable ({:?}); revealing {:?} now", e, kind);
            for (i, el) in elements.iter().enumerate() {
                reveal(el, kind, i);
            }
            return;
        }
    };
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    log::info!("[reveal] observing {} {:?} elements", elements.len(), kind);
}

fn reveal(el: &web::Element, kind: RevealKind, index: usize) {
    if kind == RevealKind::SkillBar {
        let value = skill_value(el.get_attribute(SKILL_VALUE_ATTR).as_deref());
        dom::set_style(el, SKILL_VALUE_PROPERTY, &skill_css_value(value));
    }
    let delay = kind.delay(index);
    if delay.is_zero() {
        let _ = el.class_list().add_1(kind.class());
        return;
    }
    let target = el.clone();
    let add_class = Closure::once_into_js(move || {
        let _ = target.class_list().add_1(kind.class());
    });
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            add_class.unchecked_ref(),
            delay.as_millis() as i32,
        );
    }
}
