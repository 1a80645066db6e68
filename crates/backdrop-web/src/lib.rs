#![cfg(target_arch = "wasm32")]
use backdrop_core::{AnimationDriver, CursorFollower, FieldParams, ParticleField, OVERRIDE_KEYS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod modal;
mod reveal;

use canvas::CanvasSurface;
use constants::*;

pub(crate) type FieldAnimation = ParticleField<CanvasSurface>;

fn wire_field_resize(field: &frame::SharedDriver<FieldAnimation>) {
    let Some(window) = web::window() else {
        return;
    };
    let field = field.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::viewport_size();
        field.borrow_mut().animation_mut().on_resize(w, h);
    });
}

// Tuning overrides come from `data-*` attributes on the canvas. Bad values are
// logged and the defaults kept.
fn field_params(canvas: Option<&web::HtmlCanvasElement>) -> FieldParams {
    let defaults = FieldParams::default();
    let Some(canvas) = canvas else {
        return defaults;
    };
    let lookup = |key: &str| canvas.get_attribute(&format!("{OVERRIDE_ATTR_PREFIX}{key}"));
    let present: Vec<&str> = OVERRIDE_KEYS
        .into_iter()
        .filter(|k| lookup(*k).is_some())
        .collect();
    if present.is_empty() {
        return defaults;
    }
    log::info!("[field] canvas overrides: {:?}", present);
    match defaults.with_overrides(lookup) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[field] ignoring canvas overrides: {}", e);
            defaults
        }
    }
}

fn build_field(document: &web::Document) -> FieldAnimation {
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let params = field_params(canvas.as_ref());
    let surface = canvas.and_then(CanvasSurface::new);
    if surface.is_none() {
        log::info!("[field] no #{} 2D canvas; particle field disabled", CANVAS_ID);
    }
    let (w, h) = dom::viewport_size();
    let mut field = ParticleField::new(surface, w, h, params, rand::random());
    field.initialize(w, h);
    log::info!(
        "[field] {} particles (cap {}) for {:.0}x{:.0}",
        field.particles().len(),
        field.max_particles(),
        w,
        h
    );
    field
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Particle field: resize + pointer handlers, then the frame loop
    let field = Rc::new(RefCell::new(AnimationDriver::new(build_field(&document))));
    wire_field_resize(&field);

    let cursor_el = dom::html_element_by_id(&document, CURSOR_ID);
    events::wire_pointer_handlers(events::PointerWiring {
        field: field.clone(),
        cursor_el,
        cursor: Rc::new(RefCell::new(CursorFollower::default())),
    });

    // Reveals and project modal
    reveal::wire_reveals(&document);
    let cards = dom::query_document(&document, PROJECT_CARD_SELECTOR);
    match modal::wire_modal(&document) {
        Some(m) => modal::wire_project_cards(&cards, &m),
        None if !cards.is_empty() => {
            log::warn!("[modal] #{} missing; project cards are not clickable", MODAL_ID)
        }
        None => {}
    }

    // Floating decor only animates when there is something to move
    let decor = frame::DecorLayer::new(
        dom::query_document(&document, FLOATING_DECOR_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect(),
    );
    if !decor.is_empty() {
        frame::start_loop(Rc::new(RefCell::new(AnimationDriver::new(decor))), "decor");
    }

    events::wire_button_press(dom::query_document(&document, BUTTON_SELECTOR));

    frame::start_loop(field, "field");
    Ok(())
}
