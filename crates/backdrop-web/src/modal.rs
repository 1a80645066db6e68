use crate::constants::*;
use crate::dom;
use crate::events;
use backdrop_core::{KeyAction, Modal, OpenOutcome, ProjectDetails};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedModal = Rc<RefCell<ModalView>>;

/// The project modal's DOM plus its open/closed state.
pub struct ModalView {
    document: web::Document,
    root: web::Element,
    title: Option<web::Element>,
    desc: Option<web::Element>,
    tools: Option<web::Element>,
    repo: Option<web::HtmlAnchorElement>,
    state: Modal<web::HtmlElement>,
    key_handler: Option<js_sys::Function>,
}

impl ModalView {
    fn from_document(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id(MODAL_ID)?;
        Some(Self {
            document: document.clone(),
            root,
            title: document.get_element_by_id(MODAL_TITLE_ID),
            desc: document.get_element_by_id(MODAL_DESC_ID),
            tools: document.get_element_by_id(MODAL_TOOLS_ID),
            repo: document
                .get_element_by_id(MODAL_REPO_ID)
                .and_then(|el| el.dyn_into::<web::HtmlAnchorElement>().ok()),
            state: Modal::new(),
            key_handler: None,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn open_from_card(&mut self, card: &web::Element) {
        let details = read_card(card);
        let previously_focused = self
            .document
            .active_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let outcome = self.state.open(previously_focused);
        self.render(&details);

        if outcome == OpenOutcome::Opened {
            let _ = self.root.class_list().add_1(MODAL_OPEN_CLASS);
            let _ = self.root.set_attribute("aria-hidden", "false");
            self.lock_scroll(true);
            if let Some(handler) = &self.key_handler {
                let _ = self
                    .document
                    .add_event_listener_with_callback("keydown", handler);
            }
        }
        log::info!("[modal] {:?} {:?}", outcome, details.title);

        if let Some(close) = self.close_button() {
            let _ = close.focus();
        }
    }

    pub fn close(&mut self) {
        let Some(dismissed) = self.state.close() else {
            return;
        };
        let _ = self.root.class_list().remove_1(MODAL_OPEN_CLASS);
        let _ = self.root.set_attribute("aria-hidden", "true");
        self.lock_scroll(false);
        if let Some(handler) = &self.key_handler {
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", handler);
        }
        if let Some(el) = dismissed.restore_focus {
            let _ = el.focus();
        }
        log::info!("[modal] closed");
    }

    pub fn handle_key(&mut self, ev: &web::KeyboardEvent) {
        let key = ev.key();
        let focusables = if key == "Tab" {
            self.focusables()
        } else {
            Vec::new()
        };
        let active = self.document.active_element().and_then(|a| {
            let node: &web::Node = &a;
            focusables.iter().position(|el| el.is_same_node(Some(node)))
        });
        match self
            .state
            .key_action(&key, ev.shift_key(), focusables.len(), active)
        {
            KeyAction::Pass => {}
            KeyAction::Block => ev.prevent_default(),
            KeyAction::Close => {
                ev.prevent_default();
                self.close();
            }
            KeyAction::Focus(i) => {
                ev.prevent_default();
                if let Some(el) = focusables.get(i) {
                    let _ = el.focus();
                }
            }
        }
    }

    fn render(&self, details: &ProjectDetails) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(&details.title));
        }
        if let Some(el) = &self.desc {
            el.set_text_content(Some(&details.description));
        }
        if let Some(el) = &self.tools {
            el.set_inner_html("");
            for tool in &details.tools {
                let Ok(span) = self.document.create_element("span") else {
                    continue;
                };
                span.set_class_name(TOOL_CLASS);
                span.set_text_content(Some(tool));
                let _ = el.append_child(&span);
            }
        }
        if let Some(repo) = &self.repo {
            repo.set_href(&details.repo_url);
        }
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }

    fn close_button(&self) -> Option<web::HtmlElement> {
        self.root
            .query_selector(MODAL_CLOSE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }

    // Enabled and rendered focusable descendants, in document order.
    fn focusables(&self) -> Vec<web::HtmlElement> {
        dom::query_all(&self.root, FOCUSABLE_SELECTOR)
            .into_iter()
            .filter(|el| !el.matches(DISABLED_SELECTOR).unwrap_or(false))
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .filter(|el| el.offset_parent().is_some())
            .collect()
    }
}

fn read_card(card: &web::Element) -> ProjectDetails {
    let repo = card
        .query_selector(CARD_REPO_LINK_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlAnchorElement>().ok())
        .map(|a| a.href());
    ProjectDetails::from_card_data(
        card.get_attribute(CARD_TITLE_ATTR).as_deref(),
        card.get_attribute(CARD_DESC_ATTR).as_deref(),
        card.get_attribute(CARD_TOOLS_ATTR).as_deref(),
        repo.as_deref(),
    )
}

/// Build the modal controller and wire its close controls. `None` when the
/// page has no modal.
pub fn wire_modal(document: &web::Document) -> Option<SharedModal> {
    let view = ModalView::from_document(document)?;
    let root = view.root.clone();
    let modal = Rc::new(RefCell::new(view));

    let handler = events::keyboard::modal_keydown_handler(Rc::downgrade(&modal));
    modal.borrow_mut().key_handler = Some(handler);

    let mut controls = dom::query_all(&root, MODAL_CLOSE_SELECTOR);
    controls.extend(root.query_selector(MODAL_BACKDROP_SELECTOR).ok().flatten());
    for control in controls {
        let modal = modal.clone();
        dom::listen(&control, "click", move |_ev: web::MouseEvent| {
            modal.borrow_mut().close();
        });
    }
    Some(modal)
}

/// Cards open the modal on click (except clicks on links inside them) and on
/// Enter/Space.
pub fn wire_project_cards(cards: &[web::Element], modal: &SharedModal) {
    for card in cards {
        let click_modal = modal.clone();
        let click_card = card.clone();
        dom::listen(card, "click", move |ev: web::MouseEvent| {
            if dom::closest_matches(ev.target(), "a") {
                return;
            }
            click_modal.borrow_mut().open_from_card(&click_card);
        });

        let key_modal = modal.clone();
        let key_card = card.clone();
        dom::listen(card, "keydown", move |ev: web::KeyboardEvent| {
            if events::keyboard::is_activation_key(&ev.key()) {
                ev.prevent_default();
                key_modal.borrow_mut().open_from_card(&key_card);
            }
        });
    }
}
