// Host-side tests for the page hooks.
// The web crate is wasm-only, so we include the pure constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use backdrop_core::OVERRIDE_KEYS;
use constants::*;

#[test]
fn ids_are_bare_identifiers() {
    for id in [
        CANVAS_ID,
        CURSOR_ID,
        MODAL_ID,
        MODAL_TITLE_ID,
        MODAL_DESC_ID,
        MODAL_TOOLS_ID,
        MODAL_REPO_ID,
    ] {
        assert!(!id.is_empty());
        assert!(
            id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
            "{id} is not a plain id"
        );
    }
}

#[test]
fn card_attributes_are_data_attributes() {
    for attr in [CARD_TITLE_ATTR, CARD_DESC_ATTR, CARD_TOOLS_ATTR, SKILL_VALUE_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert_eq!(OVERRIDE_ATTR_PREFIX, "data-");
}

#[test]
fn interactive_selector_covers_cursor_targets() {
    let parts: Vec<&str> = INTERACTIVE_SELECTOR.split(',').map(str::trim).collect();
    assert_eq!(parts, ["a", "button", ".project-card", ".icon", ".btn"]);
    assert!(parts.contains(&BUTTON_SELECTOR));
}

#[test]
fn focusable_selector_skips_negative_tabindex() {
    assert!(FOCUSABLE_SELECTOR.contains("a[href]"));
    assert!(FOCUSABLE_SELECTOR.contains("[tabindex]:not([tabindex=\"-1\"])"));
}

#[test]
fn disabled_check_uses_the_pseudo_class() {
    // the attribute form misses controls inside a disabled fieldset
    assert_eq!(DISABLED_SELECTOR, ":disabled");
    assert!(!DISABLED_SELECTOR.contains('['));
}

#[test]
fn skill_property_is_a_custom_property() {
    assert!(SKILL_VALUE_PROPERTY.starts_with("--"));
}

#[test]
fn override_attributes_are_well_formed() {
    for key in OVERRIDE_KEYS {
        let attr = format!("{OVERRIDE_ATTR_PREFIX}{key}");
        assert!(attr.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{attr}");
    }
}
