/// Page hooks: element ids, selectors and class names the frontend expects.
///
/// Kept free of `web_sys` so host-side tests can include this file directly.
// Canvas and cursor
pub const CANVAS_ID: &str = "bg-canvas";
pub const CURSOR_ID: &str = "custom-cursor";
pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .icon, .btn";

// Reveals
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";
pub const SKILL_VALUE_ATTR: &str = "data-value";
pub const SKILL_VALUE_PROPERTY: &str = "--value";
pub const PROJECT_CARD_SELECTOR: &str = ".projects-grid .project-card";

// Project cards
pub const CARD_TITLE_ATTR: &str = "data-title";
pub const CARD_DESC_ATTR: &str = "data-desc";
pub const CARD_TOOLS_ATTR: &str = "data-tools";
pub const CARD_REPO_LINK_SELECTOR: &str = ".project-actions a";

// Modal
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_DESC_ID: &str = "modal-desc";
pub const MODAL_TOOLS_ID: &str = "modal-tools";
pub const MODAL_REPO_ID: &str = "modal-repo";
pub const MODAL_BACKDROP_SELECTOR: &str = ".modal-backdrop";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_OPEN_CLASS: &str = "open";
pub const TOOL_CLASS: &str = "tool";
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button, textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";
// Matches controls disabled directly or through a disabled <fieldset>
pub const DISABLED_SELECTOR: &str = ":disabled";

// Decor and buttons
pub const FLOATING_DECOR_SELECTOR: &str = ".floating-decor";
pub const BUTTON_SELECTOR: &str = ".btn";

// Prefix for tuning overrides on the canvas element
pub const OVERRIDE_ATTR_PREFIX: &str = "data-";
