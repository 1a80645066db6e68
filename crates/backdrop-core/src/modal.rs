//! Project modal: content extraction, open/closed state and the focus trap.
//!
//! `F` is whatever handle the frontend uses for a focusable element. The web
//! crate uses `web_sys::HtmlElement`; tests use plain integers.

use crate::constants::FALLBACK_REPO_URL;
use smallvec::SmallVec;

pub type ToolList = SmallVec<[String; 4]>;

/// Split a comma-separated tool list, trimming entries and dropping empties.
pub fn parse_tools(raw: &str) -> ToolList {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Content shown in the modal, read from a project card's attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub tools: ToolList,
    pub repo_url: String,
}

impl ProjectDetails {
    pub fn from_card_data(
        title: Option<&str>,
        description: Option<&str>,
        tools: Option<&str>,
        repo_url: Option<&str>,
    ) -> Self {
        Self {
            title: title.unwrap_or_default().to_owned(),
            description: description.unwrap_or_default().to_owned(),
            tools: parse_tools(tools.unwrap_or_default()),
            repo_url: repo_url
                .filter(|u| !u.is_empty())
                .unwrap_or(FALLBACK_REPO_URL)
                .to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<F> {
    Closed,
    Open { return_focus: Option<F> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Modal was closed and is now open.
    Opened,
    /// Modal was already open; content is refreshed, focus record kept.
    Refreshed,
}

/// Result of closing an open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Dismissed<F> {
    pub restore_focus: Option<F>,
}

/// What the keydown handler should do with a key while the modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Not ours; let the browser handle it.
    Pass,
    /// Prevent default and do nothing else.
    Block,
    /// Prevent default and close the modal.
    Close,
    /// Prevent default and focus the focusable at this index.
    Focus(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modal<F> {
    state: ModalState<F>,
}

impl<F> Default for Modal<F> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }
}

impl<F> Modal<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn state(&self) -> &ModalState<F> {
        &self.state
    }

    /// Open, remembering `previously_focused` for [`close`]. Only one modal
    /// instance exists, so opening again keeps the first focus record.
    ///
    /// [`close`]: Modal::close
    pub fn open(&mut self, previously_focused: Option<F>) -> OpenOutcome {
        if self.is_open() {
            return OpenOutcome::Refreshed;
        }
        self.state = ModalState::Open {
            return_focus: previously_focused,
        };
        OpenOutcome::Opened
    }

    /// Close. Returns `None` if the modal was not open.
    pub fn close(&mut self) -> Option<Dismissed<F>> {
        match std::mem::replace(&mut self.state, ModalState::Closed) {
            ModalState::Open { return_focus } => Some(Dismissed {
                restore_focus: return_focus,
            }),
            ModalState::Closed => None,
        }
    }

    /// Map a keydown to an action. `active` is the index of the focused
    /// element within the modal's `focusable` elements, if it is one of them.
    pub fn key_action(&self, key: &str, shift: bool, focusable: usize, active: Option<usize>) -> KeyAction {
        if !self.is_open() {
            return KeyAction::Pass;
        }
        match key {
            "Escape" => KeyAction::Close,
            "Tab" => trap_tab(shift, focusable, active),
            _ => KeyAction::Pass,
        }
    }
}

/// Wrap Tab/Shift+Tab at the ends of the focusable list.
pub fn trap_tab(shift: bool, focusable: usize, active: Option<usize>) -> KeyAction {
    if focusable == 0 {
        return KeyAction::Block;
    }
    let last = focusable - 1;
    match (shift, active) {
        (true, Some(0)) => KeyAction::Focus(last),
        (false, Some(i)) if i == last => KeyAction::Focus(0),
        _ => KeyAction::Pass,
    }
}
