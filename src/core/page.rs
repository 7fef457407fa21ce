// Small pieces of state behind the simpler page behaviors.

use super::constants::HEADER_SCROLLED_AFTER_PX;

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    /// Body `overflow` while in this state; empty clears the inline value.
    pub fn body_overflow(self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            ""
        }
    }
}

/// Which half of the logo loop is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Forward,
    Reverse,
}

impl LoopPhase {
    /// Phase to switch to when the current clip ends.
    pub fn next(self) -> Self {
        match self {
            LoopPhase::Forward => LoopPhase::Reverse,
            LoopPhase::Reverse => LoopPhase::Forward,
        }
    }
}

/// Inline style for the floating contact button: `(opacity, pointer-events)`.
pub fn float_button_style(cta_visible: bool) -> (&'static str, &'static str) {
    if cta_visible {
        ("0", "none")
    } else {
        ("1", "all")
    }
}

/// True when a nav link `href` points at the section with `section_id`.
pub fn nav_link_targets(href: Option<&str>, section_id: &str) -> bool {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(anchor) => !section_id.is_empty() && anchor == section_id,
        None => false,
    }
}
