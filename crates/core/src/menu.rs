//! Mobile navigation menu state

use serde::{Deserialize, Serialize};

/// Open/closed state of the mobile navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// State after the menu trigger is activated
    #[must_use]
    pub const fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// State after a navigation link is selected
    #[must_use]
    pub const fn close(self) -> Self {
        Self { open: false }
    }
}

/// Selectors and classes used by the mobile menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// ID of the hamburger trigger
    pub toggle_id: String,
    /// Selector for the navigation panel
    pub panel_selector: String,
    /// Selector for links that close the menu
    pub link_selector: String,
    /// Selector for the trigger's bars, relative to the trigger
    pub bar_selector: String,
    /// Class on the panel while open
    pub panel_class: String,
    /// Class on the trigger while open
    pub toggle_class: String,
    /// Class on each bar while open
    pub bar_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "mobile-menu".to_string(),
            panel_selector: ".nav-links".to_string(),
            link_selector: ".nav-links a".to_string(),
            bar_selector: ".bar".to_string(),
            panel_class: "active".to_string(),
            toggle_class: "is-active".to_string(),
            bar_class: "animate".to_string(),
        }
    }
}
