//! Scroll reveal decisions

use serde::{Deserialize, Serialize};

/// What to do with an observed element on an intersection change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing
    Reveal,
    /// Already revealed; stop observing without touching classes
    Release,
    /// Not in view yet
    Wait,
}

/// Decides how to react to an intersection entry
///
/// Reveals are one-shot: an element that already carries the visible class
/// is released even if it scrolls out and back in.
#[must_use]
pub const fn reveal_action(is_intersecting: bool, already_revealed: bool) -> RevealAction {
    match (already_revealed, is_intersecting) {
        (true, _) => RevealAction::Release,
        (false, true) => RevealAction::Reveal,
        (false, false) => RevealAction::Wait,
    }
}

/// Intersection observer settings for reveal targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Selector for elements that fade in
    pub selector: String,
    /// Class added once an element is in view
    pub visible_class: String,
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl RevealConfig {
    /// Threshold limited to the 0..=1 range the observer accepts
    #[must_use]
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
