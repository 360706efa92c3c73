//! In-page anchor scrolling geometry

use serde::{Deserialize, Serialize};

/// Height of the fixed header the scroll target must clear
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

/// Anchor scrolling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Selector for anchors whose clicks are intercepted
    pub anchor_selector: String,
    /// Space left between the viewport top and the target
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".to_string(),
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Extracts the element id from a fragment href
///
/// Returns `None` for hrefs that are not fragments and for the bare `#`.
///
/// # Example
///
/// ```
/// use racketpro_core::scroll::fragment_id;
///
/// assert_eq!(fragment_id("#pricing"), Some("pricing"));
/// assert_eq!(fragment_id("#"), None);
/// assert_eq!(fragment_id("/courts"), None);
/// ```
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document-relative scroll position that puts a target just below the header
///
/// `element_top` is the target's viewport-relative top, `page_offset` the
/// current vertical scroll position.
#[must_use]
pub fn scroll_destination(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}
