//! Loading `SiteConfig` from the page
//!
//! A page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   {"form": {"submit_delay_ms": 800}}
//! </script>
//! ```

use racketpro_core::SiteConfig;
use tracing::{debug, warn};
use web_sys::Document;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Reads the embedded configuration, falling back to defaults
///
/// A missing element yields the defaults silently; malformed JSON is logged
/// and also yields the defaults.
#[must_use]
pub fn load_site_config(document: &Document, element_id: &str) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(element_id)
        .and_then(|element| element.text_content())
    else {
        debug!(id = element_id, "no embedded site config, using defaults");
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!(id = element_id, error = %err, "ignoring malformed site config");
            SiteConfig::default()
        }
    }
}
