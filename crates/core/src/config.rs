//! Site-wide configuration
//!
//! Every section defaults to the page's built-in markup conventions, and every
//! field is optional when loading from JSON, so a page only has to spell out
//! what it changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::form::FormConfig;
use crate::menu::MenuConfig;
use crate::reveal::RevealConfig;
use crate::scroll::ScrollConfig;
use crate::status::StatusConfig;

/// Configuration for all page enhancements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub scroll: ScrollConfig,
    pub form: FormConfig,
    pub status: StatusConfig,
    pub reveal: RevealConfig,
}

impl SiteConfig {
    /// Parses a (possibly partial) JSON configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::parse(e.to_string()))
    }
}
