//! Error types for DOM bindings
//!
//! Missing optional elements are not errors; initializers report them as
//! "nothing wired". These variants cover the browser refusing an operation.

use wasm_bindgen::JsValue;

/// Errors raised while binding page enhancements to the DOM
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No window object (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// A configured selector was rejected by the browser
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Adding an event listener failed
    #[error("failed to listen for '{event}': {reason}")]
    ListenerFailed { event: String, reason: String },

    /// An element exists but is not the expected kind
    #[error("element '{id}' is not a {expected}")]
    CastFailed { id: String, expected: &'static str },

    /// Inserting a created element failed
    #[error("failed to append '{id}': {reason}")]
    AppendFailed { id: String, reason: String },
}

impl DomError {
    pub fn invalid_selector(selector: &str, reason: &JsValue) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{reason:?}"),
        }
    }

    pub fn listener_failed(event: &str, reason: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.to_string(),
            reason: format!("{reason:?}"),
        }
    }
}

/// Result type alias for DOM binding operations
pub type Result<T> = std::result::Result<T, DomError>;
