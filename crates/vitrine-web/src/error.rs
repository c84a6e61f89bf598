//! Error types for DOM binding
//!
//! Failures here are environmental (no window, a listener the browser
//! refused). Missing markup is never an error: bindings report it as
//! "nothing to bind" instead.

use wasm_bindgen::JsValue;

/// Errors that can occur while attaching page behaviors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Not running in a browser context
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    #[error("failed to attach '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    #[error("failed to set style '{property}': {reason}")]
    StyleFailed { property: String, reason: String },

    #[error("failed to update class list: {0}")]
    ClassListFailed(String),

    #[error("failed to create intersection observer: {0}")]
    ObserverFailed(String),

    #[error("failed to read scroll position: {0}")]
    ScrollFailed(String),
}

impl BindError {
    pub fn listener_failed(event: &str, cause: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.to_string(),
            reason: format!("{cause:?}"),
        }
    }

    pub fn style_failed(property: &str, cause: &JsValue) -> Self {
        Self::StyleFailed {
            property: property.to_string(),
            reason: format!("{cause:?}"),
        }
    }
}

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindError>;
