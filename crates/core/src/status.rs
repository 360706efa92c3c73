//! Form status line state
//!
//! [`StatusBoard`] is the pure half of the status messenger: it decides what
//! the status line should show and whether a scheduled clear is still valid.
//! Every shown message carries a generation; a clear scheduled for an older
//! generation is ignored, so a newer message is never wiped early.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time a status message stays visible
pub const DEFAULT_STATUS_DISPLAY_MS: u32 = 5_000;

/// Category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Class attribute applied to the status element
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "status-msg success",
            Self::Error => "status-msg error",
        }
    }
}

/// What the status line should currently display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Identifies this message when its clear timer fires
    pub generation: u64,
    /// How long the message stays before it is cleared
    pub display_for: Duration,
}

/// Status line configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// ID of the status element inside the lead form
    pub element_id: String,
    /// Milliseconds before a message is cleared
    pub display_ms: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            element_id: "form-status".to_string(),
            display_ms: DEFAULT_STATUS_DISPLAY_MS,
        }
    }
}

impl StatusConfig {
    #[must_use]
    pub fn display_for(&self) -> Duration {
        Duration::from_millis(u64::from(self.display_ms))
    }
}

/// Current status line state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    current: Option<StatusMessage>,
    generation: u64,
    display_for: Duration,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(Duration::from_millis(u64::from(DEFAULT_STATUS_DISPLAY_MS)))
    }
}

impl StatusBoard {
    #[must_use]
    pub const fn new(display_for: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            display_for,
        }
    }

    /// Replaces the current message and returns it
    ///
    /// Any clear scheduled for an earlier message becomes stale.
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) -> StatusMessage {
        self.generation = self.generation.wrapping_add(1);
        let message = StatusMessage {
            text: text.into(),
            kind,
            generation: self.generation,
            display_for: self.display_for,
        };
        self.current = Some(message.clone());
        message
    }

    /// Clears the status line if `generation` is still the one on display
    ///
    /// Returns `true` when the line was cleared and needs re-rendering.
    pub fn expire(&mut self, generation: u64) -> bool {
        let is_current = self
            .current
            .as_ref()
            .is_some_and(|message| message.generation == generation);

        if is_current {
            self.current = None;
        }
        is_current
    }

    #[must_use]
    pub const fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn display_for(&self) -> Duration {
        self.display_for
    }
}
