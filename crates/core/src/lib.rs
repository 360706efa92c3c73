//! Browser-independent logic for RacketPro Web page enhancements
//!
//! Everything here is pure or generic over the page, so it runs (and is
//! tested) natively. The `racketpro-web` crate binds it to the DOM.
//!
//! ## Module Structure
//! - `lead`: Lead record and required-field validation
//! - `form`: Submission workflow and the `LeadFormView` seam
//! - `submitter`: `LeadSubmitter` capability and the simulated backend
//! - `status`: Status line state with stale-clear protection
//! - `menu`: Mobile navigation open/closed state
//! - `scroll`: Fragment parsing and header-offset scroll geometry
//! - `reveal`: One-shot reveal decisions
//! - `config`: Site-wide configuration
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod form;
pub mod lead;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod status;
pub mod submitter;

#[cfg(test)]
mod tests;

pub use config::SiteConfig;
pub use error::{ConfigError, LeadError, SubmitError};
pub use form::{FieldIds, FormConfig, LeadFormController, LeadFormView, SubmitOutcome};
pub use lead::{Lead, LeadFields, RequiredField};
pub use menu::{MenuConfig, MenuState};
pub use reveal::{RevealAction, RevealConfig, reveal_action};
pub use scroll::{ScrollConfig, fragment_id, scroll_destination};
pub use status::{StatusBoard, StatusConfig, StatusKind, StatusMessage};
pub use submitter::{LeadSubmitter, SimulatedSubmitter, SleepFn};
