//! RacketPro Web - WASM enhancements for the static marketing page
//!
//! Binds the logic in `racketpro-core` to the browser DOM.
//!
//! ## Module Structure
//! - `app`: Start-up and per-component initialization
//! - `components`: Mobile menu, smooth scroll, lead form, status line, reveal
//! - `config`: Embedded JSON configuration
//! - `dom`: web-sys helpers
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;

pub use app::{InitReport, init_site, start};
pub use error::{DomError, Result};
