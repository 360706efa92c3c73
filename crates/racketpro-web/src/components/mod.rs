//! Page enhancements, one module per behavior

pub mod lead_form;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod status;

pub use lead_form::{DomLeadForm, init_lead_form};
pub use menu::init_mobile_menu;
pub use reveal::init_reveal;
pub use scroll::{init_smooth_scroll, scroll_to_fragment};
pub use status::StatusMessenger;
