//! Core rules for the heritage page controllers.
//!
//! Everything here is plain Rust with no DOM access so it can be tested on
//! the host; the `heritage-ui` crate drives these state machines from
//! browser events.

mod config;
mod contact;
mod error;
mod footer;
mod menu;
mod overlay;
mod timeline;

pub use config::{HeritageConfig, HeritageConfigOverrides};
pub use contact::{
    field_is_invalid, is_email_shaped, is_js_whitespace, success_notice, ContactError,
    ContactField, ContactSubmission, ValidContact, INVALID_NOTICE,
};
pub use error::HeritageError;
pub use footer::{current_year, footer_year};
pub use menu::{MenuEffect, MenuEvent, MenuState};
pub use overlay::{Language, OverlayEffect, OverlayEvent, OverlayState, TimerCommand};
pub use timeline::{
    centered_scroll_left, is_four_digit_year, nav_alignment_target, NavKey, PanelContent,
    TimelineData, TimelineItem, TimelineState, TrackMetrics, FALLBACK_DESCRIPTION,
};
