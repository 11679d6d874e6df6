//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{FieldFocus, draw_form, form_height};
pub use status_bar::{Banner, StatusBarContext, draw_status_bar};
