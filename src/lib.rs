#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal contact form that validates its fields and forwards them to an
//! email delivery service.
//!
//! The core is [`submission::ContactForm`]: it owns the [`model::FormState`],
//! gates submission on [`model::validate`], keeps at most one delivery in
//! flight, and reports the outcome once to its subscribers.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod submission;
pub mod tui;
