//! Actions returned by screen event handlers.

use crate::model::FieldName;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the form and navigates between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Replace the value of a field.
    Edit(FieldName, String),
    /// Ask the form to submit.
    Submit,
    /// Quit the application.
    Quit,
}
