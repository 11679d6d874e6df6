use crate::gateway::DeliveryError;
use crate::model::{ErrorMap, Status};

/// Events delivered to form subscribers.
///
/// `Delivered` and `DeliveryFailed` are one-shot notifications: they are sent
/// once to the listeners registered at that moment and are not kept in the
/// form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The submission status changed.
    StatusChanged { from: Status, to: Status },
    /// A submit was rejected before reaching the network; carries the new errors.
    ValidationFailed(ErrorMap),
    /// The message was accepted by the delivery service.
    Delivered,
    /// The delivery attempt failed.
    DeliveryFailed(DeliveryError),
}

/// Handle returned by [`ContactForm::subscribe`](super::ContactForm::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

/// Result of [`ContactForm::submit`](super::ContactForm::submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// A delivery was already in flight; the request was ignored.
    Busy,
    Delivered,
    Failed(DeliveryError),
}

/// What happens to field values after a successful delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessPolicy {
    /// Leave the values in place.
    #[default]
    KeepValues,
    /// Reset every value to empty.
    ClearValues,
}

impl SuccessPolicy {
    /// Maps the `clear_on_success` config flag to a policy.
    pub fn from_clear_flag(clear_on_success: bool) -> Self {
        if clear_on_success {
            Self::ClearValues
        } else {
            Self::KeepValues
        }
    }
}
