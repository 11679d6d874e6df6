//! The submission lifecycle: validation gate, single in-flight delivery, one-shot outcome.

mod event;
mod machine;

pub use event::{FormEvent, SubmitOutcome, SubscriptionId, SuccessPolicy};
pub use machine::ContactForm;
