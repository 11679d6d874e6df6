use super::event::{FormEvent, SubmitOutcome, SubscriptionId, SuccessPolicy};
use crate::gateway::{DeliveryError, DeliveryGateway};
use crate::model::{EmailPayload, FieldName, FieldSchema, FormState, Status, validate};

type Listener = Box<dyn FnMut(&FormEvent) + Send>;

/// One mounted contact form: its state, the submission lifecycle, and its subscribers.
///
/// The lifecycle has two resting states. From [`Status::Idle`] a submit
/// either records validation errors and stays idle, or clears them, moves to
/// [`Status::Submitting`] and hands back the payload to deliver. While
/// submitting, further submits are ignored, so at most one delivery is ever
/// in flight. The delivery outcome is fed back through [`complete`], which
/// notifies subscribers once and returns to idle.
///
/// [`complete`]: ContactForm::complete
pub struct ContactForm {
    schema: FieldSchema,
    state: FormState,
    policy: SuccessPolicy,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FieldSchema::contact())
    }
}

impl ContactForm {
    /// Creates an idle form with every field empty.
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            state: FormState::new(&schema),
            schema,
            policy: SuccessPolicy::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Sets what happens to field values after a successful delivery.
    pub fn with_policy(mut self, policy: SuccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn policy(&self) -> SuccessPolicy {
        self.policy
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    /// Replaces the value of `name`.
    ///
    /// Errors are left alone; they only change on the next submit.
    pub fn edit_field(&mut self, name: FieldName, value: impl Into<String>) {
        match self.state.fields.get_mut(&name) {
            Some(slot) => {
                *slot = value.into();
                tracing::debug!(field = %name, "field edited");
            }
            None => tracing::warn!(field = %name, "edit for undeclared field ignored"),
        }
    }

    /// Handles a submit request.
    ///
    /// Returns the payload to deliver when the form was idle and valid; the
    /// form is then [`Status::Submitting`] until [`complete`](Self::complete)
    /// is called. Returns `None` when validation failed (errors are recorded)
    /// or a delivery is already in flight.
    pub fn request_submit(&mut self) -> Option<EmailPayload> {
        if self.state.status == Status::Submitting {
            tracing::debug!("submit ignored: delivery already in flight");
            return None;
        }

        let errors = validate(&self.state.fields, &self.schema);
        if !errors.is_empty() {
            tracing::warn!(
                fields = ?errors.keys().map(|f| f.as_str()).collect::<Vec<_>>(),
                "submit rejected by validation"
            );
            self.state.errors = errors.clone();
            self.emit(FormEvent::ValidationFailed(errors));
            return None;
        }

        self.state.errors.clear();
        self.transition(Status::Submitting);
        tracing::info!("submitting contact message");
        Some(EmailPayload::from_fields(&self.state.fields))
    }

    /// Applies the outcome of the in-flight delivery and returns to idle.
    ///
    /// Errors are never touched here: a failed delivery is not a field
    /// problem. Outcomes arriving while idle are ignored.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) {
        if self.state.status != Status::Submitting {
            tracing::warn!(?outcome, "delivery outcome ignored: no delivery in flight");
            return;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("contact message delivered");
                if self.policy == SuccessPolicy::ClearValues {
                    self.state.fields.values_mut().for_each(String::clear);
                }
                self.emit(FormEvent::Delivered);
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message delivery failed");
                self.emit(FormEvent::DeliveryFailed(err));
            }
        }
        self.transition(Status::Idle);
    }

    /// Runs one full submission against `gateway`: validate, deliver, complete.
    ///
    /// Suspends only while the gateway call is outstanding.
    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: DeliveryGateway + ?Sized,
    {
        if self.state.status == Status::Submitting {
            return SubmitOutcome::Busy;
        }
        let Some(payload) = self.request_submit() else {
            return SubmitOutcome::Invalid;
        };

        let result = gateway.send(&payload).await;
        let outcome = match &result {
            Ok(()) => SubmitOutcome::Delivered,
            Err(err) => SubmitOutcome::Failed(err.clone()),
        };
        self.complete(result);
        outcome
    }

    /// Registers `listener` for every status change and notification.
    pub fn subscribe(&mut self, listener: impl FnMut(&FormEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn transition(&mut self, to: Status) {
        let from = self.state.status;
        if from == to {
            return;
        }
        self.state.status = to;
        self.emit(FormEvent::StatusChanged { from, to });
    }

    fn emit(&mut self, event: FormEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}
