use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::{Frame, Terminal};
use tokio::task::{JoinError, JoinHandle};

use crate::gateway::{DeliveryError, DeliveryGateway};
use crate::model::EmailPayload;
use crate::submission::{ContactForm, FormEvent};

use super::action::Action;
use super::error::AppError;
use super::screens::{ContactState, HelpState, draw_contact, draw_help};
use super::widgets::Banner;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The contact form.
    Contact,
    /// Keybinding help.
    Help,
}

type Delivery = JoinHandle<Result<(), DeliveryError>>;

/// Top-level application state: the form, its screens, and the delivery gateway.
pub struct App<G> {
    screen: Screen,
    form: ContactForm,
    contact: ContactState,
    help: HelpState,
    banner: Option<Banner>,
    events: Receiver<FormEvent>,
    gateway: Arc<G>,
    should_quit: bool,
}

impl<G: DeliveryGateway + 'static> App<G> {
    /// Creates an `App` on the [`Screen::Contact`] screen, subscribed to `form`.
    pub fn new(mut form: ContactForm, gateway: G) -> Self {
        let (tx, events) = mpsc::channel();
        form.subscribe(move |event| {
            // The receiver lives as long as the app, which owns the form.
            let _ = tx.send(event.clone());
        });
        Self {
            screen: Screen::Contact,
            contact: ContactState::new(*form.schema()),
            form,
            help: HelpState::new(),
            banner: None,
            events,
            gateway: Arc::new(gateway),
            should_quit: false,
        }
    }

    /// Main event loop: draw, then wait for a key or the in-flight delivery.
    ///
    /// Runs on a single task; at most one delivery task exists at a time
    /// because the form only yields a payload when it is idle.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut keys = EventStream::new();
        let mut in_flight: Option<Delivery> = None;

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            tokio::select! {
                event = keys.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(payload) = self.handle_key(key) {
                            in_flight = Some(self.spawn_delivery(payload));
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
                joined = wait_for(&mut in_flight) => {
                    in_flight = None;
                    self.on_delivery(joined.unwrap_or_else(|e| Err(DeliveryError::from(e))));
                }
            }
        }
        Ok(())
    }

    #[mutants::skip]
    fn spawn_delivery(&self, payload: EmailPayload) -> Delivery {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move { gateway.send(&payload).await })
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Contact => draw_contact(
                &self.contact,
                self.form.state(),
                self.banner.as_ref(),
                frame,
                area,
            ),
            Screen::Help => draw_help(&mut self.help, frame, area),
        }
    }

    /// Handles a key press, returning the payload to deliver if a submission started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<EmailPayload> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.banner = None;

        let action = match self.screen {
            Screen::Contact => self.contact.handle_key(key, self.form.state()),
            Screen::Help => self.help.handle_key(key),
        };
        let payload = self.apply(action);
        self.drain_events();
        payload
    }

    /// Feeds the outcome of the in-flight delivery back into the form.
    pub fn on_delivery(&mut self, outcome: Result<(), DeliveryError>) {
        self.form.complete(outcome);
        self.drain_events();
    }

    fn apply(&mut self, action: Action) -> Option<EmailPayload> {
        match action {
            Action::None => None,
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
                None
            }
            Action::Edit(field, value) => {
                self.form.edit_field(field, value);
                None
            }
            Action::Submit => self.form.request_submit(),
            Action::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                FormEvent::ValidationFailed(_) => self.contact.focus_first_error(self.form.state()),
                FormEvent::Delivered => self.banner = Some(Banner::Sent),
                FormEvent::DeliveryFailed(err) => self.banner = Some(Banner::Failed(err.to_string())),
                FormEvent::StatusChanged { .. } => {}
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the banner currently shown, if any.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }
}

/// Resolves with the in-flight delivery, or never if there is none.
async fn wait_for(slot: &mut Option<Delivery>) -> Result<Result<(), DeliveryError>, JoinError> {
    match slot {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}
