//! Event loop driving a [`SignUpController`].
//!
//! UI events arrive over a channel and are applied one at a time. A submit
//! hands the request to its own task, and the outcome re-enters the loop as
//! just another event, so the controller is only ever touched from the loop
//! task. After every event the current [`SignUpView`] is published on a
//! `watch` channel for the renderer.

use crate::api::RegistrationEndpoint;
use crate::error::RegistrationError;
use crate::form::{Field, SignUpController, SignUpView};
use crate::i18n::Locale;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged(Field, String),
    SubmitClicked,
    LocaleSelected(Locale),
}

pub struct FormRuntime;

impl FormRuntime {
    /// Start the loop on the current tokio runtime.
    pub fn spawn<E>(controller: SignUpController, endpoint: Arc<E>) -> FormHandle
    where
        E: RegistrationEndpoint + ?Sized + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(controller.view());

        let task = tokio::spawn(run(controller, endpoint, events_rx, view_tx));

        FormHandle {
            events: events_tx,
            view: view_rx,
            task,
        }
    }
}

/// Handle onto a running form loop.
pub struct FormHandle {
    events: mpsc::UnboundedSender<FormEvent>,
    view: watch::Receiver<SignUpView>,
    task: JoinHandle<SignUpController>,
}

impl FormHandle {
    pub fn send(&self, event: FormEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| anyhow::anyhow!("Form runtime has stopped"))
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) -> Result<()> {
        self.send(FormEvent::FieldChanged(field, value.into()))
    }

    pub fn click_submit(&self) -> Result<()> {
        self.send(FormEvent::SubmitClicked)
    }

    pub fn select_locale(&self, locale: Locale) -> Result<()> {
        self.send(FormEvent::LocaleSelected(locale))
    }

    /// Extra sender for another event source. The loop keeps running until
    /// every sender is gone.
    pub fn sender(&self) -> mpsc::UnboundedSender<FormEvent> {
        self.events.clone()
    }

    /// The most recently published view.
    pub fn view(&self) -> SignUpView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SignUpView> {
        self.view.clone()
    }

    /// Wait until a published view satisfies `predicate`.
    pub async fn wait_for<F>(&mut self, predicate: F) -> Result<SignUpView>
    where
        F: FnMut(&SignUpView) -> bool,
    {
        let view = self
            .view
            .wait_for(predicate)
            .await
            .context("Form runtime stopped before the expected view")?;
        Ok(view.clone())
    }

    /// Stop accepting events and return the controller once the loop ends.
    ///
    /// A registration already in flight is awaited and applied first.
    pub async fn shutdown(self) -> Result<SignUpController> {
        let FormHandle { events, task, .. } = self;
        drop(events);
        task.await.context("Form runtime task failed")
    }
}

async fn run<E>(
    mut controller: SignUpController,
    endpoint: Arc<E>,
    mut events: mpsc::UnboundedReceiver<FormEvent>,
    view: watch::Sender<SignUpView>,
) -> SignUpController
where
    E: RegistrationEndpoint + ?Sized + 'static,
{
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Result<(), RegistrationError>>();
    let mut locale_rx = controller.locale().subscribe();

    info!("Sign-up form started");

    loop {
        tokio::select! {
            // Queued clicks are applied before a completion so a double
            // click always observes Pending.
            biased;

            event = events.recv() => match event {
                Some(event) => handle_event(&mut controller, endpoint.as_ref(), &done_tx, event),
                None => break,
            },
            Some(result) = done_rx.recv() => controller.complete_submit(result),
            Ok(()) = locale_rx.changed() => debug!("Re-rendering for locale change"),
        }

        view.send_replace(controller.view());
    }

    drop(done_tx);
    if controller.status().is_pending() {
        info!("Waiting for the pending registration before stopping");
        if let Some(result) = done_rx.recv().await {
            controller.complete_submit(result);
            view.send_replace(controller.view());
        }
    }

    info!("Sign-up form stopped ({:?})", controller.status());
    controller
}

fn handle_event<E>(
    controller: &mut SignUpController,
    endpoint: &E,
    done: &mpsc::UnboundedSender<Result<(), RegistrationError>>,
    event: FormEvent,
) where
    E: RegistrationEndpoint + ?Sized,
{
    match event {
        FormEvent::FieldChanged(field, value) => controller.set_field(field, value),
        FormEvent::LocaleSelected(locale) => controller.locale().set_locale(locale),
        FormEvent::SubmitClicked => {
            if let Some(submission) = controller.begin_submit() {
                let request = endpoint.register(submission);
                let done = done.clone();
                tokio::spawn(async move {
                    if done.send(request.await).is_err() {
                        debug!("Form closed before the registration response arrived");
                    }
                });
            }
        }
    }
}
