//! Submission orchestration for the contact form.
//!
//! `ContactSubmitter` owns the lifecycle of one submission: honeypot
//! check, validation, UI lock, warm-up probe, network call, outcome
//! reporting, and UI restore. The embedding shell plugs in through the
//! [`FormSurface`] trait and receives every user-visible signal through
//! it.

use crate::client::AsyncContactApi;
use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactMessage;
use std::sync::Arc;

/// UI affordances of the contact form, implemented by the embedding shell.
///
/// The submitter drives these callbacks; it never touches form state
/// directly. Lock and unlock are always paired, on every exit path.
pub trait FormSurface: Send {
    /// Disable the submit control and show a busy label.
    fn lock(&mut self);

    /// Restore the submit control to its pre-submission state.
    fn unlock(&mut self);

    /// Show a success notification.
    fn notify_success(&mut self);

    /// Show a failure notification.
    fn notify_error(&mut self, message: &str);

    /// Clear the form fields after a successful submission.
    fn reset(&mut self);
}

/// How a submission attempt ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was accepted by the backend and the form was reset.
    Sent,

    /// The honeypot field was filled in; the message was dropped with no
    /// network call and no user-visible signal.
    Discarded,
}

/// Scoped lock for the submit control: locks on acquisition, guarantees
/// the matching unlock when dropped, including on early returns and
/// panics.
struct UiLock<'a> {
    surface: &'a mut dyn FormSurface,
}

impl<'a> UiLock<'a> {
    fn acquire(surface: &'a mut dyn FormSurface) -> Self {
        surface.lock();
        Self { surface }
    }

    fn surface(&mut self) -> &mut dyn FormSurface {
        &mut *self.surface
    }
}

impl Drop for UiLock<'_> {
    fn drop(&mut self) {
        self.surface.unlock();
    }
}

/// Drives one contact form submission end-to-end.
pub struct ContactSubmitter {
    /// Transport handle; the trait boundary keeps the submitter testable
    api: Arc<dyn AsyncContactApi>,

    /// Whether to probe /health alongside the main request
    warm_up: bool,
}

impl ContactSubmitter {
    /// Create a submitter over an async API handle.
    ///
    /// `warm_up` enables the best-effort health probe that wakes a cold
    /// backend while the main request is prepared.
    pub fn new(api: Arc<dyn AsyncContactApi>, warm_up: bool) -> Self {
        Self { api, warm_up }
    }

    /// Submit one contact message.
    ///
    /// Runs the full pipeline: trapped submissions are dropped silently,
    /// invalid input is reported without a network call, and every
    /// network outcome ends in a notification plus a restored submit
    /// control. The form is reset only on success, so a failed attempt
    /// can be retried with the same input. No retry happens here.
    pub async fn submit(
        &self,
        message: &ContactMessage,
        ui: &mut dyn FormSurface,
    ) -> SubmitResult<SubmitOutcome> {
        if message.is_trap() {
            tracing::info!("honeypot field filled, dropping submission");
            return Ok(SubmitOutcome::Discarded);
        }

        let payload = match message.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!("submission failed validation: {}", e);
                let error = SubmitError::from(e);
                ui.notify_error(&error.user_message());
                return Err(error);
            }
        };

        tracing::info!("submitting contact message from @{}", payload.email.domain());

        let mut lock = UiLock::acquire(ui);

        if self.warm_up {
            // Detached on purpose: the probe's outcome never gates the
            // main request, which settles independently.
            let api = self.api.clone();
            tokio::spawn(async move {
                if let Err(e) = api.warm_up().await {
                    tracing::debug!("warm-up probe failed: {}", e);
                }
            });
        }

        match self.api.send_message(payload).await {
            Ok(()) => {
                tracing::info!("contact message accepted");
                lock.surface().notify_success();
                lock.surface().reset();
                Ok(SubmitOutcome::Sent)
            }
            Err(e) => {
                tracing::warn!("contact message failed: {}", e);
                lock.surface().notify_error(&e.user_message());
                Err(e)
            }
        }
    }
}
