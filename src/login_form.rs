//! src/login_form.rs
use crate::authentication::{
    AuthenticationClient, AuthenticationOutcome, AuthenticationRequest,
};
use crate::domain::EmailInput;
use crate::messages::Messages;
use crate::page::{Input, Location, StatusElement, SubmitEvent, SubmitListener};
use tokio::runtime::Handle;
use tracing::Instrument;

/// Submit listener of the login form.
///
/// Every submission is handled on its own: there is no guard against
/// double submits and in-flight requests are neither tracked nor
/// cancelled. Whichever response lands last decides the status text.
#[derive(Debug, Clone)]
pub struct LoginFormHandler {
    client: AuthenticationClient,
    email_input: Input,
    status: StatusElement,
    location: Location,
    messages: Messages,
    runtime: Handle,
}

impl LoginFormHandler {
    pub fn new(
        client: AuthenticationClient,
        email_input: Input,
        status: StatusElement,
        location: Location,
        messages: Messages,
        runtime: Handle,
    ) -> Self {
        Self {
            client,
            email_input,
            status,
            location,
            messages,
            runtime,
        }
    }

    /// Puts the outcome on the page. The cause of a failure only goes to the log.
    pub fn display(&self, outcome: AuthenticationOutcome) {
        match outcome {
            AuthenticationOutcome::Success => self.status.set_text(self.messages.success),
            AuthenticationOutcome::Failure(cause) => {
                tracing::error!(
                    error.cause_chain = ?cause,
                    error.message = %cause,
                    "Authentication request failed"
                );
                self.status.set_text(self.messages.failure);
            }
        }
    }
}

impl SubmitListener for LoginFormHandler {
    fn on_submit(&self, event: &SubmitEvent) {
        event.prevent_default();

        let request = AuthenticationRequest::new(
            EmailInput::parse(self.email_input.value()),
            self.location.search(),
        );
        let span = tracing::info_span!("Submit login form", path = %request.path());

        let handler = self.clone();
        self.runtime.spawn(
            async move {
                let outcome = handler.client.authenticate(&request).await;
                handler.display(outcome);
            }
            .instrument(span),
        );
    }
}
