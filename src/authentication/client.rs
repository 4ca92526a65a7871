//! src/authentication/client.rs
use super::{AuthenticationOutcome, AuthenticationRequest, FailureCause};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Posts login requests to the authentication endpoint of `base_url`.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AuthenticationClient {
    http_client: Client,
    base_url: String,
}

impl AuthenticationClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Anything but a `200 OK`, transport errors included, is a failure.
    #[tracing::instrument(name = "Request authentication email", skip(self, request), fields(path = %request.path()))]
    pub async fn authenticate(&self, request: &AuthenticationRequest) -> AuthenticationOutcome {
        let url = format!("{}{}", self.base_url, request.path());

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(request.body())
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::OK => AuthenticationOutcome::Success,
            Ok(response) => AuthenticationOutcome::Failure(FailureCause::Status(response.status())),
            Err(e) => AuthenticationOutcome::Failure(FailureCause::Transport(e)),
        }
    }
}
