//! src/authentication/mod.rs
mod request;
pub use request::{AuthenticationRequest, AUTHENTICATE_PATH};

mod client;
pub use client::AuthenticationClient;

/// Result of one round-trip to the authentication endpoint.
///
/// Only `Success` and `Failure` are ever shown to the user; the cause is
/// kept for the diagnostic log.
#[derive(Debug)]
pub enum AuthenticationOutcome {
    Success,
    Failure(FailureCause),
}

#[derive(thiserror::Error)]
pub enum FailureCause {
    #[error("Authentication endpoint responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to reach the authentication endpoint")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
