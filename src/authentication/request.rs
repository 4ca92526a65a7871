//! src/authentication/request.rs
use crate::domain::{EmailInput, QueryString};

pub const AUTHENTICATE_PATH: &str = "/_authentication/authenticate";

#[derive(Debug, Clone)]
pub struct AuthenticationRequest {
    email: EmailInput,
    query: QueryString,
}

impl AuthenticationRequest {
    pub fn new(email: EmailInput, query: QueryString) -> Self {
        Self { email, query }
    }

    pub fn path(&self) -> String {
        format!("{}{}", AUTHENTICATE_PATH, self.query.as_ref())
    }

    /// `email=<value>`, interpolated as-is.
    ///
    /// NOTE: `&`, `=`, `+` and `%` in the value are not escaped and will be
    /// read differently by a urlencoded parser on the other end.
    pub fn body(&self) -> String {
        format!("email={}", self.email)
    }
}
