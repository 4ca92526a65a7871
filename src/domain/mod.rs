//! src/domain/mod.rs
mod email_input;
pub use email_input::EmailInput;

mod query_string;
pub use query_string::QueryString;
