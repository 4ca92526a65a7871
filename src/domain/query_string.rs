//! src/domain/query_string.rs

/// The page's `location.search`: either empty or starting with `?`.
///
/// Forwarded to the authentication endpoint as-is, so whatever the login
/// link carried (e.g. `?next=/dashboard`) reaches the server unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    pub fn from_search(search: &str) -> Self {
        Self(search.to_owned())
    }
}

impl AsRef<str> for QueryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
