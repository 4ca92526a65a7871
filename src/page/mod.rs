//! src/page/mod.rs
//! Headless model of the login page: just the parts a submit handler
//! can see or touch.
mod form;
pub use form::{Form, Input, SubmitEvent, SubmitListener};

mod status;
pub use status::StatusElement;

use crate::domain::QueryString;

/// `window.location`, reduced to what the page exposes to scripts.
#[derive(Debug, Clone, Default)]
pub struct Location {
    search: String,
}

impl Location {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    pub fn search(&self) -> QueryString {
        QueryString::from_search(&self.search)
    }
}

#[derive(Debug, Default)]
pub struct Document {
    location: Location,
    forms: Vec<Form>,
    elements: Vec<StatusElement>,
}

impl Document {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn with_element(mut self, element: StatusElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// `document.forms[name]`
    pub fn form(&self, name: &str) -> Option<Form> {
        self.forms.iter().find(|f| f.name() == name).cloned()
    }

    /// `document.querySelector('.class')`: first match in document order.
    pub fn query_selector(&self, class: &str) -> Option<StatusElement> {
        self.elements.iter().find(|e| e.has_class(class)).cloned()
    }
}
