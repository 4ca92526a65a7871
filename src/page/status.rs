//! src/page/status.rs
use std::sync::Arc;
use tokio::sync::watch;

/// Element whose text tells the user how the submission went.
///
/// Every write replaces the text and wakes subscribers, even when the new
/// text equals the old one. Concurrent writers simply overwrite each other.
#[derive(Debug, Clone)]
pub struct StatusElement {
    class: String,
    text: Arc<watch::Sender<String>>,
}

impl StatusElement {
    pub fn with_class(class: impl Into<String>) -> Self {
        let (text, _) = watch::channel(String::new());
        Self {
            class: class.into(),
            text: Arc::new(text),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class == class
    }

    /// `element.innerText = text`
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.send_replace(text.into());
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.subscribe()
    }
}
