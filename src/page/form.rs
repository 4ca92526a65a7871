//! src/page/form.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Something that reacts to a form being submitted.
///
/// Called synchronously from [`Form::submit`]; anything slow must be
/// spawned, not awaited.
pub trait SubmitListener: Send + Sync {
    fn on_submit(&self, event: &SubmitEvent);
}

#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: AtomicBool,
}

impl SubmitEvent {
    /// Keeps the page from navigating to the form's `action`.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// A named text input whose value can change between submissions.
#[derive(Debug, Clone)]
pub struct Input {
    name: String,
    value: Arc<RwLock<String>>,
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Arc::new(RwLock::new(String::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

struct FormInner {
    name: String,
    elements: Vec<Input>,
    onsubmit: Mutex<Option<Arc<dyn SubmitListener>>>,
}

/// Handle to a form on the page. Clones refer to the same form.
#[derive(Clone)]
pub struct Form {
    inner: Arc<FormInner>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_inputs(name, Vec::new())
    }

    pub fn with_inputs(name: impl Into<String>, elements: Vec<Input>) -> Self {
        Self {
            inner: Arc::new(FormInner {
                name: name.into(),
                elements,
                onsubmit: Mutex::new(None),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// `form.elements[name]`
    pub fn element(&self, name: &str) -> Option<Input> {
        self.inner.elements.iter().find(|i| i.name() == name).cloned()
    }

    /// Like assigning `form.onsubmit`: a form has at most one listener and
    /// the latest assignment wins.
    pub fn set_onsubmit(&self, listener: Arc<dyn SubmitListener>) {
        *self
            .inner
            .onsubmit
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    /// Fires a submit event and hands it back once the listener returns.
    ///
    /// If the returned event is not `default_prevented`, the host is
    /// expected to navigate away.
    pub fn submit(&self) -> SubmitEvent {
        let event = SubmitEvent::default();
        // Released before dispatch so a listener may reassign `onsubmit`.
        let listener = self
            .inner
            .onsubmit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(listener) = listener {
            listener.on_submit(&event);
        }
        event
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.inner.name)
            .field("elements", &self.inner.elements)
            .finish_non_exhaustive()
    }
}
