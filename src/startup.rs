//! src/startup.rs
use crate::authentication::AuthenticationClient;
use crate::configuration::{PageSettings, Settings};
use crate::login_form::LoginFormHandler;
use crate::messages::Messages;
use crate::page::{Document, Form, Input, Location, StatusElement, SubmitEvent};
use std::sync::Arc;
use tokio::runtime::Handle;

#[derive(thiserror::Error, Debug)]
pub enum InstallError {
    #[error("No form named `{0}` on the page")]
    MissingForm(String),
    #[error("Form `{form}` has no input named `{input}`")]
    MissingInput { form: String, input: String },
    #[error("No element with class `{0}` on the page")]
    MissingStatusElement(String),
    #[error("Submissions need a tokio runtime, and none is running")]
    NoRuntime(#[source] tokio::runtime::TryCurrentError),
}

/// Registers the login handler as the submit listener of the login form.
///
/// Runs once, when the page has loaded, from inside the tokio runtime
/// that will carry the authentication requests.
pub fn install(
    document: &Document,
    client: AuthenticationClient,
    settings: &PageSettings,
) -> Result<Form, InstallError> {
    let form = document
        .form(&settings.form_name)
        .ok_or_else(|| InstallError::MissingForm(settings.form_name.clone()))?;
    let email_input = form
        .element(&settings.email_field)
        .ok_or_else(|| InstallError::MissingInput {
            form: settings.form_name.clone(),
            input: settings.email_field.clone(),
        })?;
    let status = document
        .query_selector(&settings.status_class)
        .ok_or_else(|| InstallError::MissingStatusElement(settings.status_class.clone()))?;
    let runtime = Handle::try_current().map_err(InstallError::NoRuntime)?;

    let handler = LoginFormHandler::new(
        client,
        email_input,
        status,
        document.location().clone(),
        Messages::for_locale(settings.locale),
        runtime,
    );
    form.set_onsubmit(Arc::new(handler));

    tracing::info!(form = %settings.form_name, "Login form handler installed");
    Ok(form)
}

/// The login page as rendered from the settings, with the handler in place.
pub struct Application {
    form: Form,
    email_input: Input,
    status: StatusElement,
}

impl Application {
    pub fn email_input(&self) -> &Input {
        &self.email_input
    }

    pub fn status(&self) -> &StatusElement {
        &self.status
    }

    pub fn submit(&self) -> SubmitEvent {
        self.form.submit()
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let client = AuthenticationClient::new(
        config.application.base_url.clone(),
        config.application.timeout(),
    )?;

    let email_input = Input::new(config.page.email_field.as_str());
    let status = StatusElement::with_class(config.page.status_class.as_str());
    let document = Document::new(Location::new(config.page.location_search.as_str()))
        .with_form(Form::with_inputs(
            config.page.form_name.as_str(),
            vec![email_input.clone()],
        ))
        .with_element(status.clone());

    let form = install(&document, client, &config.page)?;

    Ok(Application {
        form,
        email_input,
        status,
    })
}
