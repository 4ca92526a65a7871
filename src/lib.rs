pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod login_form;
pub mod messages;
pub mod page;
pub mod startup;
pub mod telemetry;
