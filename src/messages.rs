//! src/messages.rs
use serde::Deserialize;

/// Language of the texts shown in the status element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Norwegian bokmål, the language the login page ships in.
    #[default]
    Nb,
    En,
}

/// Texts displayed after a submission.
///
/// The success text never says whether the address is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub success: &'static str,
    pub failure: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Nb => Self {
                success: "Epost underveis, om epost-adressen er kjent",
                failure: "Beklager, det har oppstått en feil. Prøv kaffiknappen.",
            },
            Locale::En => Self {
                success: "An email is on its way, if the address is known.",
                failure: "Sorry, something went wrong. Please try again.",
            },
        }
    }
}
