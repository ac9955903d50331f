use minijinja::context;
use spectrum_core::{Error, Result};

use super::Page;
use crate::templates::Templates;

pub struct ErrorPage {
    heading: String,
    message: String,
}

impl ErrorPage {
    pub fn new(heading: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Page not found", "There is nothing at this address.")
    }

    /// Reader-facing text for a failed headlines fetch. Transport errors and
    /// malformed payloads are told apart, details stay in the logs.
    pub fn from_fetch_error(err: &Error) -> Self {
        match err {
            Error::MalformedResponse(_) => Self::new(
                "Couldn't read the news",
                "The news service sent a response we could not understand. Please try again later.",
            ),
            _ => Self::new(
                "Couldn't fetch the news",
                "The news service is unavailable right now. Please try again later.",
            ),
        }
    }
}

impl Page for ErrorPage {
    fn title(&self) -> String {
        self.heading.clone()
    }

    fn render_content(&self, templates: &Templates) -> Result<String> {
        templates.render(
            "error.html",
            context! { heading => &self.heading, message => &self.message },
        )
    }
}
