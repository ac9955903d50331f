//! Header, side navbar and footer. Each unit is stateless: its output
//! depends only on the links it is given and the templates.

use minijinja::context;
use serde::{Deserialize, Serialize};
use spectrum_core::Result;

use crate::nav::NavLinks;
use crate::templates::Templates;

/// Which chrome units surround the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeOptions {
    pub side_navbar: bool,
    pub footer: bool,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            side_navbar: true,
            footer: true,
        }
    }
}

pub struct Header;

impl Header {
    pub fn render(templates: &Templates, links: &NavLinks) -> Result<String> {
        templates.render("header.html", context! { links => links })
    }
}

pub struct Navbar;

impl Navbar {
    pub fn render(templates: &Templates, links: &NavLinks) -> Result<String> {
        templates.render("navbar.html", context! { links => links })
    }
}

/// Static strip, takes no links.
pub struct Footer;

impl Footer {
    pub fn render(templates: &Templates) -> Result<String> {
        templates.render("footer.html", context! {})
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeOutput {
    pub header: String,
    pub navbar: Option<String>,
    pub footer: Option<String>,
}

pub struct Chrome {
    options: ChromeOptions,
}

impl Chrome {
    pub fn new(options: ChromeOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, templates: &Templates, links: &NavLinks) -> Result<ChromeOutput> {
        let header = Header::render(templates, links)?;
        let navbar = if self.options.side_navbar {
            Some(Navbar::render(templates, links)?)
        } else {
            None
        };
        let footer = if self.options.footer {
            Some(Footer::render(templates)?)
        } else {
            None
        };
        Ok(ChromeOutput { header, navbar, footer })
    }
}
