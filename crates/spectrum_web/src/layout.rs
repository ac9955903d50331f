use minijinja::{context, Value};
use serde::Serialize;
use spectrum_core::Result;
use tracing::debug;

use crate::chrome::{Chrome, ChromeOptions};
use crate::nav::NavLinks;
use crate::templates::Templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellState {
    /// Before the first render has completed: no navigation links.
    Empty,
    /// After [`LayoutShell::mount`]: terminal for the shell's lifetime.
    Populated,
}

/// Wraps page content in the chrome and owns the navigation link set.
///
/// A shell starts [`ShellState::Empty`] and renders without navigation.
/// Once the first render has completed the owner calls
/// [`LayoutShell::mount`], which assigns the link set exactly once.
pub struct LayoutShell {
    chrome: Chrome,
    links: NavLinks,
    on_mount: NavLinks,
    state: ShellState,
}

impl LayoutShell {
    /// A shell that populates with [`NavLinks::default_links`].
    pub fn new(options: ChromeOptions) -> Self {
        Self::with_routes(options, NavLinks::default_links())
    }

    /// A shell that populates with an externally supplied routes table.
    pub fn with_routes(options: ChromeOptions, routes: NavLinks) -> Self {
        Self {
            chrome: Chrome::new(options),
            links: NavLinks::empty(),
            on_mount: routes,
            state: ShellState::Empty,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn links(&self) -> &NavLinks {
        &self.links
    }

    /// Post-render hook. Returns `true` on the one call that populates the
    /// links; later calls leave the shell untouched.
    pub fn mount(&mut self) -> bool {
        match self.state {
            ShellState::Empty => {
                self.links = self.on_mount.clone();
                self.state = ShellState::Populated;
                debug!("Layout shell populated with {} links", self.links.len());
                true
            }
            ShellState::Populated => false,
        }
    }

    /// Render the chrome for the current state around `content`, which must
    /// already be HTML.
    pub fn render(&self, templates: &Templates, content: &str) -> Result<String> {
        let chrome = self.chrome.render(templates, &self.links)?;
        templates.render(
            "layout.html",
            context! {
                state => self.state,
                header => Value::from_safe_string(chrome.header),
                navbar => chrome.navbar.map(Value::from_safe_string),
                footer => chrome.footer.map(Value::from_safe_string),
                content => Value::from_safe_string(content.to_string()),
            },
        )
    }
}
