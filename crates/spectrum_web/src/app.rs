use minijinja::{context, Value};
use spectrum_core::Result;

use crate::chrome::ChromeOptions;
use crate::config::WebConfig;
use crate::layout::LayoutShell;
use crate::nav::NavLinks;
use crate::pages::Page;
use crate::templates::Templates;
use crate::theme::PresentationConfig;

/// Output of one pass through the application root.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub html: String,
    /// Links visible in the server-rendered markup (the first pass).
    pub first_pass_links: NavLinks,
    /// Links the client fills in once the page has loaded.
    pub populated_links: NavLinks,
}

/// JSON for an inline `<script>` data island.
fn json_island<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Composition point for every page: presentation provider, then the
/// layout shell, then the page content.
pub struct ApplicationRoot {
    templates: Templates,
    presentation: PresentationConfig,
    chrome: ChromeOptions,
    routes: Option<NavLinks>,
}

impl ApplicationRoot {
    pub fn new(config: &WebConfig) -> Result<Self> {
        Ok(Self {
            templates: Templates::load()?,
            presentation: config.presentation.clone(),
            chrome: config.chrome,
            routes: config.routes.clone(),
        })
    }

    fn shell(&self) -> LayoutShell {
        match &self.routes {
            Some(routes) => LayoutShell::with_routes(self.chrome, routes.clone()),
            None => LayoutShell::new(self.chrome),
        }
    }

    /// Render `page` into a full document.
    ///
    /// A fresh shell renders the first pass with an empty navigation, which
    /// becomes the document body. The shell is then mounted and its
    /// populated links ship with the document for the client to reveal.
    pub fn render(&self, page: &dyn Page) -> Result<RenderedDocument> {
        let content = page.render_content(&self.templates)?;

        let mut shell = self.shell();
        let body = shell.render(&self.templates, &content)?;
        let first_pass_links = shell.links().clone();

        shell.mount();
        let populated_links = shell.links().clone();

        let html = self.templates.render(
            "document.html",
            context! {
                title => page.title(),
                color_scheme => self.presentation.color_scheme,
                stylesheet => Value::from_safe_string(self.presentation.stylesheet()),
                body => Value::from_safe_string(body),
                nav_links => Value::from_safe_string(json_island(&populated_links)?),
            },
        )?;

        Ok(RenderedDocument {
            html,
            first_pass_links,
            populated_links,
        })
    }
}
