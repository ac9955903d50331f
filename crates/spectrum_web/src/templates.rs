use minijinja::Environment;
use serde::Serialize;
use spectrum_core::{Error, Result};

const TEMPLATES: &[(&str, &str)] = &[
    ("document.html", include_str!("../templates/document.html")),
    ("layout.html", include_str!("../templates/layout.html")),
    ("header.html", include_str!("../templates/header.html")),
    ("nav_items.html", include_str!("../templates/nav_items.html")),
    ("navbar.html", include_str!("../templates/navbar.html")),
    ("footer.html", include_str!("../templates/footer.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("headlines.html", include_str!("../templates/headlines.html")),
    ("error.html", include_str!("../templates/error.html")),
];

pub(crate) fn render_error(err: minijinja::Error) -> Error {
    Error::Render(err.to_string())
}

/// The compiled HTML templates. `.html` templates are auto-escaped.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn load() -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source).map_err(render_error)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(render_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        assert!(Templates::load().is_ok());
    }

    #[test]
    fn test_unknown_template() {
        let templates = Templates::load().unwrap();
        let err = templates.render("missing.html", context! {}).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
