use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    fn palette(&self) -> Palette {
        match self {
            ColorScheme::Dark => Palette {
                background: "#1a1b1e",
                surface: "#25262b",
                text: "#c1c2c5",
                muted: "#909296",
                accent: "#4dabf7",
                border: "#373a40",
            },
            ColorScheme::Light => Palette {
                background: "#ffffff",
                surface: "#f8f9fa",
                text: "#000000",
                muted: "#868e96",
                accent: "#228be6",
                border: "#dee2e6",
            },
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            other => Err(format!("Invalid color scheme: {} (expected dark or light)", other)),
        }
    }
}

struct Palette {
    background: &'static str,
    surface: &'static str,
    text: &'static str,
    muted: &'static str,
    accent: &'static str,
    border: &'static str,
}

const NORMALIZE_CSS: &str = "\
html{line-height:1.15;-webkit-text-size-adjust:100%}\
body{margin:0}\
main{display:block}\
h1{font-size:2em;margin:.67em 0}\
a{background-color:transparent}\
img{border-style:none}\
button,input{font-family:inherit;font-size:100%;line-height:1.15;margin:0}\
";

const GLOBAL_CSS: &str = "\
*,*::before,*::after{box-sizing:border-box}\
body{font-family:-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica,Arial,sans-serif;\
background-color:var(--spectrum-background);color:var(--spectrum-text);line-height:1.55}\
a{color:var(--spectrum-accent);text-decoration:none}\
";

const CHROME_CSS: &str = "\
.app-shell{display:grid;grid-template-columns:auto 1fr;grid-template-rows:auto 1fr auto;min-height:100vh}\
.app-header{grid-column:1/-1;display:flex;align-items:center;justify-content:space-between;\
padding:0 1rem;height:60px;background:var(--spectrum-surface);border-bottom:1px solid var(--spectrum-border)}\
.app-navbar{width:80px;padding:1rem 0;background:var(--spectrum-surface);border-right:1px solid var(--spectrum-border)}\
.app-navbar ul,.header-links ul{list-style:none;margin:0;padding:0}\
.header-links ul{display:flex;gap:.25rem}\
.nav-link{display:block;padding:8px 12px;border-radius:4px;color:var(--spectrum-text)}\
.nav-link[aria-disabled=true]{color:var(--spectrum-muted);cursor:default}\
.page-content{padding:16px}\
.app-footer{grid-column:1/-1;border-top:1px solid var(--spectrum-border)}\
.article-card{padding:1rem 0;border-bottom:1px solid var(--spectrum-border)}\
.spectrum-badge{margin-left:.5rem;font-size:.75rem;color:var(--spectrum-accent)}\
";

/// Global presentation settings every page is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub color_scheme: ColorScheme,
    pub with_global_styles: bool,
    #[serde(rename = "withNormalizeCSS")]
    pub with_normalize_css: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            with_global_styles: true,
            with_normalize_css: true,
        }
    }
}

impl PresentationConfig {
    /// Inline CSS contributed to the document head.
    pub fn stylesheet(&self) -> String {
        let palette = self.color_scheme.palette();
        let mut css = format!(
            ":root{{color-scheme:{};--spectrum-background:{};--spectrum-surface:{};\
--spectrum-text:{};--spectrum-muted:{};--spectrum-accent:{};--spectrum-border:{}}}",
            self.color_scheme,
            palette.background,
            palette.surface,
            palette.text,
            palette.muted,
            palette.accent,
            palette.border,
        );
        if self.with_normalize_css {
            css.push_str(NORMALIZE_CSS);
        }
        if self.with_global_styles {
            css.push_str(GLOBAL_CSS);
        }
        css.push_str(CHROME_CSS);
        css
    }
}
