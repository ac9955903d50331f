use std::path::Path;

use serde::{Deserialize, Serialize};
use spectrum_core::{Error, Result};

/// One entry of the primary navigation. An empty `link` is a "coming
/// soon" placeholder: it is displayed but does not navigate anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub link: String,
    pub label: String,
}

impl NavLink {
    pub fn new(link: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            label: label.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.link.is_empty()
    }
}

/// Ordered navigation links. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavLinks(Vec<NavLink>);

impl NavLinks {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Home, Features, Pricing, About. Features and Pricing are placeholders.
    pub fn default_links() -> Self {
        Self(vec![
            NavLink::new("/", "Home"),
            NavLink::new("", "Features"),
            NavLink::new("", "Pricing"),
            NavLink::new("/about", "About"),
        ])
    }

    /// A routes table supplied from outside, kept in the given order.
    pub fn from_routes(routes: Vec<NavLink>) -> Self {
        Self(routes)
    }

    /// Load a routes table from a JSON array of `{link, label}` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::Config(format!("Invalid routes file {}: {}", path.display(), e))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavLink> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavLinks {
    type Item = &'a NavLink;
    type IntoIter = std::slice::Iter<'a, NavLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links_order() {
        let links = NavLinks::default_links();
        let pairs: Vec<_> = links
            .iter()
            .map(|l| (l.link.as_str(), l.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("/", "Home"), ("", "Features"), ("", "Pricing"), ("/about", "About")]
        );
    }

    #[test]
    fn test_placeholder_links() {
        let links = NavLinks::default_links();
        let placeholders: Vec<_> = links
            .iter()
            .filter(|l| l.is_placeholder())
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(placeholders, vec!["Features", "Pricing"]);
    }

    #[test]
    fn test_routes_table_from_json_keeps_order() {
        let links: NavLinks = serde_json::from_str(
            r#"[{"link":"/z","label":"Zed"},{"link":"","label":"Soon"},{"link":"/a","label":"Ay"}]"#,
        )
        .unwrap();
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Zed", "Soon", "Ay"]);
        assert_eq!(serde_json::to_value(&links).unwrap()[1]["link"], "");
    }

    #[test]
    fn test_load_missing_routes_file() {
        let err = NavLinks::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
