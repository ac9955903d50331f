use minijinja::context;
use serde::Serialize;
use spectrum_core::{Article, Headlines, Result};
use url::Url;

use super::Page;
use crate::templates::Templates;

/// Categories offered by the news API.
pub const CATEGORIES: &[&str] = &[
    "general",
    "business",
    "entertainment",
    "health",
    "science",
    "sports",
    "technology",
];

/// `url` when it is safe to put in an `href`: absolute `http` or `https`.
fn web_link(url: &str) -> Option<&str> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(url),
        _ => None,
    }
}

#[derive(Serialize)]
struct ArticleCard<'a> {
    #[serde(flatten)]
    article: &'a Article,
    link: Option<&'a str>,
    image: Option<&'a str>,
}

/// The front page: one page of headlines in the order the API returned.
pub struct HeadlinesPage {
    headlines: Headlines,
    category: Option<String>,
}

impl HeadlinesPage {
    pub fn new(headlines: Headlines, category: Option<String>) -> Self {
        Self { headlines, category }
    }
}

impl Page for HeadlinesPage {
    fn title(&self) -> String {
        match &self.category {
            Some(category) => format!("Top {} headlines", category),
            None => "Top headlines".to_string(),
        }
    }

    fn render_content(&self, templates: &Templates) -> Result<String> {
        templates.render(
            "headlines.html",
            context! {
                categories => CATEGORIES,
                selected => self.category.as_deref().unwrap_or(""),
                total_results => self.headlines.total_results,
                articles => self
                    .headlines
                    .articles
                    .iter()
                    .map(|article| ArticleCard {
                        article,
                        link: web_link(&article.url),
                        image: web_link(&article.url_to_image),
                    })
                    .collect::<Vec<_>>(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::{Article, Source};

    fn article(title: &str, flagged: bool) -> Article {
        Article {
            source: Source {
                id: "bbc-news".to_string(),
                name: "BBC News".to_string(),
            },
            title: title.to_string(),
            url: format!("https://bbc.co.uk/{}", title),
            spectrum_enabled: flagged,
            ..Default::default()
        }
    }

    #[test]
    fn test_articles_render_in_order() {
        let templates = Templates::load().unwrap();
        let page = HeadlinesPage::new(
            Headlines {
                status: "ok".to_string(),
                total_results: 50,
                articles: vec![article("zulu", false), article("alpha", true), article("mike", false)],
            },
            None,
        );

        let html = page.render_content(&templates).unwrap();
        let zulu = html.find(">zulu<").unwrap();
        let alpha = html.find(">alpha<").unwrap();
        let mike = html.find(">mike<").unwrap();
        assert!(zulu < alpha && alpha < mike);
        assert!(html.contains("Showing 3 of 50 headlines"));
        assert_eq!(html.matches("spectrum-badge").count(), 1);
    }

    #[test]
    fn test_only_web_urls_become_links() {
        let templates = Templates::load().unwrap();
        let mut script = article("sneaky", false);
        script.url = "javascript:alert(1)".to_string();
        let mut relative = article("local", false);
        relative.url = "/elsewhere".to_string();
        let page = HeadlinesPage::new(
            Headlines {
                status: "ok".to_string(),
                total_results: 3,
                articles: vec![script, relative, article("safe", false)],
            },
            None,
        );

        let html = page.render_content(&templates).unwrap();
        assert!(!html.contains("javascript"));
        assert!(!html.contains("elsewhere"));
        assert!(html.contains(">sneaky<"));
        assert!(html.contains(">local<"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 1);
    }

    #[test]
    fn test_web_link() {
        assert_eq!(web_link("https://bbc.co.uk/a"), Some("https://bbc.co.uk/a"));
        assert_eq!(web_link("http://example.com"), Some("http://example.com"));
        assert_eq!(web_link("javascript:alert(1)"), None);
        assert_eq!(web_link("JAVASCRIPT:alert(1)"), None);
        assert_eq!(web_link("data:text/html,hi"), None);
        assert_eq!(web_link(""), None);
    }

    #[test]
    fn test_empty_headlines() {
        let templates = Templates::load().unwrap();
        let page = HeadlinesPage::new(Headlines::default(), Some("sports".to_string()));
        assert_eq!(page.title(), "Top sports headlines");
        let html = page.render_content(&templates).unwrap();
        assert!(html.contains("No headlines right now"));
        assert!(html.contains("chip-selected"));
    }
}
