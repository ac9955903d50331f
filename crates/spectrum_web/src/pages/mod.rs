use spectrum_core::Result;

use crate::templates::Templates;

pub mod about;
pub mod error;
pub mod headlines;

pub use about::AboutPage;
pub use error::ErrorPage;
pub use headlines::HeadlinesPage;

/// Leaf content rendered inside the layout shell. Pages never render the
/// chrome themselves.
pub trait Page: Send + Sync {
    /// Used for the document title
    fn title(&self) -> String;

    /// HTML for the content region
    fn render_content(&self, templates: &Templates) -> Result<String>;
}
