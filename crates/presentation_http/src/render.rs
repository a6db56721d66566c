//! Server-side HTML rendering
//!
//! `PageRenderer` turns a [`PostPageState`] into a full HTML document.
//! Rendering is a pure function of the view state; no extra I/O happens
//! here. Post bodies are injected unescaped (`| safe`) because the
//! catalog backend is the trusted author of that HTML.

use application::PostPageState;
use tera::{Context, Tera};
use thiserror::Error;

const POST_PAGE_TEMPLATE: &str = include_str!("../templates/post_page.html");
const POST_CARD_TEMPLATE: &str = include_str!("../templates/post_card.html");

/// Rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Renders post page view state into HTML documents
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Build a renderer with the embedded templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("post_card.html", POST_CARD_TEMPLATE),
            ("post_page.html", POST_PAGE_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Render the post page for the given view state
    pub fn render_page(&self, state: &PostPageState) -> Result<String, RenderError> {
        let context = Context::from_serialize(state)?;
        Ok(self.tera.render("post_page.html", &context)?)
    }
}
