use crate::application::read_models::RenderContext;
use crate::shared::Result;

/// How the engine escapes interpolated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// HTML entity escaping, for HTML templates
    Html,
    /// Values are written verbatim (Markdown and plain text)
    None,
}

/// A named template body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub name: String,
    pub content: String,
}

impl TemplateSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Everything the renderer needs: the entry template and its partials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub main: TemplateSource,
    pub partials: Vec<TemplateSource>,
    pub escape: EscapeMode,
}

/// TemplateRenderer port for the template engine
pub trait TemplateRenderer {
    /// Renders the context through the template set
    ///
    /// Implementations expose the remediation resolver as a helper that
    /// templates call once per vulnerability.
    ///
    /// # Errors
    /// Returns an error if a template does not compile or rendering fails
    fn render(&self, templates: &TemplateSet, context: &RenderContext) -> Result<String>;
}
