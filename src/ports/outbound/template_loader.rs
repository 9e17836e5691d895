use super::template_renderer::TemplateSet;
use crate::application::dto::TemplateRef;
use crate::shared::Result;
use async_trait::async_trait;

/// TemplateLoader port for collecting the templates of one render
///
/// Every fragment must be loaded before the set is returned; rendering never
/// starts with a partially loaded set.
#[async_trait]
pub trait TemplateLoader: Send + Sync {
    /// Loads the main template and its partials
    ///
    /// # Errors
    /// Returns an error if any template file cannot be read
    async fn load(&self, template: &TemplateRef) -> Result<TemplateSet>;
}
