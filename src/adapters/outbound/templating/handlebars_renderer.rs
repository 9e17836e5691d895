use super::helpers::HELPERS;
use crate::application::read_models::RenderContext;
use crate::ports::outbound::{EscapeMode, TemplateRenderer, TemplateSet};
use crate::shared::error::ReportError;
use crate::shared::Result;
use handlebars::Handlebars;
use tracing::debug;

/// HandlebarsRenderer adapter for the TemplateRenderer port
///
/// A fresh registry is built for every render, so nothing leaks between
/// invocations. Strict mode is off: a field missing from the scan data
/// renders as an empty string.
pub struct HandlebarsRenderer;

impl HandlebarsRenderer {
    pub fn new() -> Self {
        Self
    }

    fn build_registry(templates: &TemplateSet) -> Result<Handlebars<'static>> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        if templates.escape == EscapeMode::None {
            registry.register_escape_fn(handlebars::no_escape);
        }

        for (name, helper) in HELPERS {
            registry.register_helper(name, Box::new(*helper));
        }

        for partial in &templates.partials {
            registry
                .register_partial(&partial.name, &partial.content)
                .map_err(|e| ReportError::TemplateRenderError {
                    template: partial.name.clone(),
                    details: e.to_string(),
                })?;
        }

        registry
            .register_template_string(&templates.main.name, &templates.main.content)
            .map_err(|e| ReportError::TemplateRenderError {
                template: templates.main.name.clone(),
                details: e.to_string(),
            })?;

        debug!(
            helpers = HELPERS.len(),
            partials = templates.partials.len(),
            "template registry ready"
        );
        Ok(registry)
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, templates: &TemplateSet, context: &RenderContext) -> Result<String> {
        let registry = Self::build_registry(templates)?;
        registry
            .render(&templates.main.name, context)
            .map_err(|e| {
                ReportError::TemplateRenderError {
                    template: templates.main.name.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}
