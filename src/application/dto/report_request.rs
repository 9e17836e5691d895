use super::OutputFormat;
use crate::shared::Result;
use std::path::PathBuf;

/// Which template renders the report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateRef {
    /// The Markdown templates compiled into the binary
    #[default]
    BuiltIn,
    /// A Handlebars file; sibling `*.hbs` files become its partials
    File(PathBuf),
}

/// ReportRequest - request DTO for the report rendering use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Scan results file, or `None` to read standard input
    pub input: Option<PathBuf>,
    pub template: TemplateRef,
    pub format: OutputFormat,
    /// Suppress the per-vulnerability detail sections
    pub summary_only: bool,
}

impl ReportRequest {
    pub fn new(
        input: Option<PathBuf>,
        template: TemplateRef,
        format: OutputFormat,
        summary_only: bool,
    ) -> Self {
        Self {
            input,
            template,
            format,
            summary_only,
        }
    }

    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }

    /// Human-readable name of the input, for messages
    pub fn source_name(&self) -> String {
        self.input
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}

/// Builder for [`ReportRequest`]
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    input: Option<PathBuf>,
    template: Option<PathBuf>,
    format: OutputFormat,
    summary_only: bool,
}

impl ReportRequestBuilder {
    pub fn input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn template(mut self, template: PathBuf) -> Self {
        self.template = Some(template);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns an error if an input or template path is empty
    pub fn build(self) -> Result<ReportRequest> {
        if self.input.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            anyhow::bail!("Validation error: input path must not be empty");
        }
        if self
            .template
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            anyhow::bail!("Validation error: template path must not be empty");
        }

        let template = self.template.map(TemplateRef::File).unwrap_or_default();
        Ok(ReportRequest::new(
            self.input,
            template,
            self.format,
            self.summary_only,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = ReportRequest::builder().build().unwrap();
        assert_eq!(request.input, None);
        assert_eq!(request.template, TemplateRef::BuiltIn);
        assert_eq!(request.format, OutputFormat::Markdown);
        assert!(!request.summary_only);
        assert_eq!(request.source_name(), "<stdin>");
    }

    #[test]
    fn test_builder_all_fields() {
        let request = ReportRequest::builder()
            .input(PathBuf::from("results.json"))
            .template(PathBuf::from("templates/report.hbs"))
            .format(OutputFormat::Json)
            .summary_only(true)
            .build()
            .unwrap();

        assert_eq!(request.source_name(), "results.json");
        assert_eq!(
            request.template,
            TemplateRef::File(PathBuf::from("templates/report.hbs"))
        );
        assert_eq!(request.format, OutputFormat::Json);
        assert!(request.summary_only);
    }

    #[test]
    fn test_builder_rejects_empty_paths() {
        assert!(ReportRequest::builder()
            .input(PathBuf::new())
            .build()
            .is_err());
        let err = ReportRequest::builder()
            .template(PathBuf::new())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("template path must not be empty"));
    }
}
