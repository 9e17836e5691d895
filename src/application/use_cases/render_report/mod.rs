use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
use crate::application::read_models::{RenderContext, RenderContextBuilder};
use crate::ports::inbound::ReportRenderingPort;
use crate::ports::outbound::{ProgressReporter, SourceReader, TemplateLoader, TemplateRenderer};
use crate::report_generation::domain::ParsedInput;
use crate::report_generation::services::MetadataGenerator;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use tracing::debug;

/// RenderReportUseCase - Core use case for turning scan results into a report
///
/// One invocation reads one input, processes it and renders it. Nothing is
/// shared between invocations.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation (file or stdin)
/// * `TL` - TemplateLoader implementation
/// * `TR` - TemplateRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<SR, TL, TR, PR> {
    source_reader: SR,
    template_loader: TL,
    template_renderer: TR,
    progress_reporter: PR,
}

impl<SR, TL, TR, PR> RenderReportUseCase<SR, TL, TR, PR>
where
    SR: SourceReader,
    TL: TemplateLoader,
    TR: TemplateRenderer,
    PR: ProgressReporter,
{
    /// Creates a new RenderReportUseCase with injected dependencies
    pub fn new(
        source_reader: SR,
        template_loader: TL,
        template_renderer: TR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_reader,
            template_loader,
            template_renderer,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `request` - Input source, template, format and summary flag
    ///
    /// # Returns
    /// The rendered document with the grouped counts
    ///
    /// # Errors
    /// Read, parse and render failures abort the pipeline; no partial
    /// document is produced.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read and parse the scan results
        let parsed = self.read_and_parse_input(&request).await?;

        // Step 2: Merge, group and assemble the render context
        let context = RenderContextBuilder::process(
            parsed,
            request.summary_only,
            MetadataGenerator::generate_default_metadata(),
        );
        self.report_counts(&context);

        // Step 3: Render
        let content = self.render(&request, &context).await?;

        Ok(ReportResponse::new(
            content,
            context.unique_count,
            context.paths_count,
        ))
    }

    async fn read_and_parse_input(&self, request: &ReportRequest) -> Result<ParsedInput> {
        let source_name = request.source_name();
        self.progress_reporter
            .report(&format!("📖 Reading scan results from: {}", source_name));

        let raw = self
            .source_reader
            .read_all(request.input.as_deref())
            .await?;
        debug!(bytes = raw.len(), source = %source_name, "read scan results");

        Self::parse_input(&raw, &source_name)
    }

    /// Parses raw text as JSON and detects its shape
    ///
    /// # Errors
    /// Returns `ReportError::InputParseError` if the text is not valid JSON
    fn parse_input(raw: &str, source_name: &str) -> Result<ParsedInput> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ReportError::InputParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;

        Ok(ParsedInput::from_value(value))
    }

    fn report_counts(&self, context: &RenderContext) {
        if let Some(paths) = &context.paths {
            self.progress_reporter
                .report(&format!("📦 Merged {} project report(s)", paths.len()));
        }

        if context.vulnerabilities.is_empty() {
            self.progress_reporter
                .report_warning("⚠️  No vulnerabilities found in the scan results.");
        } else {
            self.progress_reporter.report(&format!(
                "🔎 Found {} unique vulnerabilit{} across {}",
                context.unique_count,
                if context.unique_count == 1 { "y" } else { "ies" },
                context.summary
            ));
        }
    }

    async fn render(&self, request: &ReportRequest, context: &RenderContext) -> Result<String> {
        match request.format {
            OutputFormat::Json => {
                self.progress_reporter
                    .report("📝 Generating JSON render context...");
                Ok(serde_json::to_string_pretty(context)?)
            }
            OutputFormat::Markdown => {
                self.progress_reporter
                    .report("📝 Rendering report template...");
                let templates = self.template_loader.load(&request.template).await?;
                debug!(
                    main = %templates.main.name,
                    partials = templates.partials.len(),
                    "templates loaded"
                );
                self.template_renderer.render(&templates, context)
            }
        }
    }
}

#[async_trait]
impl<SR, TL, TR, PR> ReportRenderingPort for RenderReportUseCase<SR, TL, TR, PR>
where
    SR: SourceReader,
    TL: TemplateLoader,
    TR: TemplateRenderer + Send + Sync,
    PR: ProgressReporter + Send + Sync,
{
    async fn render_report(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request).await
    }
}
