//! vuln-digest - readable reports from vulnerability scan results
//!
//! This library turns the JSON output of a dependency vulnerability scan
//! into a document. Findings are grouped by vulnerability id (each group
//! keeps every dependency path that pulls the vulnerable package in), the
//! reports of several projects can be merged into one, and the result is
//! rendered through Handlebars templates. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Scan records, grouping, merging and remediation text
//! - **Application Layer** (`application`): Use cases, DTOs and the render context
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vuln_digest::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = RenderReportUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     HandlebarsRenderer::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ReportRequest::builder()
//!     .input(PathBuf::from("scan-results.json"))
//!     .summary_only(true)
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::templating::HandlebarsRenderer;
    pub use crate::application::dto::{
        OutputFormat, ReportRequest, ReportResponse, TemplateRef,
    };
    pub use crate::application::read_models::{RenderContext, RenderContextBuilder};
    pub use crate::application::use_cases::RenderReportUseCase;
    pub use crate::ports::inbound::ReportRenderingPort;
    pub use crate::ports::outbound::{
        EscapeMode, OutputPresenter, ProgressReporter, SourceReader, TemplateLoader,
        TemplateRenderer, TemplateSet, TemplateSource,
    };
    pub use crate::report_generation::domain::{
        GroupedVulnerabilities, ParsedInput, ProjectReport, Severity, VulnerabilityGroup,
        VulnerabilityOccurrence,
    };
    pub use crate::report_generation::services::{
        RemediationResolver, ReportMerger, VulnerabilityGrouper,
    };
    pub use crate::shared::Result;
}
