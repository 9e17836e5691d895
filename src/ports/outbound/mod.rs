/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, stdin, template engine, console).
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_reader;
pub mod template_loader;
pub mod template_renderer;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
pub use template_loader::TemplateLoader;
pub use template_renderer::{EscapeMode, TemplateRenderer, TemplateSet, TemplateSource};
