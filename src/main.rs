mod cli;
mod config;

use cli::Args;
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vuln_digest::adapters::outbound::console::StderrProgressReporter;
use vuln_digest::adapters::outbound::filesystem::FileSystemReader;
use vuln_digest::adapters::outbound::templating::HandlebarsRenderer;
use vuln_digest::application::factories::{PresenterFactory, PresenterType};
use vuln_digest::application::use_cases::RenderReportUseCase;
use vuln_digest::ports::inbound::ReportRenderingPort;
use vuln_digest::ports::outbound::ProgressReporter;
use vuln_digest::shared::error::ExitCode;
use vuln_digest::shared::Result;

/// Environment variable holding the tracing filter directives
const LOG_ENV: &str = "VULN_DIGEST_LOG";

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; stdout carries the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

async fn run(args: Args) -> Result<()> {
    // Explicit --config must exist; the default file is optional
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let options = config::resolve_options(&args, config.as_ref())?;
    debug!(?options, "resolved options");

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let template_loader = FileSystemReader::new();
    let renderer = HandlebarsRenderer::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = RenderReportUseCase::new(reader, template_loader, renderer, progress_reporter);

    let response = use_case.render_report(options.request).await?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&response.content)?;

    StderrProgressReporter::new().report_completion(&format!(
        "✅ Report rendered: {} unique vulnerabilities, {} vulnerable paths",
        response.unique_count, response.paths_count
    ));

    Ok(())
}
