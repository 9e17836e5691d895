use clap::Parser;
use std::path::PathBuf;

use vuln_digest::application::dto::OutputFormat;

/// Turn vulnerability scan results into a readable report
#[derive(Parser, Debug)]
#[command(name = "vuln-digest")]
#[command(version)]
#[command(
    about = "Turn vulnerability scan results into a readable report",
    long_about = "Reads the JSON output of a dependency vulnerability scan (one project or a \
                  list of projects), groups the findings by vulnerability id and renders them \
                  through a Handlebars template."
)]
pub struct Args {
    /// Scan results JSON file (reads standard input if not specified)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Custom Handlebars template; other *.hbs files in its directory become partials
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only render the summary, without per-vulnerability details
    #[arg(short, long)]
    pub summary: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./vuln-digest.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
