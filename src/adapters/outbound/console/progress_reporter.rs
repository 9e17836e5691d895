use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with a report on stdout.
/// Warnings and completion are colored when stderr is a terminal.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.green())
        );
    }
}
