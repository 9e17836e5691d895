/// Console adapters for user-facing progress messages
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
