/// Console adapters: progress on stderr, the report on stdout
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
