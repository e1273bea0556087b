/// Formatter adapters for rendering diff reports
mod text_formatter;

pub use text_formatter::TextFormatter;
