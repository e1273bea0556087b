/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the domain layer isolated.
mod diff_request;
mod diff_response;

pub use diff_request::{DiffRequest, DiffRequestBuilder};
pub use diff_response::DiffResponse;
