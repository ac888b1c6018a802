/// Data Transfer Objects for the application layer
///
/// DTOs carry requests into the use case and results back out to the
/// adapters, keeping the resolution layer free of CLI concerns.
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolve_request::ResolveRequest;
pub use resolve_response::ResolveResponse;
