/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod requirements_request;
mod requirements_response;
mod scanner_kind;

pub use requirements_request::{RequirementsRequest, RequirementsRequestBuilder};
pub use requirements_response::RequirementsResponse;
pub use scanner_kind::ScannerKind;
