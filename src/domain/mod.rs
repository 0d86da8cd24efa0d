//! Domain layer: strong types with validation and invariants (no I/O).

mod operation;
mod request;
mod response;
mod validation;
mod value;

pub use operation::{Operation, UnknownOperation};
pub use request::Credentials;
pub use response::{GatewayError, ParsedResponse, Value};
pub use validation::ValidationError;
pub use value::{ApiId, Password, SessionId, User};
