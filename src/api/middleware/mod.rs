//! HTTP middleware: authentication, request ids, logging, error mapping.

pub mod auth;
pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use auth::{AuthUser, auth_middleware};
pub use error_handler::{error_to_code, error_to_status_code};
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
