//! Request handlers.
//!
//! Each handler is a pure request → response mapping. Failures are returned
//! as [`crate::error::AppError`] and rendered by its `IntoResponse` impl.

pub mod file;
pub mod meta;
pub mod text;

pub use file::uppercase_file;
pub use meta::{available_endpoints, health, info, not_found, ENDPOINTS};
pub use text::{uppercase_text, TextRequest};
