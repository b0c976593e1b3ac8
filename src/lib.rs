//! Uppercase text service library.
//!
//! Two endpoints uppercase text: one takes a JSON body, one takes an uploaded
//! text file. Everything else here is the plumbing around them.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod transform;
pub mod upload;

pub use config::ServiceConfig;
pub use error::{AppError, AppResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
