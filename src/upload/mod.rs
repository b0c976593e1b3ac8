//! Upload handling subsystem.
//!
//! # Data Flow
//! ```text
//! multipart body
//!     → receiver.rs (find the `file` part)
//!     → filter.rs (media type / extension check on part headers)
//!     → receiver.rs (buffer chunks, size cap per chunk)
//!     → UploadedFile (in memory, dropped with the request)
//! ```

pub mod filter;
pub mod receiver;

pub use filter::UploadFilter;
pub use receiver::{receive_file, UploadedFile, FILE_FIELD};
