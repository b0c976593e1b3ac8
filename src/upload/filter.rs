//! Upload admission checks.
//!
//! A part is admitted when its declared media type is on the allow-list, or,
//! failing that, when its filename extension is. Both checks only look at the
//! part headers, so they run before any file bytes are read. The size cap is
//! checked separately as chunks arrive.

use crate::config::UploadConfig;
use crate::error::AppError;

/// Immutable allow-lists and size cap built from [`UploadConfig`].
#[derive(Debug, Clone)]
pub struct UploadFilter {
    mime_types: Vec<String>,
    extensions: Vec<String>,
    max_file_size: usize,
}

impl UploadFilter {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            mime_types: config
                .allowed_mime_types
                .iter()
                .map(|m| m.trim().to_ascii_lowercase())
                .collect(),
            extensions: config
                .allowed_extensions
                .iter()
                .map(|e| e.trim().to_ascii_lowercase())
                .collect(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Decide from the part headers whether the upload may proceed.
    pub fn admit(&self, file_name: &str, mime_type: Option<&str>) -> Result<(), AppError> {
        if let Some(mime) = mime_type {
            if self.mime_allowed(mime) {
                return Ok(());
            }
        }

        if self.extension_allowed(file_name) {
            return Ok(());
        }

        Err(AppError::UnsupportedMedia(format!(
            "'{}' ({}) is not an accepted text file; accepted extensions: {}",
            file_name,
            mime_type.unwrap_or("no media type"),
            self.extensions.join(" ")
        )))
    }

    /// Reject once `received` bytes exceed the cap.
    pub fn check_size(&self, received: usize) -> Result<(), AppError> {
        if received > self.max_file_size {
            return Err(AppError::PayloadTooLarge {
                limit: self.max_file_size,
            });
        }
        Ok(())
    }

    fn mime_allowed(&self, mime: &str) -> bool {
        // Drop parameters such as "; charset=utf-8".
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        self.mime_types.iter().any(|m| *m == essence)
    }

    fn extension_allowed(&self, file_name: &str) -> bool {
        match file_name.rfind('.') {
            Some(idx) => {
                let ext = file_name[idx..].to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            }
            None => false,
        }
    }
}
